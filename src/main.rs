//! Blitz CLI - single-service deploy tool
//!
//! Usage: blitz [--json] [-v] [--env-file <PATH>] deploy [OPTIONS]

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{normalize_legacy_flags, Cli, Commands};
use commands::deploy::{cmd_deploy, GlobalArgs};

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_legacy_flags(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let ui_ctx = ui::context::UiContext::new(cli.json, cli.verbose, cli.color);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &ui_ctx);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        env_file: cli.env_file.as_deref(),
    };

    match &cli.command {
        Commands::Deploy(args) => cmd_deploy(args, &global),
    }
}
