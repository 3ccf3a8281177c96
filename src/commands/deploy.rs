//! `blitz deploy`

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use blitz::domain::ports::DeployEventSink;
use blitz::infrastructure::{JsonEventSink, TransportOptions};
use blitz::presentation::create_deploy_use_case;
use blitz::{BlitzError, Config, ConfigOverrides, DeployOptions};

use crate::cli::{ColorWhen, DeployArgs};
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

/// Global flags that shape how a deploy runs and reports
pub struct GlobalArgs<'a> {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub env_file: Option<&'a Path>,
}

pub fn cmd_deploy(args: &DeployArgs, global: &GlobalArgs<'_>) -> Result<()> {
    let config = Config::load(&overrides_from(args), global.env_file)?;
    let target = config.deployment_target();

    let ui = UiContext::new(global.json, global.verbose, global.color);
    let transport_options =
        TransportOptions::from_timeout_secs(args.connect_timeout).with_quiet(ui.quiet_transport());
    let use_case = create_deploy_use_case(args.dry_run, transport_options)?
        .with_cancellation(interrupt_flag()?);

    if !ui.json {
        print!(
            "{}",
            render_deploy_header(
                &config,
                &target,
                use_case.transport().name(),
                args.dry_run,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui).with_step_output(args.dry_run))
    };

    let options = DeployOptions::new(config.environment()).with_dry_run(args.dry_run);
    let report = use_case
        .execute_with_events(&target, &options, sink)
        .map_err(BlitzError::from)?;

    if !ui.json {
        print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));
    }

    Ok(())
}

fn overrides_from(args: &DeployArgs) -> ConfigOverrides {
    ConfigOverrides {
        env: args.env.clone(),
        service_name: args.service_name.clone(),
        binary_dir: args.binary_dir.clone(),
        unit_dir: args.unit_dir.clone(),
        user: args.user.clone(),
        host: args.host.clone(),
    }
}

/// Flag set by Ctrl+C; the pipeline stops before its next step
fn interrupt_flag() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl+C handler")?;
    Ok(flag)
}
