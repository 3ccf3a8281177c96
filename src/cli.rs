use std::ffi::OsString;
use std::path::PathBuf;

use blitz::infrastructure::transport::DEFAULT_CONNECT_TIMEOUT;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Blitz - ship a service binary and its systemd unit, then restart it
#[derive(Parser, Debug)]
#[command(name = "blitz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows captured tool output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Overlay file of KEY=value lines (default: ./.env when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the binary and unit file to the host, then enable and restart the service
    Deploy(DeployArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployArgs {
    /// Deployment environment: development, staging, production [env: ENV]
    #[arg(long)]
    pub env: Option<String>,

    /// Service name; also the binary and unit file name [env: SERVICE_NAME]
    #[arg(long)]
    pub service_name: Option<String>,

    /// Local directory holding the compiled binary [env: BINARY_DIR]
    #[arg(long)]
    pub binary_dir: Option<String>,

    /// Local directory holding <service>.service [env: UNIT_DIR]
    #[arg(long)]
    pub unit_dir: Option<String>,

    /// Remote login user [env: USER]
    #[arg(long)]
    pub user: Option<String>,

    /// Remote host, IP address or hostname [env: HOST]
    #[arg(long)]
    pub host: Option<String>,

    /// Show the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// ssh connect timeout in seconds (0 disables)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout: u64,
}

/// Long flags that older scripts spell with a single dash
const LEGACY_LONG_FLAGS: &[&str] = &[
    "env",
    "service-name",
    "binary-dir",
    "unit-dir",
    "user",
    "host",
    "dry-run",
    "connect-timeout",
    "env-file",
    "json",
    "color",
];

/// Rewrite `-service-name x` / `-host=y` into their `--` forms.
///
/// Only known long names are touched, so clustered short flags like `-vv`
/// pass through. Everything after a bare `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let rest = s.strip_prefix('-')?;
            if rest.starts_with('-') {
                return None;
            }
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            LEGACY_LONG_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{}", s)))
        });
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
