//! SCP Transfer Strategy
//!
//! Fallback when rsync is not installed. scp writes straight to the final
//! name, so an interrupted copy can leave a truncated file behind; the next
//! deploy overwrites it.

use std::path::Path;
use std::process::Command;

use super::options::TransportOptions;
use super::process;
use super::strategy::TransferStrategy;

/// Transfer strategy using scp
pub struct ScpTransfer;

impl ScpTransfer {
    /// Check if scp is installed and available
    pub fn check_available() -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        process::is_installed("scp", None)
    }
}

impl TransferStrategy for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn is_available(&self) -> bool {
        Self::check_available()
    }

    fn command(
        &self,
        local_path: &Path,
        destination: &str,
        options: &TransportOptions,
    ) -> Command {
        let mut cmd = Command::new("scp");
        cmd.arg("-p"); // preserve mode and timestamps
        if options.quiet {
            cmd.arg("-q");
        }
        cmd.args(options.ssh_options())
            .arg("--")
            .arg(local_path)
            .arg(destination);
        cmd
    }
}
