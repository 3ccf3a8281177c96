//! Rsync Transfer Strategy
//!
//! Preferred when installed. Partial transfers go to `.blitz-partial/` on
//! the remote side, so an interrupted copy never leaves a truncated file
//! under the final name. Copies a single file: no `-a`, since that implies
//! `-r`.

use std::path::Path;
use std::process::Command;

use super::options::TransportOptions;
use super::process;
use super::strategy::TransferStrategy;

/// Remote directory (relative to home) holding partially transferred files
pub const PARTIAL_DIR: &str = ".blitz-partial";

/// Transfer strategy using rsync
pub struct RsyncTransfer;

impl RsyncTransfer {
    /// Check if rsync is installed and available
    pub fn check_available() -> bool {
        process::is_installed("rsync", Some("--version"))
    }
}

impl TransferStrategy for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
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
        let mut cmd = Command::new("rsync");
        // permissions, times, compression
        cmd.arg("-ptz")
            .arg(format!("--partial-dir={}", PARTIAL_DIR))
            .arg("-e")
            .arg(options.rsync_remote_shell());
        if !options.quiet {
            cmd.arg("--progress");
        }
        cmd.arg("--").arg(local_path).arg(destination);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn rsync_transfer_name() {
        assert_eq!(RsyncTransfer.name(), "rsync");
    }

    #[test]
    fn command_copies_into_remote_home_with_progress() {
        let cmd = RsyncTransfer.command(
            Path::new("bin/api"),
            "deploy@example.com:",
            &TransportOptions::default(),
        );
        assert_eq!(cmd.get_program(), "rsync");
        assert_eq!(
            args(&cmd),
            vec![
                "-ptz",
                "--partial-dir=.blitz-partial",
                "-e",
                "ssh -o ConnectTimeout=30",
                "--progress",
                "--",
                "bin/api",
                "deploy@example.com:",
            ]
        );
    }

    #[test]
    fn quiet_command_drops_progress() {
        let options = TransportOptions::default().with_quiet(true);
        let cmd = RsyncTransfer.command(Path::new("a"), "u@h:", &options);
        assert!(!args(&cmd).iter().any(|a| a == "--progress"));
    }

    #[test]
    fn command_does_not_recurse() {
        let cmd = RsyncTransfer.command(Path::new("bin/.."), "u@h:", &TransportOptions::default());
        let args = args(&cmd);
        assert!(!args.iter().any(|a| a == "-r" || a.starts_with("-a")));
        assert!(!args.iter().any(|a| a == "--recursive" || a == "--archive"));
    }

    #[test]
    fn dash_leading_path_follows_end_of_options() {
        let cmd = RsyncTransfer.command(Path::new("-e/api"), "u@h:", &TransportOptions::default());
        let args = args(&cmd);
        let sep = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(&args[sep + 1..], ["-e/api", "u@h:"]);
    }

    #[test]
    fn check_available_does_not_panic() {
        let _ = RsyncTransfer::check_available();
    }
}
