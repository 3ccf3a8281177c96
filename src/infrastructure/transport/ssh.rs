//! SSH-based transport
//!
//! Copies with the detected transfer strategy and runs remote commands in an
//! interactive `ssh -t` session so `sudo` can prompt for a password.

use std::path::Path;
use std::process::Command;

use crate::domain::ports::{CommandOutput, RemoteTransport, TransportError};
use crate::domain::value_objects::RemoteAddress;

use super::options::TransportOptions;
use super::process;
use super::strategy::{detect_strategy, TransferStrategy};

/// Transport backed by the system OpenSSH client tools
pub struct SshTransport {
    strategy: Box<dyn TransferStrategy>,
    options: TransportOptions,
}

impl SshTransport {
    pub fn new(strategy: Box<dyn TransferStrategy>, options: TransportOptions) -> Self {
        Self { strategy, options }
    }

    /// Pick rsync or scp, whichever is installed
    pub fn detect(options: TransportOptions) -> Result<Self, TransportError> {
        let strategy = detect_strategy().ok_or_else(|| {
            TransportError::NotAvailable(
                "neither rsync nor scp is installed; install openssh-client or rsync".to_string(),
            )
        })?;
        Ok(Self::new(strategy, options))
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// Build the copy command for `local_path`
    pub fn copy_command(&self, local_path: &Path, remote: &RemoteAddress) -> Command {
        self.strategy
            .command(local_path, &remote.home_destination(), &self.options)
    }

    /// Build the `ssh -t` command running `command` on `remote`
    pub fn ssh_command(&self, remote: &RemoteAddress, command: &str) -> Command {
        let mut cmd = Command::new("ssh");
        cmd.arg("-t")
            .args(self.options.ssh_options())
            .arg("--")
            .arg(remote.to_string())
            .arg(command);
        cmd
    }
}

impl RemoteTransport for SshTransport {
    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError> {
        ensure_file(local_path)?;
        process::run(self.copy_command(local_path, remote), self.options.quiet)
    }

    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        process::run(self.ssh_command(remote, command), self.options.quiet)
    }
}

/// Copies send exactly one file; a directory (e.g. `bin/..`) is refused.
pub(super) fn ensure_file(local_path: &Path) -> Result<(), TransportError> {
    if local_path.is_dir() {
        return Err(TransportError::NotAFile(local_path.to_path_buf()));
    }
    Ok(())
}
