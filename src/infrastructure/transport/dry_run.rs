//! Dry-run transport
//!
//! Records every call and reports the command line that would have run.
//! Nothing is spawned and the network is never touched.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::{CommandOutput, RemoteTransport, TransportError};
use crate::domain::value_objects::RemoteAddress;

use super::options::TransportOptions;
use super::process::display_command;
use super::ssh::{ensure_file, SshTransport};
use super::strategy::TransferStrategy;

/// A call the dry-run transport received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedCall {
    Copy {
        local_path: PathBuf,
        destination: String,
    },
    Run {
        remote: String,
        command: String,
    },
}

/// Transport that plans instead of executing
pub struct DryRunTransport {
    inner: SshTransport,
    planned: Mutex<Vec<PlannedCall>>,
}

impl DryRunTransport {
    /// Plan with `strategy` so the rendered commands match a real run
    pub fn new(strategy: Box<dyn TransferStrategy>, options: TransportOptions) -> Self {
        Self {
            inner: SshTransport::new(strategy, options),
            planned: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in order
    pub fn planned(&self) -> Vec<PlannedCall> {
        self.planned
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, call: PlannedCall) {
        if let Ok(mut calls) = self.planned.lock() {
            calls.push(call);
        }
    }
}

impl RemoteTransport for DryRunTransport {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError> {
        ensure_file(local_path)?;
        let rendered = display_command(&self.inner.copy_command(local_path, remote));
        self.push(PlannedCall::Copy {
            local_path: local_path.to_path_buf(),
            destination: remote.home_destination(),
        });
        Ok(CommandOutput::new(format!("would run: {}", rendered)))
    }

    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        let rendered = display_command(&self.inner.ssh_command(remote, command));
        self.push(PlannedCall::Run {
            remote: remote.to_string(),
            command: command.to_string(),
        });
        Ok(CommandOutput::new(format!("would run: {}", rendered)))
    }
}
