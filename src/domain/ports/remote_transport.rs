//! Remote Transport Port
//!
//! Copies files to a remote home directory and runs commands on the remote
//! host. Both operations block until the underlying tool exits.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::RemoteAddress;

/// Output captured from a transport call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Combined stdout/stderr, whatever the adapter captured
    pub output: String,
}

impl CommandOutput {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.output.trim().is_empty()
    }
}

/// Transport failure
#[derive(Debug, Error)]
pub enum TransportError {
    /// The tool ran and exited unsuccessfully
    #[error("{program} exited with {}", describe_exit(.code))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        output: String,
    },

    /// The tool could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// No usable tool is installed
    #[error("{0}")]
    NotAvailable(String),

    /// The local path to copy is a directory
    #[error("{} is a directory, expected a file", .0.display())]
    NotAFile(PathBuf),
}

impl TransportError {
    /// Captured output of a failed command, if it produced any
    pub fn output(&self) -> Option<&str> {
        match self {
            TransportError::CommandFailed { output, .. } if !output.trim().is_empty() => {
                Some(output.as_str())
            }
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Blocking transport to a single remote host
pub trait RemoteTransport {
    /// Short name of the underlying mechanism (for display)
    fn name(&self) -> &str;

    /// Copy `local_path` into the home directory of `remote`
    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError>;

    /// Run `command` in an interactive session on `remote`
    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError>;
}

impl<T: RemoteTransport + ?Sized> RemoteTransport for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError> {
        (**self).copy_to_remote(local_path, remote)
    }

    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        (**self).run_remote(remote, command)
    }
}

impl<T: RemoteTransport + ?Sized> RemoteTransport for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError> {
        (**self).copy_to_remote(local_path, remote)
    }

    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        (**self).run_remote(remote, command)
    }
}
