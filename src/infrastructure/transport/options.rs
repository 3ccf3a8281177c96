//! Transport options shared by ssh, rsync, and scp invocations

use std::time::Duration;

/// Connect timeout used when none is given on the command line
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    /// Passed as `-o ConnectTimeout=<secs>`; `None` leaves the ssh default
    pub connect_timeout: Option<Duration>,
    /// Capture all tool output instead of streaming it to the terminal
    pub quiet: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            quiet: false,
        }
    }
}

impl TransportOptions {
    /// Build from a seconds value where `0` disables the timeout
    pub fn from_timeout_secs(secs: u64) -> Self {
        Self {
            connect_timeout: (secs > 0).then(|| Duration::from_secs(secs)),
            ..Self::default()
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// `-o` options understood by both ssh and scp
    pub fn ssh_options(&self) -> Vec<String> {
        match self.connect_timeout {
            Some(timeout) => vec![
                "-o".to_string(),
                format!("ConnectTimeout={}", timeout.as_secs().max(1)),
            ],
            None => Vec::new(),
        }
    }

    /// Remote shell for `rsync -e`
    pub fn rsync_remote_shell(&self) -> String {
        let mut parts = vec!["ssh".to_string()];
        parts.extend(self.ssh_options());
        parts.join(" ")
    }
}
