//! Remote Transfer Strategy
//!
//! Builds the command that copies a single local file into the remote
//! user's home directory.

use std::path::Path;
use std::process::Command;

use super::options::TransportOptions;
use super::rsync::RsyncTransfer;
use super::scp::ScpTransfer;

/// Strategy for transferring a file to a remote server
pub trait TransferStrategy: Send + Sync {
    /// Get the name of this transfer method (for display)
    fn name(&self) -> &'static str;

    /// Check if this transfer method is available on the system
    fn is_available(&self) -> bool;

    /// Build the copy command without running it
    ///
    /// # Arguments
    /// * `local_path` - File to send
    /// * `destination` - `user@host:` argument pointing at the remote home
    /// * `options` - Timeout and verbosity settings
    fn command(&self, local_path: &Path, destination: &str, options: &TransportOptions)
        -> Command;
}

/// Detect and return the best available transfer strategy
pub fn detect_strategy() -> Option<Box<dyn TransferStrategy>> {
    // Try rsync first (resumable, preserves permissions)
    let rsync = RsyncTransfer;
    if rsync.is_available() {
        return Some(Box::new(rsync));
    }

    // Fallback to scp (ships with every OpenSSH client)
    let scp = ScpTransfer;
    if scp.is_available() {
        return Some(Box::new(scp));
    }

    None
}
