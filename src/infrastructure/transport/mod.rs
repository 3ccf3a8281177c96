//! Remote Transport
//!
//! Implements `RemoteTransport` on top of the system OpenSSH tools.
//! File copies use a pluggable transfer strategy (rsync preferred, scp
//! fallback); remote commands always go through `ssh -t`.

mod dry_run;
mod options;
mod process;
mod rsync;
mod scp;
mod ssh;
mod strategy;

pub use dry_run::{DryRunTransport, PlannedCall};
pub use options::{TransportOptions, DEFAULT_CONNECT_TIMEOUT};
pub use rsync::RsyncTransfer;
pub use scp::ScpTransfer;
pub use ssh::SshTransport;
pub use strategy::{detect_strategy, TransferStrategy};
