//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `transport/` - `RemoteTransport` over ssh, rsync, and scp (plus dry run)
//! - `events/` - `DeployEventSink` implementations (NDJSON)

pub mod events;
pub mod transport;

// Re-export for convenience
pub use events::JsonEventSink;
pub use transport::{
    detect_strategy, DryRunTransport, RsyncTransfer, ScpTransfer, SshTransport, TransferStrategy,
    TransportOptions,
};
