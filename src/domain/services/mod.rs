//! Domain Services
//!
//! Stateless logic that operates on value objects.

mod activation;

pub use activation::{shell_quote, ActivationPlan, RemoteArg, RemoteCommand};
