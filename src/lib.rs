//! Blitz - single-service deploy tool
//!
//! Blitz validates a small deploy configuration, copies a compiled service
//! binary and its systemd unit file to a remote host, and activates the
//! service there (install unit, enable, restart).
//!
//! ## Structure
//!
//! - `config` - Raw input layering (`.env` overlay, env, flags) and validation
//! - `domain` - Value objects, ports, and the activation command builder
//! - `application` - The deploy use case (pipeline state machine)
//! - `infrastructure` - ssh/rsync/scp transport and event sinks
//! - `presentation` - Wiring of use cases with concrete adapters

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::deploy::{DeployError, DeployOptions, DeployReport, DeployUseCase};
pub use config::{validate, Config, ConfigOverrides, RawConfig};
pub use domain::value_objects::{
    ConfigField, DeployStep, DeploymentTarget, Environment, Host, RemoteAddress, ServiceName,
    ValidationError, ValidationReason,
};
pub use error::{BlitzError, BlitzResult};
