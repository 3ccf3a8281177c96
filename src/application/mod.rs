//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs the binary copy, unit copy, and activation steps

pub mod deploy;

pub use deploy::{DeployError, DeployOptions, DeployReport, DeployUseCase, StepRecord};
