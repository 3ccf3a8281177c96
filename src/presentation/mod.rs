//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//!
//! CLI parsing and terminal rendering live in the binary crate.
//!
//! ## Usage
//!
//! ```ignore
//! use blitz::presentation::factory;
//!
//! // Create deploy use case with all dependencies wired up
//! let use_case = factory::create_deploy_use_case(false, TransportOptions::default())?;
//! let report = use_case.execute(&target, &options)?;
//! ```

pub mod factory;

pub use factory::{create_deploy_use_case, create_transport, ConcreteDeployUseCase};
