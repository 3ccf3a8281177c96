//! Deploy Module
//!
//! Orchestrates the deployment flow for Blitz.
//!
//! ## Structure
//!
//! - `options` - Per-run settings (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `StepRecord`)
//! - `error` - Failure taxonomy (`DeployError`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use blitz::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(transport);
//! let report = use_case.execute(&config.deployment_target(), &DeployOptions::new(env))?;
//! ```

mod error;
mod options;
mod result;
mod use_case;

pub use error::DeployError;
pub use options::DeployOptions;
pub use result::{DeployReport, StepRecord};
pub use use_case::DeployUseCase;

#[cfg(test)]
mod tests;
