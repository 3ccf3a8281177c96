//! Deploy Options
//!
//! Per-run settings that do not come from the deployment target itself.

use crate::domain::value_objects::Environment;

/// Options for the deploy use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Environment the artifacts were built for (reported, not acted on)
    pub environment: Environment,
    /// Dry run (transport records calls instead of running them)
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
