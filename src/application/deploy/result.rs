//! Deploy Result
//!
//! Result types for deploy operations.

use serde::Serialize;

use crate::domain::value_objects::DeployStep;

/// A pipeline step that completed, with whatever output it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: DeployStep,
    pub output: String,
}

/// Result of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployReport {
    /// Service that was deployed
    pub service: String,
    /// `user@host` the artifacts went to
    pub remote: String,
    /// Completed steps, in execution order
    pub steps: Vec<StepRecord>,
    pub dry_run: bool,
}

impl DeployReport {
    pub fn new(service: impl Into<String>, remote: impl Into<String>, dry_run: bool) -> Self {
        Self {
            service: service.into(),
            remote: remote.into(),
            steps: Vec::new(),
            dry_run,
        }
    }

    pub fn record(&mut self, step: DeployStep, output: impl Into<String>) {
        self.steps.push(StepRecord {
            step,
            output: output.into(),
        });
    }

    pub fn completed_steps(&self) -> impl Iterator<Item = DeployStep> + '_ {
        self.steps.iter().map(|r| r.step)
    }

    /// True once every pipeline step has run
    pub fn is_complete(&self) -> bool {
        self.completed_steps().eq(DeployStep::ALL)
    }
}
