//! Deploy errors

use thiserror::Error;

use crate::domain::ports::TransportError;
use crate::domain::value_objects::DeployStep;

/// Why a deploy stopped before activation finished
#[derive(Debug, Error)]
pub enum DeployError {
    /// A transport call failed; later steps were not attempted
    #[error("{step} failed: {source}")]
    Step {
        step: DeployStep,
        #[source]
        source: TransportError,
    },

    /// Cancellation was requested before `step` started
    #[error("interrupted before {step}")]
    Interrupted { step: DeployStep },
}

impl DeployError {
    pub fn step(&self) -> DeployStep {
        match self {
            DeployError::Step { step, .. } | DeployError::Interrupted { step } => *step,
        }
    }

    /// Captured remote output of the failed step, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            DeployError::Step { source, .. } => source.output(),
            DeployError::Interrupted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_names_the_pending_step() {
        let err = DeployError::Interrupted {
            step: DeployStep::UnitCopy,
        };
        assert_eq!(err.to_string(), "interrupted before unit-copy");
        assert_eq!(err.step(), DeployStep::UnitCopy);
        assert_eq!(err.output(), None);
    }

    #[test]
    fn step_error_exposes_source() {
        use std::error::Error as _;

        let err = DeployError::Step {
            step: DeployStep::Activation,
            source: TransportError::NotAvailable("ssh not found".to_string()),
        };
        assert_eq!(err.to_string(), "activation failed: ssh not found");
        assert!(err.source().is_some());
    }
}
