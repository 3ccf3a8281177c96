//! Deploy pipeline steps and states
//!
//! ```text
//! Start --binary-copy--> BinaryCopied --unit-copy--> UnitCopied --activation--> Activated
//!   \                       \                           \
//!    +--> Failed(step)       +--> Failed(step)           +--> Failed(step)
//! ```

use std::fmt;

use serde::Serialize;

/// One step of the deploy pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployStep {
    /// Copy the service binary to the remote home directory
    BinaryCopy,
    /// Copy the unit file to the remote home directory
    UnitCopy,
    /// Install the unit, enable it, restart the service
    Activation,
}

impl DeployStep {
    pub const ALL: [DeployStep; 3] = [
        DeployStep::BinaryCopy,
        DeployStep::UnitCopy,
        DeployStep::Activation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::BinaryCopy => "binary-copy",
            DeployStep::UnitCopy => "unit-copy",
            DeployStep::Activation => "activation",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployState {
    #[default]
    Start,
    BinaryCopied,
    UnitCopied,
    /// Terminal success
    Activated,
    /// Terminal failure at the given step
    Failed(DeployStep),
}

impl DeployState {
    /// Step that moves this state forward, `None` for terminal states
    pub fn next_step(&self) -> Option<DeployStep> {
        match self {
            DeployState::Start => Some(DeployStep::BinaryCopy),
            DeployState::BinaryCopied => Some(DeployStep::UnitCopy),
            DeployState::UnitCopied => Some(DeployStep::Activation),
            DeployState::Activated | DeployState::Failed(_) => None,
        }
    }

    /// State reached once `step` has succeeded
    pub fn after(step: DeployStep) -> Self {
        match step {
            DeployStep::BinaryCopy => DeployState::BinaryCopied,
            DeployStep::UnitCopy => DeployState::UnitCopied,
            DeployStep::Activation => DeployState::Activated,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next_step().is_none()
    }
}
