//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::{DeployStep, Environment};

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        service: String,
        environment: Environment,
        remote: String,
        transport: String,
        dry_run: bool,
    },

    /// A pipeline step is about to run
    StepStarted { step: DeployStep, description: String },

    /// A pipeline step finished successfully
    StepCompleted { step: DeployStep, output: String },

    /// A pipeline step failed; the pipeline stops here
    StepFailed {
        step: DeployStep,
        error: String,
        output: String,
    },

    /// Cancellation was requested before `step` could start
    Interrupted { step: DeployStep },

    /// All steps completed
    Completed { steps: usize },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
