//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Copy the service binary to the remote home directory
//! 2. Copy the unit file to the remote home directory
//! 3. Install the unit, enable it, and restart the service
//!
//! Steps run strictly in order and the first failure ends the run. Nothing
//! is retried or rolled back; the remote host is left as the completed steps
//! left it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{
    CommandOutput, DeployEvent, DeployEventSink, NoopEventSink, RemoteTransport, TransportError,
};
use crate::domain::services::ActivationPlan;
use crate::domain::value_objects::{DeployState, DeployStep, DeploymentTarget};

use super::error::DeployError;
use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its transport, so tests can substitute a recording mock
/// and `--dry-run` can substitute a transport that touches nothing.
pub struct DeployUseCase<T: RemoteTransport> {
    transport: T,
    cancel: Option<Arc<AtomicBool>>,
}

impl<T: RemoteTransport> DeployUseCase<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cancel: None,
        }
    }

    /// Stop before the next step once `flag` is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        target: &DeploymentTarget,
        options: &DeployOptions,
    ) -> Result<DeployReport, DeployError> {
        self.execute_with_events(target, options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    ///
    /// Every step emits `StepStarted` followed by either `StepCompleted` or
    /// `StepFailed`. A failed step moves the pipeline to the terminal
    /// `Failed` state, so no later step runs. A successful run ends with
    /// `Completed`.
    pub fn execute_with_events(
        &self,
        target: &DeploymentTarget,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> Result<DeployReport, DeployError> {
        let mut report = DeployReport::new(
            target.service().as_str(),
            target.remote().to_string(),
            options.dry_run,
        );

        event_sink.on_event(DeployEvent::Started {
            service: report.service.clone(),
            environment: options.environment,
            remote: report.remote.clone(),
            transport: self.transport.name().to_string(),
            dry_run: options.dry_run,
        });

        let mut state = DeployState::Start;
        let mut failure = None;
        while let Some(step) = state.next_step() {
            if self.is_cancelled() {
                event_sink.on_event(DeployEvent::Interrupted { step });
                return Err(DeployError::Interrupted { step });
            }

            event_sink.on_event(DeployEvent::StepStarted {
                step,
                description: describe_step(step, target),
            });

            match self.run_step(step, target) {
                Ok(out) => {
                    event_sink.on_event(DeployEvent::StepCompleted {
                        step,
                        output: out.output.clone(),
                    });
                    report.record(step, out.output);
                    state = DeployState::after(step);
                }
                Err(source) => {
                    event_sink.on_event(DeployEvent::StepFailed {
                        step,
                        error: source.to_string(),
                        output: source.output().unwrap_or_default().to_string(),
                    });
                    failure = Some(source);
                    state = DeployState::Failed(step);
                }
            }
        }

        if let (DeployState::Failed(step), Some(source)) = (state, failure) {
            return Err(DeployError::Step { step, source });
        }

        event_sink.on_event(DeployEvent::Completed {
            steps: report.steps.len(),
        });

        Ok(report)
    }

    fn run_step(
        &self,
        step: DeployStep,
        target: &DeploymentTarget,
    ) -> Result<CommandOutput, TransportError> {
        match step {
            DeployStep::BinaryCopy => self
                .transport
                .copy_to_remote(target.binary_path(), target.remote()),
            DeployStep::UnitCopy => self
                .transport
                .copy_to_remote(target.unit_path(), target.remote()),
            DeployStep::Activation => {
                let command = ActivationPlan::for_service(target.service()).render();
                self.transport.run_remote(target.remote(), &command)
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Human-readable summary of what `step` is about to do
pub(crate) fn describe_step(step: DeployStep, target: &DeploymentTarget) -> String {
    match step {
        DeployStep::BinaryCopy => format!(
            "copy {} to {}",
            target.binary_path().display(),
            target.remote().home_destination()
        ),
        DeployStep::UnitCopy => format!(
            "copy {} to {}",
            target.unit_path().display(),
            target.remote().home_destination()
        ),
        DeployStep::Activation => format!(
            "install {} and restart {}",
            target.remote_unit_path(),
            target.service()
        ),
    }
}
