//! Deploy Use Case Tests

use super::*;
use crate::domain::ports::{
    CommandOutput, DeployEvent, DeployEventSink, RemoteTransport, TransportError,
};
use crate::domain::value_objects::{
    DeployStep, DeployUser, DeploymentTarget, Environment, Host, RemoteAddress, ServiceName,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// Mock implementations for testing

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Copy { path: PathBuf, remote: String },
    Run { remote: String, command: String },
}

#[derive(Default)]
struct MockTransport {
    calls: RefCell<Vec<Call>>,
    fail_at: Option<DeployStep>,
    /// Set this flag after the given number of calls
    cancel_after: Option<(usize, Arc<AtomicBool>)>,
}

impl MockTransport {
    fn failing_at(step: DeployStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn step_for_call(&self, index: usize) -> DeployStep {
        DeployStep::ALL[index]
    }

    fn finish(&self, call: Call) -> Result<CommandOutput, TransportError> {
        let index = self.calls.borrow().len();
        self.calls.borrow_mut().push(call);

        if let Some((after, flag)) = &self.cancel_after {
            if index + 1 == *after {
                flag.store(true, Ordering::SeqCst);
            }
        }

        if self.fail_at == Some(self.step_for_call(index)) {
            return Err(TransportError::CommandFailed {
                program: "mock".to_string(),
                code: Some(1),
                output: format!("step {} broke", index),
            });
        }
        Ok(CommandOutput::new(format!("ok {}", index)))
    }
}

impl RemoteTransport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    fn copy_to_remote(
        &self,
        local_path: &Path,
        remote: &RemoteAddress,
    ) -> Result<CommandOutput, TransportError> {
        self.finish(Call::Copy {
            path: local_path.to_path_buf(),
            remote: remote.to_string(),
        })
    }

    fn run_remote(
        &self,
        remote: &RemoteAddress,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        self.finish(Call::Run {
            remote: remote.to_string(),
            command: command.to_string(),
        })
    }
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<DeployEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeployEventSink for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn target() -> DeploymentTarget {
    DeploymentTarget::new(
        ServiceName::new("blitz").unwrap(),
        Path::new("bin"),
        Path::new("remote/production"),
        RemoteAddress::new(
            DeployUser::new("deploy_user").unwrap(),
            Host::new("192.168.1.10").unwrap(),
        ),
    )
}

fn options() -> DeployOptions {
    DeployOptions::new(Environment::Production)
}

fn expected_calls() -> Vec<Call> {
    vec![
        Call::Copy {
            path: PathBuf::from("bin/blitz"),
            remote: "deploy_user@192.168.1.10".to_string(),
        },
        Call::Copy {
            path: PathBuf::from("remote/production/blitz.service"),
            remote: "deploy_user@192.168.1.10".to_string(),
        },
        Call::Run {
            remote: "deploy_user@192.168.1.10".to_string(),
            command: "sudo mv ~/blitz.service /etc/systemd/system/ && sudo systemctl enable blitz && sudo systemctl restart blitz".to_string(),
        },
    ]
}

#[test]
fn deploy_runs_all_steps_in_order() {
    let use_case = DeployUseCase::new(MockTransport::default());
    let report = use_case.execute(&target(), &options()).unwrap();

    assert_eq!(use_case.transport().calls(), expected_calls());
    assert!(report.is_complete());
    assert_eq!(report.service, "blitz");
    assert_eq!(report.remote, "deploy_user@192.168.1.10");
    assert_eq!(report.steps[2].output, "ok 2");
}

#[test]
fn binary_copy_failure_stops_pipeline() {
    let use_case = DeployUseCase::new(MockTransport::failing_at(DeployStep::BinaryCopy));
    let err = use_case.execute(&target(), &options()).unwrap_err();

    assert_eq!(err.step(), DeployStep::BinaryCopy);
    assert_eq!(use_case.transport().calls().len(), 1);
    assert_eq!(err.output(), Some("step 0 broke"));
}

#[test]
fn unit_copy_failure_skips_activation() {
    let use_case = DeployUseCase::new(MockTransport::failing_at(DeployStep::UnitCopy));
    let err = use_case.execute(&target(), &options()).unwrap_err();

    assert!(matches!(
        err,
        DeployError::Step {
            step: DeployStep::UnitCopy,
            ..
        }
    ));
    assert_eq!(use_case.transport().calls(), expected_calls()[..2].to_vec());
}

#[test]
fn activation_failure_is_reported_with_step() {
    let use_case = DeployUseCase::new(MockTransport::failing_at(DeployStep::Activation));
    let err = use_case.execute(&target(), &options()).unwrap_err();

    assert_eq!(err.step(), DeployStep::Activation);
    assert_eq!(err.to_string(), "activation failed: mock exited with code 1");
    assert_eq!(use_case.transport().calls().len(), 3);
}

#[test]
fn rerun_issues_identical_calls() {
    let first = DeployUseCase::new(MockTransport::default());
    first.execute(&target(), &options()).unwrap();
    let second = DeployUseCase::new(MockTransport::default());
    second.execute(&target(), &options()).unwrap();

    assert_eq!(first.transport().calls(), second.transport().calls());
}

#[test]
fn cancellation_before_start_runs_nothing() {
    let flag = Arc::new(AtomicBool::new(true));
    let use_case = DeployUseCase::new(MockTransport::default()).with_cancellation(flag);
    let err = use_case.execute(&target(), &options()).unwrap_err();

    assert!(matches!(
        err,
        DeployError::Interrupted {
            step: DeployStep::BinaryCopy
        }
    ));
    assert!(use_case.transport().calls().is_empty());
}

#[test]
fn cancellation_between_steps_stops_before_next_step() {
    let flag = Arc::new(AtomicBool::new(false));
    let transport = MockTransport {
        cancel_after: Some((1, flag.clone())),
        ..Default::default()
    };
    let use_case = DeployUseCase::new(transport).with_cancellation(flag);
    let err = use_case.execute(&target(), &options()).unwrap_err();

    assert_eq!(err.step(), DeployStep::UnitCopy);
    assert_eq!(use_case.transport().calls().len(), 1);
}

#[test]
fn events_follow_step_lifecycle() {
    let sink = Arc::new(RecordingSink::default());
    let use_case = DeployUseCase::new(MockTransport::default());
    use_case
        .execute_with_events(&target(), &options().with_dry_run(true), sink.clone())
        .unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 8);
    assert_eq!(
        events[0],
        DeployEvent::Started {
            service: "blitz".to_string(),
            environment: Environment::Production,
            remote: "deploy_user@192.168.1.10".to_string(),
            transport: "mock".to_string(),
            dry_run: true,
        }
    );
    assert!(matches!(
        events[1],
        DeployEvent::StepStarted {
            step: DeployStep::BinaryCopy,
            ..
        }
    ));
    assert!(matches!(
        events[6],
        DeployEvent::StepCompleted {
            step: DeployStep::Activation,
            ..
        }
    ));
    assert_eq!(events[7], DeployEvent::Completed { steps: 3 });
}

#[test]
fn failed_step_emits_step_failed_and_no_completed() {
    let sink = Arc::new(RecordingSink::default());
    let use_case = DeployUseCase::new(MockTransport::failing_at(DeployStep::UnitCopy));
    let _ = use_case.execute_with_events(&target(), &options(), sink.clone());

    let events = sink.events();
    let last = events.last().unwrap();
    assert_eq!(
        *last,
        DeployEvent::StepFailed {
            step: DeployStep::UnitCopy,
            error: "mock exited with code 1".to_string(),
            output: "step 1 broke".to_string(),
        }
    );
    assert!(!events
        .iter()
        .any(|e| matches!(e, DeployEvent::Completed { .. })));
}

#[test]
fn failure_at_any_step_is_terminal() {
    for (index, step) in DeployStep::ALL.into_iter().enumerate() {
        let sink = Arc::new(RecordingSink::default());
        let use_case = DeployUseCase::new(MockTransport::failing_at(step));
        let err = use_case
            .execute_with_events(&target(), &options(), sink.clone())
            .unwrap_err();

        assert_eq!(err.step(), step);
        assert_eq!(use_case.transport().calls().len(), index + 1);
        let started = sink
            .events()
            .iter()
            .filter(|e| matches!(e, DeployEvent::StepStarted { .. }))
            .count();
        assert_eq!(started, index + 1);
    }
}

#[test]
fn step_descriptions_name_paths_and_destination() {
    let t = target();
    assert_eq!(
        use_case::describe_step(DeployStep::BinaryCopy, &t),
        "copy bin/blitz to deploy_user@192.168.1.10:"
    );
    assert_eq!(
        use_case::describe_step(DeployStep::Activation, &t),
        "install /etc/systemd/system/blitz.service and restart blitz"
    );
}
