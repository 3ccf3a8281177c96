//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event into its NDJSON object
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            service,
            environment,
            remote,
            transport,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "service": service,
            "environment": environment,
            "remote": remote,
            "transport": transport,
            "dry_run": dry_run,
        }),

        DeployEvent::StepStarted { step, description } => serde_json::json!({
            "event": "step_start",
            "command": "deploy",
            "step": step,
            "description": description,
        }),

        DeployEvent::StepCompleted { step, output } => serde_json::json!({
            "event": "step_complete",
            "command": "deploy",
            "step": step,
            "output": output,
        }),

        DeployEvent::StepFailed {
            step,
            error,
            output,
        } => serde_json::json!({
            "event": "step_error",
            "command": "deploy",
            "step": step,
            "error": error,
            "output": output,
        }),

        DeployEvent::Interrupted { step } => serde_json::json!({
            "event": "interrupted",
            "command": "deploy",
            "step": step,
        }),

        DeployEvent::Completed { steps } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "steps": steps,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}
