//! Console event sink
//!
//! Human-readable step progress on stderr, so stdout stays free for the
//! transfer tools' own progress output.

use std::io::Write;

use blitz::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{
    render_interrupted, render_step_completed, render_step_failed, render_step_output,
    render_step_started,
};

pub struct ConsoleEventSink {
    ui: UiContext,
    show_output: bool,
}

impl ConsoleEventSink {
    /// Step output is shown from `-v` on
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            show_output: ui.verbose > 0,
        }
    }

    /// Always show step output (dry runs print the planned commands)
    pub fn with_step_output(mut self, show: bool) -> Self {
        self.show_output |= show;
        self
    }

    /// Rendered text for `event`, if this sink shows it at all
    fn render(&self, event: &DeployEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        let text = match event {
            DeployEvent::StepStarted { step, description } => {
                format!("{}\n", render_step_started(*step, description, color, unicode))
            }
            DeployEvent::StepCompleted { step, output } => {
                let mut text = format!("{}\n", render_step_completed(*step, color, unicode));
                if self.show_output {
                    text.push_str(&render_step_output(output, color));
                }
                text
            }
            DeployEvent::StepFailed { step, error, .. } => {
                format!("{}\n", render_step_failed(*step, error, color, unicode))
            }
            DeployEvent::Interrupted { step } => {
                format!("{}\n", render_interrupted(*step, color, unicode))
            }
            DeployEvent::Started { .. } | DeployEvent::Completed { .. } => return None,
        };
        Some(text)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(&event) {
            let mut err = std::io::stderr().lock();
            let _ = err.write_all(text.as_bytes());
            let _ = err.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use blitz::DeployStep;

    fn sink(verbose: u8) -> ConsoleEventSink {
        let caps = TerminalCapabilities {
            is_tty: false,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
        };
        ConsoleEventSink::new(UiContext::from_caps(false, verbose, None, caps))
    }

    #[test]
    fn completed_output_only_in_verbose_mode() {
        let event = DeployEvent::StepCompleted {
            step: DeployStep::BinaryCopy,
            output: "sent 1.2M bytes\n".to_string(),
        };
        assert_eq!(
            sink(0).render(&event).unwrap(),
            "[OK] [1/3] binary-copy\n"
        );
        assert_eq!(
            sink(1).render(&event).unwrap(),
            "[OK] [1/3] binary-copy\n    sent 1.2M bytes\n"
        );
    }

    #[test]
    fn dry_run_always_shows_planned_command() {
        let event = DeployEvent::StepCompleted {
            step: DeployStep::Activation,
            output: "would run: ssh -t deploy@example.com true".to_string(),
        };
        let text = sink(0).with_step_output(true).render(&event).unwrap();
        assert!(text.ends_with("    would run: ssh -t deploy@example.com true\n"));
    }

    #[test]
    fn lifecycle_bookends_are_silent() {
        assert!(sink(2)
            .render(&DeployEvent::Completed { steps: 3 })
            .is_none());
    }
}
