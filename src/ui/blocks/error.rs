use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Maximum number of captured output lines shown in an error block
const MAX_OUTPUT_LINES: usize = 12;

/// Error panel: what failed, why, captured output, and how to fix it
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    output: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            output: None,
            fix: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        if !output.trim().is_empty() {
            self.output = Some(output);
        }
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        panel.add_empty();
        panel.add_line(self.message.as_str());

        if let Some(output) = &self.output {
            panel.add_empty();
            let lines: Vec<&str> = output.trim_end().lines().collect();
            let skipped = lines.len().saturating_sub(MAX_OUTPUT_LINES);
            if skipped > 0 {
                panel.add_line(
                    ColoredText::dim(format!("... {} earlier lines", skipped))
                        .render(supports_color),
                );
            }
            for line in &lines[skipped..] {
                panel.add_line(ColoredText::dim(*line).render(supports_color));
            }
        }

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
