//! Design tokens for the Blitz CLI UI.
//!
//! Every icon, border glyph and color used by the renderers comes from here,
//! each glyph with an ASCII twin for `TERM=dumb` and non-UTF-8 locales.

use crossterm::style::Color;

/// Semantic colors
pub mod colors {
    use super::Color;

    /// Completed steps and the final summary
    pub const SUCCESS: Color = Color::Green;
    /// Failed steps and error panels
    pub const ERROR: Color = Color::Red;
    /// Running steps, dry-run notes
    pub const WARNING: Color = Color::Yellow;
    /// Step names and headers
    pub const INFO: Color = Color::Cyan;
    /// Labels and captured tool output
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";

    // Header markers.
    pub const DEPLOY: &str = "🚀";
    pub const DRY_RUN: &str = "📋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";

    pub const DEPLOY: &str = "[DEPLOY]";
    pub const DRY_RUN: &str = "[PLAN]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
