//! Visual theme and styling.

use console::Style;

/// Styles for every kind of line toolprep prints.
#[derive(Debug, Clone)]
pub struct ToolprepTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Secondary text: versions, durations, skipped tools.
    pub dim: Style,
    pub highlight: Style,
    pub header: Style,
    /// Commands echoed in verbose mode and error blocks.
    pub command: Style,
    /// Summary box frame.
    pub border: Style,
    pub hint: Style,
}

impl Default for ToolprepTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolprepTheme {
    /// Colored theme for terminals.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Theme without any styling, for CI logs and `--no-color`.
    pub fn plain() -> Self {
        let none = Style::new;
        Self {
            success: none(),
            warning: none(),
            error: none(),
            dim: none(),
            highlight: none(),
            header: none(),
            command: none(),
            border: none(),
            hint: none(),
        }
    }

    /// `✓ msg`
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Section banner printed before each phase of a run.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▸"),
            self.highlight.apply_to(title)
        )
    }
}

/// Whether stdout should receive ANSI styling.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term() && console::colors_enabled()
}
