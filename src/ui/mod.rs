//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use toolprep::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Silent);
//! ui.show_header("Checking tools");
//! ui.success("clang-format 17.0.6");
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI, SpinnerStatus, UiEvent};
pub use non_interactive::NonInteractiveUI;
pub use output::{format_duration, OutputMode};
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ToolprepTheme};

use crate::runner::{RunSummary, ToolStatus};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show progress (e.g., "Step 3 of 7").
    fn show_progress(&mut self, current: usize, total: usize);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a failed command and its output in a bordered block.
    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>);

    /// Show the end-of-run summary.
    fn show_summary(&mut self, summary: &RunSummary);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// Closing line of a run: the success banner or the fatal reason.
pub fn outcome_headline(summary: &RunSummary) -> String {
    match &summary.fatal_reason {
        None => "Development tools setup complete!".to_string(),
        Some(reason) => format!("Setup failed: {}", reason),
    }
}

/// Render the summary box shared by the terminal and non-interactive UIs.
pub(crate) fn summary_lines(summary: &RunSummary, theme: &ToolprepTheme) -> Vec<String> {
    let b = &theme.border;
    let mut lines = vec![format!(
        "  {} {}",
        b.apply_to("┌─"),
        b.apply_to("Summary ──────────────────────────")
    )];

    for tool in &summary.tools {
        let kind = StatusKind::from(tool.status);
        let detail = match tool.status {
            ToolStatus::Present => tool.detail.lines().next().unwrap_or("").to_string(),
            ToolStatus::Installed => "installed".to_string(),
            ToolStatus::Unverified => "installed, not on PATH yet".to_string(),
            ToolStatus::Failed => "install failed".to_string(),
            ToolStatus::Missing => "not found (optional)".to_string(),
        };
        lines.push(format!(
            "  {} {} {:<14} {}",
            b.apply_to("│"),
            kind.styled(theme),
            tool.name,
            theme.dim.apply_to(detail)
        ));
    }

    lines.push(format!(
        "  {}",
        b.apply_to("├────────────────────────────────────")
    ));
    lines.push(format!(
        "  {} {} checked {} {} installed {} {} failed {} {} created {} {}",
        b.apply_to("│"),
        summary.tools_checked(),
        theme.dim.apply_to("·"),
        summary.tools_installed().len(),
        theme.dim.apply_to("·"),
        summary.tools_failed().len(),
        theme.dim.apply_to("·"),
        summary.artifacts_created.len(),
        theme.dim.apply_to("·"),
        format_duration(summary.total_duration),
    ));
    for path in &summary.artifacts_created {
        lines.push(format!(
            "  {}   {} {}",
            b.apply_to("│"),
            theme.success.apply_to("+"),
            path.display()
        ));
    }
    lines.push(format!(
        "  {}",
        b.apply_to("└────────────────────────────────────")
    ));
    lines
}
