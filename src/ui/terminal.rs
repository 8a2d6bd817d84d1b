//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::hints;
use super::{
    outcome_headline, should_use_colors, summary_lines, NonInteractiveUI, OutputMode,
    ProgressSpinner, SpinnerHandle, ToolprepTheme, UserInterface,
};
use crate::runner::RunSummary;

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: ToolprepTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ToolprepTheme::new()
        } else {
            ToolprepTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "  {}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "  {}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_commands() {
            writeln!(
                self.term,
                "  {}",
                self.theme.dim.apply_to(format!("[{}/{}]", current, total))
            )
            .ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        let b = &self.theme.border;
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("┌─"),
            b.apply_to("Command ──────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("│"),
            self.theme.command.apply_to(command)
        )
        .ok();

        if !output.is_empty() {
            writeln!(
                self.term,
                "    {} {}",
                b.apply_to("├─"),
                b.apply_to("Output ───────────────────────────")
            )
            .ok();
            for line in output.lines() {
                writeln!(self.term, "    {} {}", b.apply_to("│"), line).ok();
            }
        }

        writeln!(
            self.term,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();

        if let Some(h) = hint {
            writeln!(
                self.term,
                "    {} {}",
                self.theme.hint.apply_to("Hint:"),
                self.theme.hint.apply_to(h)
            )
            .ok();
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if !self.mode.shows_status() {
            if let Some(reason) = &summary.fatal_reason {
                writeln!(self.term, "{}", self.theme.format_error(reason)).ok();
            }
            return;
        }

        writeln!(self.term).ok();
        for line in summary_lines(summary, &self.theme) {
            writeln!(self.term, "{}", line).ok();
        }
        writeln!(self.term).ok();

        match &summary.fatal_reason {
            None => {
                writeln!(
                    self.term,
                    "  {}",
                    self.theme.format_success(&outcome_headline(summary))
                )
                .ok();
                writeln!(self.term, "\n  {}", self.theme.highlight.apply_to("Next steps:")).ok();
                for (i, step) in hints::next_steps().iter().enumerate() {
                    writeln!(self.term, "  {}. {}", i + 1, step).ok();
                }
            }
            Some(_) => {
                writeln!(
                    self.term,
                    "  {}",
                    self.theme.format_error(&outcome_headline(summary))
                )
                .ok();
                let hint = hints::after_failed_run(&summary.tools_failed());
                writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
            }
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
