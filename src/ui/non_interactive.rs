//! Non-interactive UI for CI/headless environments.

use super::hints;
use super::theme::ToolprepTheme;
use super::{
    outcome_headline, summary_lines, OutputMode, SpinnerHandle, StatusKind, UserInterface,
};
use crate::runner::RunSummary;

/// UI implementation for non-interactive mode.
///
/// Plain lines only: no spinners, no cursor movement, no color. Warnings
/// and errors go to stderr so they survive `> log` redirection of stdout.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: ToolprepTheme,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_ci(mode, crate::shell::is_ci())
    }

    /// Create with explicit CI flag (for testing).
    pub fn with_ci(mode: OutputMode, is_ci: bool) -> Self {
        Self {
            mode,
            theme: ToolprepTheme::plain(),
            is_ci,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("  {}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("  {}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("  {}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_progress() {
            println!("  {}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            is_ci: self.is_ci,
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_commands() {
            println!("[{}/{}]", current, total);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  Hint: {}", hint);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!();
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
        if let Some(h) = hint {
            eprintln!("    Hint: {}", h);
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if self.mode.shows_status() {
            println!();
            for line in summary_lines(summary, &self.theme) {
                println!("{}", line);
            }
            println!();
        }

        match &summary.fatal_reason {
            None => {
                if self.mode.shows_status() {
                    println!("  {} {}", StatusKind::Success.icon(), outcome_headline(summary));
                    println!("\n  Next steps:");
                    for (i, step) in hints::next_steps().iter().enumerate() {
                        println!("  {}. {}", i + 1, step);
                    }
                }
            }
            Some(_) => {
                eprintln!("  {} {}", StatusKind::Failed.icon(), outcome_headline(summary));
                if self.mode.shows_status() {
                    eprintln!("  {}", hints::after_failed_run(&summary.tools_failed()));
                }
            }
        }
    }
}

/// Spinner replacement that prints one line when the operation ends.
struct LineSpinner {
    mode: OutputMode,
    is_ci: bool,
}

impl LineSpinner {
    fn print(&self, kind: StatusKind, msg: &str) {
        // CI log viewers render the bracketed form more reliably than icons
        let marker = if self.is_ci {
            kind.bracketed()
        } else {
            kind.icon()
        };
        println!("  {} {}", marker, msg);
    }
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            self.print(StatusKind::Success, msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.print(StatusKind::Failed, msg);
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            self.print(StatusKind::Skipped, msg);
        }
    }
}
