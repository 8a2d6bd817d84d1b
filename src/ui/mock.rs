//! Recording UI for tests.
//!
//! `MockUI` keeps every call as a [`UiEvent`] in order, so tests can assert
//! both on what was shown and on the sequence it was shown in.
//!
//! # Example
//!
//! ```
//! use toolprep::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! ui.show_header("Checking tools");
//! ui.success("cppcheck 2.13");
//!
//! assert!(ui.has_success("cppcheck"));
//! assert_eq!(ui.headers(), vec!["Checking tools"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::theme::ToolprepTheme;
use super::{hints, outcome_headline, summary_lines, SpinnerHandle, UserInterface};
use crate::runner::RunSummary;

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Hint(String),
    Progress(usize, usize),
    SpinnerStarted(String),
    SpinnerFinished(SpinnerStatus, String),
    ErrorBlock {
        command: String,
        output: String,
        hint: Option<String>,
    },
    /// The plain-text summary the real UIs print: box, headline, and the
    /// remediation hint on failure.
    Summary(Vec<String>),
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// `UserInterface` that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    events: EventLog,
    summaries: Vec<RunSummary>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event so far, oldest first.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    fn texts(&self, pick: impl Fn(&UiEvent) -> Option<&String>) -> Vec<String> {
        self.events.borrow().iter().filter_map(|e| pick(e).cloned()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Message(s) => Some(s),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Success(s) => Some(s),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Warning(s) => Some(s),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Error(s) => Some(s),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Header(s) => Some(s),
            _ => None,
        })
    }

    /// Hints, including those attached to error blocks.
    pub fn hints(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Hint(s) => Some(s),
            UiEvent::ErrorBlock { hint, .. } => hint.as_ref(),
            _ => None,
        })
    }

    /// Spinner start messages.
    pub fn spinners(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::SpinnerStarted(s) => Some(s),
            _ => None,
        })
    }

    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::SpinnerFinished(status, msg) => Some((*status, msg.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::Progress(current, total) => Some((*current, *total)),
                _ => None,
            })
            .collect()
    }

    /// Error blocks as (command, output, hint).
    pub fn error_blocks(&self) -> Vec<(String, String, Option<String>)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::ErrorBlock {
                    command,
                    output,
                    hint,
                } => Some((command.clone(), output.clone(), hint.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    /// The last rendered summary, one line per entry.
    pub fn summary_text(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            UiEvent::Summary(lines) => Some(lines.join("\n")),
            _ => None,
        })
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints().iter().any(|m| m.contains(msg))
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            log: Rc::clone(&self.events),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.record(UiEvent::Progress(current, total));
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(UiEvent::Hint(hint.to_string()));
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.record(UiEvent::ErrorBlock {
            command: command.to_string(),
            output: output.to_string(),
            hint: hint.map(str::to_string),
        });
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
        let mut lines = summary_lines(summary, &ToolprepTheme::plain());
        lines.push(outcome_headline(summary));
        if summary.fatal_reason.is_some() {
            lines.push(hints::after_failed_run(&summary.tools_failed()));
        }
        self.record(UiEvent::Summary(lines));
    }
}

/// Spinner handed out by [`MockUI`]; writes its outcome into the UI's log.
#[derive(Debug)]
pub struct MockSpinner {
    log: EventLog,
}

/// How a mock spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

impl MockSpinner {
    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.log
            .borrow_mut()
            .push(UiEvent::SpinnerFinished(status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Skipped, msg);
    }
}
