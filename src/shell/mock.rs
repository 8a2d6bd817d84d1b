//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are looked up by the command's display string; every call is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use toolprep::shell::{CommandLine, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.succeed("clang-format --version", "clang-format version 17.0.6\n");
//!
//! let result = runner.run(&CommandLine::argv(["clang-format", "--version"]));
//! assert!(result.success);
//! assert_eq!(runner.call_count(), 1);
//!
//! // Anything unscripted behaves like a missing executable.
//! let result = runner.run(&CommandLine::argv(["cppcheck", "--version"]));
//! assert!(!result.success);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use super::command::{CommandLine, CommandResult, CommandRunner};

/// Mock runner for testing.
///
/// Supports single responses (via [`respond`](Self::respond)) and queued
/// responses (via [`queue`](Self::queue)) for commands called more than once,
/// such as a probe that fails before an install and passes after it.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, CommandResult>>,
    queues: RefCell<HashMap<String, VecDeque<CommandResult>>>,
    /// Fallback for unscripted commands. `None` means "command not found".
    default_response: RefCell<Option<CommandResult>>,
    calls: RefCell<Vec<CommandLine>>,
}

impl MockRunner {
    /// Create a runner where every command is "not found".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner where every unscripted command succeeds silently.
    pub fn all_succeed() -> Self {
        let runner = Self::default();
        runner.set_default(ok(""));
        runner
    }

    /// Set the result for a command.
    pub fn respond(&self, command: &str, result: CommandResult) {
        self.responses
            .borrow_mut()
            .insert(command.to_string(), result);
    }

    /// Script a successful command with the given stdout.
    pub fn succeed(&self, command: &str, stdout: &str) {
        self.respond(command, ok(stdout));
    }

    /// Script a failing command (exit 1) with the given stderr.
    pub fn fail(&self, command: &str, stderr: &str) {
        self.respond(command, failed(stderr));
    }

    /// Queue results for a command, returned in order before falling back
    /// to [`respond`](Self::respond) or the default.
    pub fn queue(&self, command: &str, results: Vec<CommandResult>) {
        self.queues
            .borrow_mut()
            .insert(command.to_string(), results.into());
    }

    /// Set the result for any command without a scripted response.
    pub fn set_default(&self, result: CommandResult) {
        *self.default_response.borrow_mut() = Some(result);
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().clone()
    }

    /// All commands run so far, as display strings.
    pub fn call_strings(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Number of commands run so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether a command with this display string was run.
    pub fn was_called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.to_string() == command)
    }

    /// How many times a command with this display string was run.
    pub fn times_called(&self, command: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.to_string() == command)
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandLine) -> CommandResult {
        self.calls.borrow_mut().push(command.clone());
        let key = command.to_string();

        if let Some(queue) = self.queues.borrow_mut().get_mut(&key) {
            if let Some(result) = queue.pop_front() {
                return result;
            }
        }

        if let Some(result) = self.responses.borrow().get(&key) {
            return result.clone();
        }

        match self.default_response.borrow().as_ref() {
            Some(result) => result.clone(),
            None => CommandResult::not_found(command.program()),
        }
    }
}

/// A successful result with the given stdout.
pub fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
}

/// A failed result (exit 1) with the given stderr.
pub fn failed(stderr: &str) -> CommandResult {
    CommandResult::failure(Some(1), String::new(), stderr.to_string(), Duration::ZERO)
}
