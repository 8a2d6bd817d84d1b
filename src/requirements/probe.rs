//! Tool availability probing.
//!
//! A probe runs a tool's version command and reports whether it succeeded.
//! Probes are read-only apart from spawning the tool itself, so they are
//! rerun from scratch on every invocation.
//!
//! # Example
//!
//! ```
//! use toolprep::requirements::probe::probe;
//! use toolprep::shell::{CommandLine, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.succeed("cppcheck --version", "Cppcheck 2.13\n");
//!
//! let outcome = probe(&runner, "cppcheck", &CommandLine::argv(["cppcheck", "--version"]));
//! assert!(outcome.available);
//! assert_eq!(outcome.detail, "Cppcheck 2.13");
//! ```

use super::registry::{ToolRegistry, ToolSpec};
use super::status::{ProbeReport, ProbeResult};
use crate::shell::{CommandLine, CommandRunner};

/// Outcome of a single probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Whether the command succeeded.
    pub available: bool,
    /// Trimmed stdout on success, trimmed stderr otherwise.
    pub detail: String,
}

/// Run a version command and report availability.
pub fn probe(
    runner: &dyn CommandRunner,
    tool_name: &str,
    version_command: &CommandLine,
) -> ProbeOutcome {
    let result = runner.run(version_command);
    let detail = if result.success {
        result.stdout.trim().to_string()
    } else {
        result.stderr.trim().to_string()
    };

    tracing::debug!(
        "Probe {}: available={} ({})",
        tool_name,
        result.success,
        detail
    );

    ProbeOutcome {
        available: result.success,
        detail,
    }
}

/// Probe one tool definition.
pub fn probe_tool(runner: &dyn CommandRunner, tool: &ToolSpec) -> ProbeResult {
    let outcome = probe(runner, &tool.name, &tool.probe_command_line());
    ProbeResult {
        tool: tool.clone(),
        available: outcome.available,
        detail: outcome.detail,
    }
}

/// Probe every tool in the registry, in order.
pub fn probe_all(runner: &dyn CommandRunner, registry: &ToolRegistry) -> ProbeReport {
    ProbeReport::new(
        registry
            .tools()
            .iter()
            .map(|tool| probe_tool(runner, tool))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::mock::{failed, ok};
    use crate::shell::MockRunner;

    #[test]
    fn succeeding_stub_reports_stdout_for_every_tool() {
        let registry = ToolRegistry::new();
        for tool in registry.tools() {
            let runner = MockRunner::new();
            let stdout = format!("  {} 1.2.3\n", tool.name);
            runner.respond(&tool.probe_command_line().to_string(), ok(&stdout));

            let result = probe_tool(&runner, tool);

            assert!(result.available, "{} should be available", tool.name);
            assert_eq!(result.detail, stdout.trim());
        }
    }

    #[test]
    fn failing_stub_reports_stderr_for_every_tool() {
        let registry = ToolRegistry::new();
        for tool in registry.tools() {
            let runner = MockRunner::new();
            runner.respond(
                &tool.probe_command_line().to_string(),
                failed("\nNo module named thing\n"),
            );

            let result = probe_tool(&runner, tool);

            assert!(!result.available, "{} should be missing", tool.name);
            assert_eq!(result.detail, "No module named thing");
        }
    }

    #[test]
    fn missing_executable_detail_says_not_found() {
        let runner = MockRunner::new();
        let outcome = probe(
            &runner,
            "clang-tidy",
            &CommandLine::argv(["clang-tidy", "--version"]),
        );
        assert!(!outcome.available);
        assert_eq!(outcome.detail, "Command not found: clang-tidy");
    }

    #[test]
    fn probe_all_runs_each_tool_once_in_order() {
        let registry = ToolRegistry::new();
        let runner = MockRunner::all_succeed();

        let report = probe_all(&runner, &registry);

        assert_eq!(report.len(), registry.len());
        assert_eq!(runner.call_count(), registry.len());
        let expected: Vec<String> = registry
            .tools()
            .iter()
            .map(|t| t.probe_command.join(" "))
            .collect();
        assert_eq!(runner.call_strings(), expected);
    }
}
