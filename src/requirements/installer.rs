//! Plan execution.
//!
//! Runs a plan's steps strictly in order and stops at the first failure.
//! Nothing is rolled back: package managers are idempotent for packages
//! that are already installed, so rerunning the bootstrap is the recovery
//! path.

use super::plan::{InstallPlan, PlanSelection, Step};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Whether every step succeeded.
    pub ok: bool,
    /// The step that failed, if any.
    pub failed_step: Option<Step>,
    /// Failing step's stderr, remediation for unsupported plans, or a
    /// completion note.
    pub detail: String,
    /// Steps that ran, including a failing one.
    pub steps_run: usize,
}

impl InstallOutcome {
    fn unsupported(remediation: &str) -> Self {
        Self {
            ok: false,
            failed_step: None,
            detail: remediation.to_string(),
            steps_run: 0,
        }
    }
}

/// Executes install plans through a command runner.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    /// Create an installer.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Execute a selected plan. Unsupported selections run nothing.
    pub fn install(&self, selection: &PlanSelection, ui: &mut dyn UserInterface) -> InstallOutcome {
        match selection {
            PlanSelection::Plan(plan) => self.install_plan(plan, ui),
            PlanSelection::Unsupported { remediation } => {
                tracing::info!("No install plan: {}", remediation);
                InstallOutcome::unsupported(remediation)
            }
        }
    }

    /// Execute a plan's steps in order, halting at the first failure.
    pub fn install_plan(&self, plan: &InstallPlan, ui: &mut dyn UserInterface) -> InstallOutcome {
        let total = plan.len();

        for (index, step) in plan.steps.iter().enumerate() {
            ui.show_progress(index + 1, total);
            let mut spinner = ui.start_spinner(&format!("{} ({})", step.description, step));
            tracing::info!("Running {} step {}/{}: {}", plan.manager, index + 1, total, step);

            let result = self.runner.run(&step.command);

            if !result.success {
                spinner.finish_error(&format!("{} failed", step.description));
                let detail = if result.stderr.trim().is_empty() {
                    match result.exit_code {
                        Some(code) => format!("exited with code {}", code),
                        None => "terminated without an exit code".to_string(),
                    }
                } else {
                    result.stderr.clone()
                };
                ui.show_error_block(&step.to_string(), &detail, None);
                tracing::info!("Step failed: {}: {}", step, detail.trim());

                return InstallOutcome {
                    ok: false,
                    failed_step: Some(step.clone()),
                    detail,
                    steps_run: index + 1,
                };
            }

            spinner.finish_success(&step.description);
        }

        InstallOutcome {
            ok: true,
            failed_step: None,
            detail: format!("{} step(s) completed with {}", total, plan.manager),
            steps_run: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::PackageManager;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    fn plan(steps: &[&[&str]]) -> InstallPlan {
        InstallPlan {
            manager: PackageManager::Apt,
            steps: steps
                .iter()
                .map(|cmd| Step::new(cmd, &format!("run {}", cmd[0])))
                .collect(),
        }
    }

    #[test]
    fn stops_at_first_failing_step() {
        let runner = MockRunner::new();
        runner.succeed("step-a", "");
        runner.fail("step-b", "E: Unable to locate package");
        runner.succeed("step-c", "");
        let mut ui = MockUI::new();

        let outcome = Installer::new(&runner)
            .install_plan(&plan(&[&["step-a"], &["step-b"], &["step-c"]]), &mut ui);

        assert!(!outcome.ok);
        assert_eq!(outcome.failed_step.unwrap().to_string(), "step-b");
        assert_eq!(outcome.detail, "E: Unable to locate package");
        assert_eq!(outcome.steps_run, 2);
        assert_eq!(runner.times_called("step-c"), 0);
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn failure_shows_command_and_output() {
        let runner = MockRunner::new();
        runner.fail("sudo apt-get update", "permission denied");
        let mut ui = MockUI::new();

        Installer::new(&runner).install_plan(&plan(&[&["sudo", "apt-get", "update"]]), &mut ui);

        let blocks = ui.error_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].0, "sudo apt-get update");
        assert_eq!(blocks[0].1, "permission denied");
    }

    #[test]
    fn failure_without_stderr_reports_exit_code() {
        let runner = MockRunner::new();
        runner.respond(
            "quiet-fail",
            crate::shell::CommandResult::failure(
                Some(100),
                String::new(),
                String::new(),
                std::time::Duration::ZERO,
            ),
        );
        let mut ui = MockUI::new();

        let outcome = Installer::new(&runner).install_plan(&plan(&[&["quiet-fail"]]), &mut ui);

        assert_eq!(outcome.detail, "exited with code 100");
    }

    #[test]
    fn all_steps_succeeding_is_ok() {
        let runner = MockRunner::all_succeed();
        let mut ui = MockUI::new();

        let outcome = Installer::new(&runner).install_plan(&plan(&[&["one"], &["two"]]), &mut ui);

        assert!(outcome.ok);
        assert!(outcome.failed_step.is_none());
        assert_eq!(outcome.steps_run, 2);
        assert_eq!(runner.call_strings(), vec!["one", "two"]);
        assert_eq!(ui.progress(), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn unsupported_selection_runs_nothing() {
        let runner = MockRunner::all_succeed();
        let mut ui = MockUI::new();
        let selection = PlanSelection::Unsupported {
            remediation: "Unsupported system: plan9".to_string(),
        };

        let outcome = Installer::new(&runner).install(&selection, &mut ui);

        assert!(!outcome.ok);
        assert!(outcome.failed_step.is_none());
        assert_eq!(outcome.detail, "Unsupported system: plan9");
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn missing_executable_is_a_step_failure() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let steps = plan(&[&["brew", "install", "llvm"]]);
        let outcome = Installer::new(&runner).install_plan(&steps, &mut ui);

        assert!(!outcome.ok);
        assert_eq!(outcome.detail, "Command not found: brew");
    }
}
