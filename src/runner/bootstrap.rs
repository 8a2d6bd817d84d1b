//! The bootstrap state machine.
//!
//! ```text
//! START -> PROBE_ALL -> SELECT_PLANS -> INSTALL_NATIVE -> INSTALL_INTERPRETED
//!                 \                                              |
//!                  `-> (nothing required missing) -> MATERIALIZE_CONFIG
//!                                                       -> INSTALL_HOOKS -> DONE
//! ```
//!
//! Each transition is a public method that performs one state's work and
//! returns the next state, so tests can drive the machine a step at a time.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::artifacts::{default_artifacts, materialize, GeneratedArtifact};
use crate::config::Settings;
use crate::detection::EnvironmentInspector;
use crate::requirements::{
    probe_tool, select_plans, InstallOutcome, Installer, PlanOptions, PlanSelection, ProbeReport,
    ProbeResult, SelectedPlans, ToolCategory, ToolRegistry,
};
use crate::shell::{CommandLine, CommandRunner};
use crate::ui::{hints, UserInterface};

use super::summary::{RunSummary, ToolReport, ToolStatus};

/// States of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has happened yet.
    Start,
    /// Probe every tool.
    ProbeAll,
    /// Choose install plans for the host.
    SelectPlans,
    /// Install compiled-language tools.
    InstallNative,
    /// Install interpreted-language tools.
    InstallInterpreted,
    /// Write generated files.
    MaterializeConfig,
    /// Register the hook manager with git.
    InstallHooks,
    /// Terminal.
    Done,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Start => "START",
            RunState::ProbeAll => "PROBE_ALL",
            RunState::SelectPlans => "SELECT_PLANS",
            RunState::InstallNative => "INSTALL_NATIVE",
            RunState::InstallInterpreted => "INSTALL_INTERPRETED",
            RunState::MaterializeConfig => "MATERIALIZE_CONFIG",
            RunState::InstallHooks => "INSTALL_HOOKS",
            RunState::Done => "DONE",
        };
        write!(f, "{}", name)
    }
}

/// What happened when a branch was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchResult {
    /// Installer outcome.
    pub outcome: InstallOutcome,
    /// Tools that still fail to probe after a successful install.
    pub unverified: Vec<String>,
}

/// Mutable state carried between transitions.
#[derive(Debug)]
pub struct RunContext {
    /// Current state.
    pub state: RunState,
    /// Probe results from `PROBE_ALL`.
    pub report: ProbeReport,
    /// Plans from `SELECT_PLANS`, if that state ran.
    pub plans: Option<SelectedPlans>,
    /// Native branch result, if the branch was entered.
    pub native: Option<BranchResult>,
    /// Interpreted branch result, if the branch was entered.
    pub interpreted: Option<BranchResult>,
    /// Accumulated summary.
    pub summary: RunSummary,
    started: Instant,
}

impl RunContext {
    /// A fresh context in `START`.
    pub fn new() -> Self {
        Self {
            state: RunState::Start,
            report: ProbeReport::default(),
            plans: None,
            native: None,
            interpreted: None,
            summary: RunSummary::default(),
            started: Instant::now(),
        }
    }

    /// Result of a branch, if it was entered.
    pub fn branch(&self, category: ToolCategory) -> Option<&BranchResult> {
        match category {
            ToolCategory::Native => self.native.as_ref(),
            ToolCategory::Interpreted => self.interpreted.as_ref(),
        }
    }

    fn set_branch(&mut self, category: ToolCategory, result: BranchResult) {
        match category {
            ToolCategory::Native => self.native = Some(result),
            ToolCategory::Interpreted => self.interpreted = Some(result),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates a full bootstrap run.
pub struct Bootstrap<'a> {
    runner: &'a dyn CommandRunner,
    inspector: &'a dyn EnvironmentInspector,
    registry: ToolRegistry,
    settings: Settings,
    artifacts: Vec<GeneratedArtifact>,
    project_root: PathBuf,
}

impl<'a> Bootstrap<'a> {
    /// Create a bootstrap with the built-in tools, default settings and the
    /// standard artifact set.
    pub fn new(
        runner: &'a dyn CommandRunner,
        inspector: &'a dyn EnvironmentInspector,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            inspector,
            registry: ToolRegistry::new(),
            settings: Settings::default(),
            artifacts: default_artifacts(),
            project_root: project_root.into(),
        }
    }

    /// Use explicit settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Check a different tool set.
    pub fn with_registry(mut self, registry: ToolRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Write a different artifact set.
    pub fn with_artifacts(mut self, artifacts: Vec<GeneratedArtifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Directory artifacts are written under.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run every state to `DONE` and show the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunSummary {
        let mut ctx = RunContext::new();
        while ctx.state != RunState::Done {
            let next = self.step(&mut ctx, ui);
            tracing::debug!("{} -> {}", ctx.state, next);
            ctx.state = next;
        }
        self.finish(&mut ctx, ui);
        ctx.summary
    }

    /// Execute the current state and return the next one.
    pub fn step(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) -> RunState {
        match ctx.state {
            RunState::Start => {
                tracing::info!("Bootstrapping {}", self.project_root.display());
                RunState::ProbeAll
            }
            RunState::ProbeAll => self.probe_all(ctx, ui),
            RunState::SelectPlans => self.select_plans(ctx, ui),
            RunState::InstallNative => self.install_native(ctx, ui),
            RunState::InstallInterpreted => self.install_interpreted(ctx, ui),
            RunState::MaterializeConfig => self.materialize_config(ctx, ui),
            RunState::InstallHooks => self.install_hooks(ctx, ui),
            RunState::Done => RunState::Done,
        }
    }

    /// `PROBE_ALL`: probe each tool, reporting as results arrive.
    pub fn probe_all(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) -> RunState {
        ui.show_header("Checking tools");

        let mut results = Vec::with_capacity(self.registry.len());
        for tool in self.registry.tools() {
            let result = probe_tool(self.runner, tool);
            report_probe(&result, ui);
            results.push(result);
        }
        ctx.report = ProbeReport::new(results);

        let blocking: Vec<&str> = ctx
            .report
            .blocking()
            .map(|r| r.tool.name.as_str())
            .collect();
        tracing::info!("Probed {} tools, {} required missing", ctx.report.len(), blocking.len());

        if blocking.is_empty() {
            ui.success("All required tools are available");
            RunState::MaterializeConfig
        } else {
            ui.message(&format!("Missing required tools: {}", blocking.join(", ")));
            RunState::SelectPlans
        }
    }

    /// `SELECT_PLANS`: choose a plan for each branch.
    pub fn select_plans(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) -> RunState {
        let options = PlanOptions {
            use_sudo: self.settings.use_sudo,
        };
        let plans = select_plans(self.inspector, options);

        for (category, selection) in [
            (ToolCategory::Native, &plans.native),
            (ToolCategory::Interpreted, &plans.interpreted),
        ] {
            if !ctx.report.needs_install(category) {
                continue;
            }
            match selection {
                PlanSelection::Plan(plan) => {
                    ui.message(&format!("Using {} for {} tools", plan.manager, category));
                    tracing::info!(
                        "{} plan: {} step(s) via {}",
                        category,
                        plan.len(),
                        plan.manager
                    );
                }
                PlanSelection::Unsupported { remediation } => {
                    tracing::info!("No {} plan: {}", category, remediation);
                }
            }
        }

        ctx.plans = Some(plans);
        RunState::InstallNative
    }

    /// `INSTALL_NATIVE`: run the native plan if a required native tool is missing.
    pub fn install_native(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) -> RunState {
        self.install_branch(ctx, ui, ToolCategory::Native);
        RunState::InstallInterpreted
    }

    /// `INSTALL_INTERPRETED`: run the interpreted plan if a required
    /// interpreted tool is missing.
    pub fn install_interpreted(
        &self,
        ctx: &mut RunContext,
        ui: &mut dyn UserInterface,
    ) -> RunState {
        self.install_branch(ctx, ui, ToolCategory::Interpreted);
        RunState::MaterializeConfig
    }

    /// `MATERIALIZE_CONFIG`: write each artifact that does not exist yet.
    pub fn materialize_config(
        &self,
        ctx: &mut RunContext,
        ui: &mut dyn UserInterface,
    ) -> RunState {
        ui.show_header("Writing configuration");

        for artifact in &self.artifacts {
            match materialize(artifact, &self.project_root) {
                Ok(true) => {
                    ui.success(&format!("Created {}", artifact.path.display()));
                    ctx.summary.artifacts_created.push(artifact.path.clone());
                }
                Ok(false) => {
                    let path = artifact.path.display();
                    ui.message(&format!("{} already exists, leaving it alone", path));
                    ctx.summary.artifacts_existing.push(artifact.path.clone());
                }
                Err(e) => {
                    ui.error(&e.to_string());
                    ctx.summary.fail(e.to_string());
                }
            }
        }

        RunState::InstallHooks
    }

    /// `INSTALL_HOOKS`: ask the hook manager to install its git hook.
    /// Failure is a warning, never fatal.
    pub fn install_hooks(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) -> RunState {
        if !self.settings.install_hooks {
            tracing::info!("Hook installation disabled by configuration");
            let mut spinner = ui.start_spinner("Installing git hooks");
            spinner.finish_skipped("Hook installation disabled in .toolprep.yml");
            return RunState::Done;
        }

        ui.show_header("Installing git hooks");
        let command = CommandLine::argv(["pre-commit", "install"]);
        let mut spinner = ui.start_spinner(&format!("Running {}", command));
        let result = self.runner.run(&command);

        if result.success {
            spinner.finish_success("Pre-commit hooks installed");
            ctx.summary.hooks_installed = true;
        } else {
            spinner.finish_error("Pre-commit hooks not installed");
            let warning = format!(
                "Failed to install pre-commit hooks: {}",
                result.stderr.trim()
            );
            tracing::info!("{}", warning);
            ui.warning(&warning);
            ui.show_hint(hints::after_hook_failure());
            ctx.summary.warnings.push(warning);
        }

        RunState::Done
    }

    /// `DONE`: assign final tool statuses and show the summary.
    pub fn finish(&self, ctx: &mut RunContext, ui: &mut dyn UserInterface) {
        let tools: Vec<ToolReport> = ctx
            .report
            .results()
            .iter()
            .map(|result| ToolReport {
                name: result.tool.name.clone(),
                status: final_status(ctx, result),
                required: result.tool.required,
                detail: result.detail.clone(),
            })
            .collect();
        ctx.summary.tools = tools;
        ctx.summary.total_duration = ctx.started.elapsed();

        if !ctx.summary.tools_unverified().is_empty() {
            ui.show_hint(hints::after_unverified_install());
        }

        tracing::info!(
            "Done: success={} installed={} failed={} created={}",
            ctx.summary.success(),
            ctx.summary.tools_installed().len(),
            ctx.summary.tools_failed().len(),
            ctx.summary.artifacts_created.len()
        );
        ui.show_summary(&ctx.summary);
    }

    fn install_branch(
        &self,
        ctx: &mut RunContext,
        ui: &mut dyn UserInterface,
        category: ToolCategory,
    ) {
        if !ctx.report.needs_install(category) {
            tracing::debug!("No required {} tools missing, skipping branch", category);
            return;
        }

        let selection = match (&ctx.plans, category) {
            (Some(plans), ToolCategory::Native) => plans.native.clone(),
            (Some(plans), ToolCategory::Interpreted) => plans.interpreted.clone(),
            (None, _) => {
                tracing::warn!("No plans selected before installing {} tools", category);
                return;
            }
        };

        let missing = ctx.report.missing_in(category);
        match selection.plan() {
            Some(plan) => ui.show_header(&format!(
                "Installing {} tools with {}",
                category, plan.manager
            )),
            None => ui.show_header(&format!("Installing {} tools", category)),
        }

        let outcome = Installer::new(self.runner).install(&selection, ui);

        if !outcome.ok {
            let reason = match &outcome.failed_step {
                Some(step) => format!("{} tools: `{}` failed", category, step),
                None => {
                    ui.error(&outcome.detail);
                    format!(
                        "{} tools: {}",
                        category,
                        outcome.detail.lines().next().unwrap_or_default()
                    )
                }
            };
            ctx.summary.fail(reason);
            ctx.set_branch(
                category,
                BranchResult {
                    outcome,
                    unverified: Vec::new(),
                },
            );
            return;
        }

        let unverified = self.verify(&missing, ui);
        for name in &unverified {
            ctx.summary
                .warnings
                .push(format!("{} was installed but is still not available", name));
        }
        ctx.set_branch(category, BranchResult { outcome, unverified });
    }

    /// Re-probe freshly installed tools; returns the names still missing.
    fn verify(&self, names: &[String], ui: &mut dyn UserInterface) -> Vec<String> {
        let mut unverified = Vec::new();
        for name in names {
            let Some(tool) = self.registry.get(name) else {
                continue;
            };
            let result = probe_tool(self.runner, tool);
            if result.available {
                ui.success(&format!("Verified {}", result.summary_line()));
            } else {
                tracing::info!("{} still unavailable after install: {}", name, result.detail);
                ui.warning(&format!("{} installed but not found yet", name));
                unverified.push(name.clone());
            }
        }
        unverified
    }
}

fn report_probe(result: &ProbeResult, ui: &mut dyn UserInterface) {
    if result.available {
        ui.success(&result.summary_line());
    } else {
        ui.warning(&result.summary_line());
    }
}

fn final_status(ctx: &RunContext, result: &ProbeResult) -> ToolStatus {
    if result.available {
        return ToolStatus::Present;
    }
    match ctx.branch(result.tool.category) {
        None => ToolStatus::Missing,
        Some(branch) if !branch.outcome.ok && result.tool.required => ToolStatus::Failed,
        Some(branch) if !branch.outcome.ok => ToolStatus::Missing,
        Some(branch) if branch.unverified.contains(&result.tool.name) => ToolStatus::Unverified,
        Some(_) => ToolStatus::Installed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::StaticInspector;
    use crate::shell::mock::{failed, ok};
    use crate::shell::MockRunner;
    use crate::ui::{MockUI, SpinnerStatus};
    use tempfile::TempDir;

    const NATIVE_PROBES: [&str; 3] = [
        "clang-format --version",
        "clang-tidy --version",
        "cppcheck --version",
    ];
    const INTERPRETED_PROBES: [&str; 5] = [
        "python3 -m black --version",
        "python3 -m isort --version",
        "python3 -m flake8 --version",
        "python3 -m mypy --version",
        "pre-commit --version",
    ];

    fn runner_with(available: &[&str]) -> MockRunner {
        let runner = MockRunner::new();
        for probe in NATIVE_PROBES.iter().chain(INTERPRETED_PROBES.iter()) {
            if available.contains(probe) {
                runner.respond(probe, ok("1.0.0\n"));
            }
        }
        runner
    }

    #[test]
    fn state_names_match_diagram() {
        assert_eq!(RunState::ProbeAll.to_string(), "PROBE_ALL");
        assert_eq!(RunState::InstallInterpreted.to_string(), "INSTALL_INTERPRETED");
    }

    #[test]
    fn probe_all_skips_installs_when_nothing_required_is_missing() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::all_succeed();
        let host = StaticInspector::new("linux");
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ctx = RunContext::new();
        let mut ui = MockUI::new();

        let next = bootstrap.probe_all(&mut ctx, &mut ui);

        assert_eq!(next, RunState::MaterializeConfig);
        assert_eq!(ctx.report.len(), 8);
        assert!(ui.has_success("All required tools are available"));
    }

    #[test]
    fn optional_tools_alone_do_not_trigger_installs() {
        let temp = TempDir::new().unwrap();
        let mut available: Vec<&str> = NATIVE_PROBES.to_vec();
        available.extend(&INTERPRETED_PROBES[..3]);
        let runner = runner_with(&available);
        let host = StaticInspector::new("linux").with_executables(["apt-get", "pip3"]);
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ctx = RunContext::new();
        let mut ui = MockUI::new();

        assert_eq!(bootstrap.probe_all(&mut ctx, &mut ui), RunState::MaterializeConfig);
        assert!(ui.has_warning("mypy: not found (optional)"));
    }

    #[test]
    fn probe_all_moves_to_plan_selection_when_required_tool_missing() {
        let temp = TempDir::new().unwrap();
        let runner = runner_with(&INTERPRETED_PROBES);
        let host = StaticInspector::new("linux");
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ctx = RunContext::new();
        let mut ui = MockUI::new();

        assert_eq!(bootstrap.probe_all(&mut ctx, &mut ui), RunState::SelectPlans);
        assert!(ui.has_message("clang-format, clang-tidy, cppcheck"));
    }

    #[test]
    fn native_install_only_runs_native_plan() {
        let temp = TempDir::new().unwrap();
        let runner = runner_with(&INTERPRETED_PROBES);
        runner.succeed("apt-get update", "");
        runner.succeed("apt-get install -y clang-format clang-tidy cppcheck", "");
        let host = StaticInspector::new("linux")
            .with_executables(["apt-get", "pip3"])
            .elevated();
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ctx = RunContext::new();
        let mut ui = MockUI::new();

        bootstrap.probe_all(&mut ctx, &mut ui);
        bootstrap.select_plans(&mut ctx, &mut ui);
        assert_eq!(
            bootstrap.install_native(&mut ctx, &mut ui),
            RunState::InstallInterpreted
        );
        bootstrap.install_interpreted(&mut ctx, &mut ui);

        assert!(runner.was_called("apt-get update"));
        assert!(!runner.call_strings().iter().any(|c| c.starts_with("pip3")));
        assert!(ctx.native.as_ref().unwrap().outcome.ok);
        assert!(ctx.interpreted.is_none());
        // Probes still fail in this mock, so nothing verifies
        assert_eq!(ctx.native.as_ref().unwrap().unverified.len(), 3);
        assert!(ctx.summary.success());
    }

    #[test]
    fn reprobe_after_install_marks_tools_installed() {
        let temp = TempDir::new().unwrap();
        let runner = runner_with(&NATIVE_PROBES);
        for probe in &INTERPRETED_PROBES[..3] {
            runner.queue(probe, vec![failed("No module"), ok("2.0.0")]);
        }
        for pkg in ["black", "isort", "flake8", "mypy", "pre-commit"] {
            runner.succeed(&format!("pip3 install {}", pkg), "");
        }
        let host = StaticInspector::new("darwin").with_executables(["brew", "pip3"]);
        let bootstrap = Bootstrap::new(&runner, &host, temp.path()).with_settings(Settings {
            install_hooks: false,
            ..Default::default()
        });
        let mut ctx = RunContext::new();
        let mut ui = MockUI::new();
        ctx.state = RunState::ProbeAll;

        while ctx.state != RunState::Done {
            ctx.state = bootstrap.step(&mut ctx, &mut ui);
        }
        bootstrap.finish(&mut ctx, &mut ui);

        let summary = &ctx.summary;
        assert!(summary.success());
        assert_eq!(summary.tools_installed(), vec!["black", "isort", "flake8"]);
        // mypy and pre-commit were never scripted to succeed
        assert_eq!(summary.tools_unverified(), vec!["mypy", "pre-commit"]);
        assert_eq!(runner.times_called("pip3 install black"), 1);
        assert!(!runner.was_called("brew install llvm"));
    }

    #[test]
    fn unsupported_native_plan_is_fatal_but_interpreted_branch_still_runs() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.set_default(failed("missing"));
        for pkg in ["black", "isort", "flake8", "mypy", "pre-commit"] {
            runner.succeed(&format!("pip install {}", pkg), "");
        }
        let host = StaticInspector::new("freebsd").with_executables(["pip"]);
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ui = MockUI::new();

        let summary = bootstrap.run(&mut ui);

        assert!(!summary.success());
        assert_eq!(summary.exit_code(), 1);
        assert!(summary
            .fatal_reason
            .as_deref()
            .unwrap()
            .contains("Unsupported system: freebsd"));
        assert!(runner.was_called("pip install black"));
        assert_eq!(
            summary.tools_failed(),
            vec!["clang-format", "clang-tidy", "cppcheck"]
        );
    }

    #[test]
    fn failed_branch_leaves_optional_tools_missing() {
        let temp = TempDir::new().unwrap();
        let runner = runner_with(&NATIVE_PROBES);
        runner.fail("pip3 install black", "Could not find a version");
        let host = StaticInspector::new("linux").with_executables(["pip3"]);
        let bootstrap = Bootstrap::new(&runner, &host, temp.path()).with_settings(Settings {
            install_hooks: false,
            ..Default::default()
        });
        let mut ui = MockUI::new();

        let summary = bootstrap.run(&mut ui);

        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.tools_failed(), vec!["black", "isort", "flake8"]);
        assert_eq!(
            summary.tools_with(ToolStatus::Missing),
            vec!["mypy", "pre-commit"]
        );
        assert!(!hints::after_failed_run(&summary.tools_failed()).contains("mypy"));
    }

    #[test]
    fn hook_failure_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::all_succeed();
        runner.fail("pre-commit install", "not a git repository");
        let host = StaticInspector::new("linux");
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ui = MockUI::new();

        let summary = bootstrap.run(&mut ui);

        assert!(summary.success());
        assert!(!summary.hooks_installed);
        assert_eq!(
            summary.warnings,
            vec!["Failed to install pre-commit hooks: not a git repository"]
        );
        assert!(ui.has_hint("pre-commit install"));
    }

    #[test]
    fn disabled_hooks_never_run_hook_manager() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::all_succeed();
        let host = StaticInspector::new("linux");
        let settings = Settings {
            install_hooks: false,
            ..Default::default()
        };
        let bootstrap = Bootstrap::new(&runner, &host, temp.path()).with_settings(settings);
        let mut ui = MockUI::new();

        let summary = bootstrap.run(&mut ui);

        assert!(summary.success());
        assert!(!runner.was_called("pre-commit install"));
        assert_eq!(
            ui.spinner_results(),
            vec![(
                SpinnerStatus::Skipped,
                "Hook installation disabled in .toolprep.yml".to_string()
            )]
        );
    }

    #[cfg(unix)]
    #[test]
    fn artifact_write_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        // A regular file where the scripts directory should go
        std::fs::write(temp.path().join("scripts"), "").unwrap();
        let runner = MockRunner::all_succeed();
        let host = StaticInspector::new("linux");
        let bootstrap = Bootstrap::new(&runner, &host, temp.path());
        let mut ui = MockUI::new();

        let summary = bootstrap.run(&mut ui);

        assert!(!summary.success());
        assert_eq!(
            summary.artifacts_created,
            vec![PathBuf::from(".pre-commit-config.yaml")]
        );
        assert!(summary
            .fatal_reason
            .as_deref()
            .unwrap()
            .contains("scripts/check-quality.sh"));
        assert!(ui.has_error("Failed to write"));
    }
}
