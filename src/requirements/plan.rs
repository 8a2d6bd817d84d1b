//! Installation plan selection.
//!
//! Package names and manager invocations are not portable, so each
//! OS/manager combination has an explicit table entry. Anything without
//! an entry is [`PlanSelection::Unsupported`] rather than a guess.
//!
//! Selection is a pure function of the OS name and the set of managers
//! present; [`select_plans`] feeds it from an [`EnvironmentInspector`].

use std::collections::BTreeSet;
use std::fmt;

use crate::detection::{EnvironmentInspector, PackageManager};
use crate::shell::CommandLine;

/// Shell one-liner that installs Homebrew.
pub const HOMEBREW_INSTALL_HINT: &str = "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

/// Interpreted-ecosystem packages, installed one step each.
pub const PYTHON_PACKAGES: [&str; 5] = ["black", "isort", "flake8", "mypy", "pre-commit"];

/// A single command in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Command to run.
    pub command: CommandLine,
    /// What the command does, for progress output.
    pub description: String,
}

impl Step {
    /// Create a step from an argument vector.
    pub fn new(command: &[&str], description: &str) -> Self {
        Self {
            command: CommandLine::argv(command.iter().copied()),
            description: description.to_string(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)
    }
}

/// Ordered steps that install a set of tools through one manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Manager the plan drives.
    pub manager: PackageManager,
    /// Steps, executed in order.
    pub steps: Vec<Step>,
}

impl InstallPlan {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Result of plan selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSelection {
    /// A plan exists for this host.
    Plan(InstallPlan),
    /// No known combination matched.
    Unsupported {
        /// What to do about it.
        remediation: String,
    },
}

impl PlanSelection {
    /// The plan, if one was selected.
    pub fn plan(&self) -> Option<&InstallPlan> {
        match self {
            PlanSelection::Plan(plan) => Some(plan),
            PlanSelection::Unsupported { .. } => None,
        }
    }

    /// Whether selection failed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PlanSelection::Unsupported { .. })
    }

    fn unsupported(remediation: impl Into<String>) -> Self {
        PlanSelection::Unsupported {
            remediation: remediation.into(),
        }
    }
}

/// Knobs that change how plans are written, not which plan is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Prefix root-requiring commands with `sudo`.
    pub use_sudo: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { use_sudo: true }
    }
}

/// Both branch plans for a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPlans {
    /// Plan for compiled-language tooling.
    pub native: PlanSelection,
    /// Plan for interpreted-language tooling.
    pub interpreted: PlanSelection,
}

/// Select the native-tools plan with default options.
pub fn select_native_plan(os_name: &str, available_managers: &BTreeSet<String>) -> PlanSelection {
    select_native_plan_with(os_name, available_managers, PlanOptions::default())
}

/// Select the native-tools plan.
///
/// First match wins:
/// 1. `darwin` needs Homebrew.
/// 2. `linux` takes the first of apt-get, dnf, yum.
/// 3. Anything else is unsupported.
pub fn select_native_plan_with(
    os_name: &str,
    available_managers: &BTreeSet<String>,
    options: PlanOptions,
) -> PlanSelection {
    let has = |m: PackageManager| available_managers.contains(m.executable());

    match os_name {
        "darwin" => {
            if has(PackageManager::Homebrew) {
                PlanSelection::Plan(native_plan(PackageManager::Homebrew, options))
            } else {
                PlanSelection::unsupported(format!(
                    "Homebrew not found. Please install Homebrew first:\n  {}",
                    HOMEBREW_INSTALL_HINT
                ))
            }
        }
        "linux" => PackageManager::LINUX_PRIORITY
            .into_iter()
            .find(|m| has(*m))
            .map(|m| PlanSelection::Plan(native_plan(m, options)))
            .unwrap_or_else(|| {
                PlanSelection::unsupported(
                    "No supported package manager found (apt-get, dnf, yum)",
                )
            }),
        other => PlanSelection::unsupported(format!("Unsupported system: {}", other)),
    }
}

/// Select the interpreted-tools plan. Independent of OS.
pub fn select_interpreted_plan(available_managers: &BTreeSet<String>) -> PlanSelection {
    let Some(pip) = PackageManager::PYTHON_PRIORITY
        .into_iter()
        .find(|m| available_managers.contains(m.executable()))
    else {
        return PlanSelection::unsupported("pip not found. Please install Python pip first.");
    };

    let steps = PYTHON_PACKAGES
        .iter()
        .map(|&pkg| {
            Step::new(
                &[pip.executable(), "install", pkg],
                &format!("Install {}", pkg),
            )
        })
        .collect();

    PlanSelection::Plan(InstallPlan {
        manager: pip,
        steps,
    })
}

/// Select both plans for the host an inspector describes.
pub fn select_plans(inspector: &dyn EnvironmentInspector, options: PlanOptions) -> SelectedPlans {
    let os = inspector.os_name();
    let managers = inspector.available_managers();
    let options = PlanOptions {
        use_sudo: options.use_sudo && !inspector.is_elevated(),
    };

    tracing::debug!("Selecting plans for os={} managers={:?}", os, managers);

    SelectedPlans {
        native: select_native_plan_with(&os, &managers, options),
        interpreted: select_interpreted_plan(&managers),
    }
}

/// The per-manager package table.
fn native_plan(manager: PackageManager, options: PlanOptions) -> InstallPlan {
    let elevate = |args: &[&str]| -> Vec<String> {
        let mut command = Vec::with_capacity(args.len() + 1);
        if options.use_sudo && manager.needs_root() {
            command.push("sudo".to_string());
        }
        command.extend(args.iter().map(|s| s.to_string()));
        command
    };
    let step = |args: &[&str], description: &str| Step {
        command: CommandLine::Argv(elevate(args)),
        description: description.to_string(),
    };

    let steps = match manager {
        PackageManager::Homebrew => vec![
            step(&["brew", "install", "llvm"], "Install LLVM (clang-format, clang-tidy)"),
            step(&["brew", "install", "cppcheck"], "Install cppcheck"),
        ],
        PackageManager::Apt => vec![
            step(&["apt-get", "update"], "Refresh package index"),
            step(
                &["apt-get", "install", "-y", "clang-format", "clang-tidy", "cppcheck"],
                "Install clang-format, clang-tidy, cppcheck",
            ),
        ],
        PackageManager::Dnf => vec![step(
            &["dnf", "install", "-y", "clang-tools-extra", "cppcheck"],
            "Install clang-tools-extra, cppcheck",
        )],
        PackageManager::Yum => vec![step(
            &["yum", "install", "-y", "clang-tools-extra", "cppcheck"],
            "Install clang-tools-extra, cppcheck",
        )],
        PackageManager::Pip3 | PackageManager::Pip => Vec::new(),
    };

    InstallPlan { manager, steps }
}
