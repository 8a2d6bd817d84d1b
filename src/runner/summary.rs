//! Per-run outcome accumulated by the bootstrap.

use std::path::PathBuf;
use std::time::Duration;

/// Final status of a single tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// Already available before the run.
    Present,
    /// Installed during this run and confirmed by a second probe.
    Installed,
    /// Install steps succeeded but the tool still does not probe.
    Unverified,
    /// Its branch was entered and could not install it.
    Failed,
    /// Optional tool left missing because its branch was not entered.
    Missing,
}

/// One line of the tool table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    /// Tool name.
    pub name: String,
    /// Final status.
    pub status: ToolStatus,
    /// Whether the tool is required.
    pub required: bool,
    /// Version or the reason it is unavailable.
    pub detail: String,
}

/// Result of one bootstrap invocation.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Every tool in probe order.
    pub tools: Vec<ToolReport>,
    /// Artifacts written by this run.
    pub artifacts_created: Vec<PathBuf>,
    /// Artifacts left alone because they already existed.
    pub artifacts_existing: Vec<PathBuf>,
    /// Whether the hook manager installed its git hook.
    pub hooks_installed: bool,
    /// Non-fatal problems, in the order they happened.
    pub warnings: Vec<String>,
    /// First fatal failure, if any.
    pub fatal_reason: Option<String>,
    /// Wall-clock time of the run.
    pub total_duration: Duration,
}

impl RunSummary {
    /// Number of tools probed.
    pub fn tools_checked(&self) -> usize {
        self.tools.len()
    }

    /// Names of tools with a given status.
    pub fn tools_with(&self, status: ToolStatus) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| t.status == status)
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Tools installed during the run.
    pub fn tools_installed(&self) -> Vec<&str> {
        self.tools_with(ToolStatus::Installed)
    }

    /// Tools whose install failed.
    pub fn tools_failed(&self) -> Vec<&str> {
        self.tools_with(ToolStatus::Failed)
    }

    /// Tools that installed without a passing probe afterwards.
    pub fn tools_unverified(&self) -> Vec<&str> {
        self.tools_with(ToolStatus::Unverified)
    }

    /// Whether every attempted required install succeeded.
    pub fn success(&self) -> bool {
        self.fatal_reason.is_none()
    }

    /// Process exit status.
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Record the first fatal failure; later ones are logged only.
    pub(crate) fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        match self.fatal_reason {
            None => self.fatal_reason = Some(reason),
            Some(_) => tracing::info!("Additional failure: {}", reason),
        }
    }
}
