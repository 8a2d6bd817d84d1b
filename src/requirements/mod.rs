//! Tool probing, plan selection, and installation.
//!
//! # Modules
//!
//! - [`registry`] - The tools a run checks and which branch installs them
//! - [`probe`] - Version-command probes
//! - [`status`] - Probe results and per-run reports
//! - [`plan`] - Platform-specific install plans
//! - [`installer`] - Ordered, halt-on-failure plan execution

pub mod installer;
pub mod plan;
pub mod probe;
pub mod registry;
pub mod status;

pub use installer::{InstallOutcome, Installer};
pub use plan::{
    select_interpreted_plan, select_native_plan, select_native_plan_with, select_plans,
    InstallPlan, PlanOptions, PlanSelection, SelectedPlans, Step,
};
pub use probe::{probe, probe_all, probe_tool, ProbeOutcome};
pub use registry::{ToolCategory, ToolRegistry, ToolSpec};
pub use status::{ProbeReport, ProbeResult};
