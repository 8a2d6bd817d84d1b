//! Bootstrap orchestration.

pub mod bootstrap;
pub mod summary;

pub use bootstrap::{Bootstrap, BranchResult, RunContext, RunState};
pub use summary::{RunSummary, ToolReport, ToolStatus};
