//! toolprep - Code-quality toolchain bootstrapper.
//!
//! toolprep brings a development machine from "unknown state" to "every
//! required code-quality tool installed, hook configuration present, helper
//! scripts generated, and hooks installed". It is safe to rerun: tools that
//! are already present are not reinstalled and existing files are never
//! overwritten.
//!
//! # Modules
//!
//! - [`artifacts`] - Generated hook configuration and helper scripts
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Optional `.toolprep.yml` settings
//! - [`detection`] - Operating system, PATH, and package manager detection
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Tool registry, probing, plan selection, and installation
//! - [`runner`] - The bootstrap state machine and its summary
//! - [`shell`] - External command execution
//! - [`ui`] - Spinners, status lines, and the final summary
//!
//! # Example
//!
//! ```
//! use toolprep::detection::StaticInspector;
//! use toolprep::requirements::{select_plans, PlanOptions};
//!
//! let inspector = StaticInspector::new("linux").with_executables(["apt-get"]);
//! let plans = select_plans(&inspector, PlanOptions { use_sudo: true });
//!
//! let native = plans.native.plan().unwrap();
//! assert_eq!(native.steps[0].to_string(), "sudo apt-get update");
//! ```
//!
//! End-to-end runs against a mock runner live in the integration tests.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolprepError};
