//! External command execution and host platform queries.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandLine, CommandOptions, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, is_elevated, normalize_os, os_name};
