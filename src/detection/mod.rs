//! Host environment and package manager detection.

pub mod inspector;
pub mod package_manager;
pub mod path;

pub use inspector::{EnvironmentInspector, StaticInspector, SystemInspector};
pub use package_manager::PackageManager;
pub use path::{is_executable, parse_system_path, resolve_tool_path};
