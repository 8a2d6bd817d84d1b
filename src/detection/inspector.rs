//! Host environment inspection.
//!
//! Plan selection depends only on what an [`EnvironmentInspector`] reports,
//! so it can be exercised against any platform from a test.
//!
//! # Example
//!
//! ```
//! use toolprep::detection::{EnvironmentInspector, StaticInspector};
//!
//! let host = StaticInspector::new("linux").with_executables(["apt-get", "pip3"]);
//! assert_eq!(host.os_name(), "linux");
//! assert!(host.has_executable("apt-get"));
//! assert!(!host.has_executable("brew"));
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::package_manager::PackageManager;
use super::path::{parse_system_path, resolve_tool_path};
use crate::shell::platform;

/// Reports facts about the host that installation decisions depend on.
pub trait EnvironmentInspector {
    /// Normalized OS name (`darwin`, `linux`, `windows`, ...).
    fn os_name(&self) -> String;

    /// Whether an executable with this name can be resolved.
    fn has_executable(&self, name: &str) -> bool;

    /// Whether the process already has root privileges.
    fn is_elevated(&self) -> bool;

    /// The known package managers that are present, by executable name.
    fn available_managers(&self) -> BTreeSet<String> {
        PackageManager::ALL
            .iter()
            .map(PackageManager::executable)
            .filter(|exe| self.has_executable(exe))
            .map(str::to_string)
            .collect()
    }
}

/// Inspector backed by the real process environment.
#[derive(Debug, Clone)]
pub struct SystemInspector {
    path_entries: Vec<PathBuf>,
}

impl SystemInspector {
    /// Capture the current `PATH`.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
        }
    }

    /// Inspect against an explicit list of directories instead of `PATH`.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Default for SystemInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentInspector for SystemInspector {
    fn os_name(&self) -> String {
        platform::os_name()
    }

    fn has_executable(&self, name: &str) -> bool {
        let found = resolve_tool_path(name, &self.path_entries);
        tracing::debug!("Executable '{}': {:?}", name, found);
        found.is_some()
    }

    fn is_elevated(&self) -> bool {
        platform::is_elevated()
    }
}

/// Inspector with fixed answers, for tests and dry planning.
#[derive(Debug, Clone, Default)]
pub struct StaticInspector {
    os: String,
    executables: BTreeSet<String>,
    elevated: bool,
}

impl StaticInspector {
    /// Create an inspector for the given OS with no executables.
    pub fn new(os: &str) -> Self {
        Self {
            os: os.to_string(),
            ..Default::default()
        }
    }

    /// Set the executables that resolve.
    pub fn with_executables<I, S>(mut self, executables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.executables = executables.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the process as running with root privileges.
    pub fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }
}

impl EnvironmentInspector for StaticInspector {
    fn os_name(&self) -> String {
        self.os.clone()
    }

    fn has_executable(&self, name: &str) -> bool {
        self.executables.contains(name)
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn static_inspector_reports_managers_present() {
        let host = StaticInspector::new("linux").with_executables(["dnf", "pip", "git"]);
        let managers = host.available_managers();

        assert_eq!(
            managers.into_iter().collect::<Vec<_>>(),
            vec!["dnf".to_string(), "pip".to_string()]
        );
    }

    #[test]
    fn static_inspector_defaults_to_unprivileged() {
        assert!(!StaticInspector::new("linux").is_elevated());
        assert!(StaticInspector::new("linux").elevated().is_elevated());
    }

    #[test]
    fn system_inspector_uses_given_path() {
        let temp = TempDir::new().unwrap();
        let brew = temp.path().join("brew");
        fs::write(&brew, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&brew, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let host = SystemInspector::with_path(vec![temp.path().to_path_buf()]);
        assert!(host.has_executable("brew"));
        assert!(!host.has_executable("apt-get"));
        assert!(host.available_managers().contains("brew"));
    }

    #[test]
    fn system_inspector_os_is_normalized() {
        let os = SystemInspector::new().os_name();
        assert_ne!(os, "macos");
        assert!(!os.is_empty());
    }
}
