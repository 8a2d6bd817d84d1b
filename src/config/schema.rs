//! Configuration schema.

use serde::Deserialize;
use std::time::Duration;

use crate::ui::OutputMode;

/// Settings read from `.toolprep.yml`.
///
/// Every key is optional; a missing file and an empty file both produce
/// [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output mode: verbose, normal, quiet, silent.
    pub output: OutputMode,

    /// Seconds before a spawned command is killed. Unset waits forever.
    pub command_timeout: Option<u64>,

    /// Prefix root-requiring package manager commands with `sudo`.
    pub use_sudo: bool,

    /// Run the hook manager's `install` after writing its config.
    pub install_hooks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputMode::Normal,
            command_timeout: None,
            use_sudo: true,
            install_hooks: true,
        }
    }
}

impl Settings {
    /// The command timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.command_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.output, OutputMode::Normal);
        assert!(settings.use_sudo);
        assert!(settings.install_hooks);
        assert!(settings.timeout().is_none());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let settings: Settings = serde_yaml::from_str("use_sudo: false").unwrap();
        assert!(!settings.use_sudo);
        assert!(settings.install_hooks);
        assert_eq!(settings.output, OutputMode::Normal);
    }

    #[test]
    fn full_yaml() {
        let yaml = r#"
output: quiet
command_timeout: 600
use_sudo: false
install_hooks: false
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.output, OutputMode::Quiet);
        assert_eq!(settings.timeout(), Some(Duration::from_secs(600)));
        assert!(!settings.use_sudo);
        assert!(!settings.install_hooks);
    }

    #[test]
    fn zero_timeout_means_none() {
        let settings = Settings {
            command_timeout: Some(0),
            ..Default::default()
        };
        assert!(settings.timeout().is_none());
    }

    #[test]
    fn rejects_unknown_output_mode() {
        assert!(serde_yaml::from_str::<Settings>("output: loud").is_err());
    }
}
