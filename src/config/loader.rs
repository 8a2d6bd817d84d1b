//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{Result, ToolprepError};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".toolprep.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for (in order):
/// 1. A `.toolprep.yml` file
/// 2. A `.git` directory or file (worktrees use a file)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse YAML content into [`Settings`].
///
/// Blank content is treated as an empty mapping.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| ToolprepError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ToolprepError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ToolprepError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Load settings with optional path override.
///
/// An explicit path must exist. Without one, `.toolprep.yml` in the project
/// root is used when present and defaults apply otherwise.
pub fn load_settings(project_root: &Path, config_override: Option<&Path>) -> Result<Settings> {
    if let Some(path) = config_override {
        return load_settings_file(path);
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading settings from {}", path.display());
        load_settings_file(&path)
    } else {
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tempfile::TempDir;

    #[test]
    fn missing_project_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(temp.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn project_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "output: verbose\n").unwrap();

        let settings = load_settings(temp.path(), None).unwrap();
        assert_eq!(settings.output, OutputMode::Verbose);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "\n# nothing yet\n").unwrap();

        let settings = load_settings(temp.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "use_sudo: [unclosed").unwrap();

        let err = load_settings(temp.path(), None).unwrap_err();
        assert!(matches!(err, ToolprepError::ConfigParseError { .. }));
    }

    #[test]
    fn override_path_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "output: verbose").unwrap();
        let other = temp.path().join("ci.yml");
        fs::write(&other, "output: silent").unwrap();

        let settings = load_settings(temp.path(), Some(&other)).unwrap();
        assert_eq!(settings.output, OutputMode::Silent);
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_settings(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ToolprepError::ConfigNotFound { .. }));
    }

    #[test]
    fn find_project_root_finds_git_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src").join("core");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        assert_eq!(find_project_root(&subdir), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_config_file() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("tools");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(find_project_root(&nested), Some(nested.clone()));
    }
}
