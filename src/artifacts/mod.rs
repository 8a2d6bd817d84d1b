//! Generated configuration files.
//!
//! Artifacts are written only when absent. An existing file is never
//! touched, so developer edits survive every rerun.
//!
//! # Example
//!
//! ```
//! use toolprep::artifacts::{materialize, ArtifactId};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let artifact = ArtifactId::QualityCheckScript.artifact();
//!
//! assert!(materialize(&artifact, temp.path()).unwrap());
//! assert!(!materialize(&artifact, temp.path()).unwrap());
//! assert!(temp.path().join("scripts/check-quality.sh").is_file());
//! ```

pub mod templates;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolprepError};

/// Stable identifiers for the files toolprep generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactId {
    /// `.pre-commit-config.yaml` at the project root.
    HookConfig,
    /// `scripts/check-quality.sh`.
    QualityCheckScript,
    /// `scripts/fix-quality.sh`.
    QualityFixScript,
}

impl ArtifactId {
    /// Every artifact, in write order.
    pub const ALL: [ArtifactId; 3] = [
        ArtifactId::HookConfig,
        ArtifactId::QualityCheckScript,
        ArtifactId::QualityFixScript,
    ];

    /// Path relative to the project root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactId::HookConfig => ".pre-commit-config.yaml",
            ArtifactId::QualityCheckScript => "scripts/check-quality.sh",
            ArtifactId::QualityFixScript => "scripts/fix-quality.sh",
        }
    }

    /// File content.
    pub fn content(&self) -> &'static str {
        match self {
            ArtifactId::HookConfig => templates::HOOK_CONFIG,
            ArtifactId::QualityCheckScript => templates::CHECK_SCRIPT,
            ArtifactId::QualityFixScript => templates::FIX_SCRIPT,
        }
    }

    /// Whether the file is a script.
    pub fn executable(&self) -> bool {
        !matches!(self, ArtifactId::HookConfig)
    }

    /// The artifact this identifier describes.
    pub fn artifact(&self) -> GeneratedArtifact {
        GeneratedArtifact {
            path: PathBuf::from(self.relative_path()),
            content: self.content().to_string(),
            executable: self.executable(),
        }
    }
}

/// A file to write if absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Path, relative to the project root unless absolute.
    pub path: PathBuf,
    /// Content written verbatim.
    pub content: String,
    /// Mark the file executable after writing.
    pub executable: bool,
}

/// The standard artifact set.
pub fn default_artifacts() -> Vec<GeneratedArtifact> {
    ArtifactId::ALL.iter().map(ArtifactId::artifact).collect()
}

/// Write an artifact under `root` unless a file already exists there.
///
/// Returns `true` when the file was created. Missing parent directories
/// are created first.
pub fn materialize(artifact: &GeneratedArtifact, root: &Path) -> Result<bool> {
    let target = root.join(&artifact.path);

    // A symlink counts as present even when it dangles.
    if fs::symlink_metadata(&target).is_ok() {
        tracing::debug!("Keeping existing {}", target.display());
        return Ok(false);
    }

    let write_error = |source| ToolprepError::ArtifactWrite {
        path: target.clone(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("{} appeared before it could be written", target.display());
            return Ok(false);
        }
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(artifact.content.as_bytes())
        .map_err(write_error)?;

    if artifact.executable {
        make_executable(&target).map_err(write_error)?;
    }

    tracing::info!("Created {}", target.display());
    Ok(true)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn second_call_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let first = GeneratedArtifact {
            path: PathBuf::from("notes.txt"),
            content: "original".to_string(),
            executable: false,
        };
        let second = GeneratedArtifact {
            content: "replacement".to_string(),
            ..first.clone()
        };

        assert!(materialize(&first, temp.path()).unwrap());
        assert!(!materialize(&second, temp.path()).unwrap());
        assert_eq!(
            fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn user_edited_file_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".pre-commit-config.yaml"), "repos: []\n").unwrap();

        let created = materialize(&ArtifactId::HookConfig.artifact(), temp.path()).unwrap();

        assert!(!created);
        assert_eq!(
            fs::read_to_string(temp.path().join(".pre-commit-config.yaml")).unwrap(),
            "repos: []\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_not_followed() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let escape = outside.path().join("escaped.yaml");
        std::os::unix::fs::symlink(&escape, temp.path().join(".pre-commit-config.yaml"))
            .unwrap();

        let created = materialize(&ArtifactId::HookConfig.artifact(), temp.path()).unwrap();

        assert!(!created);
        assert!(!escape.exists());
    }

    #[test]
    fn creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let artifact = GeneratedArtifact {
            path: PathBuf::from("a/b/c/file.sh"),
            content: "#!/bin/sh\n".to_string(),
            executable: true,
        };

        assert!(materialize(&artifact, temp.path()).unwrap());
        assert!(temp.path().join("a/b/c/file.sh").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        for artifact in default_artifacts() {
            materialize(&artifact, temp.path()).unwrap();
        }

        for id in [ArtifactId::QualityCheckScript, ArtifactId::QualityFixScript] {
            let mode = fs::metadata(temp.path().join(id.relative_path()))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755, "{:?}", id);
        }
        let config_mode = fs::metadata(temp.path().join(".pre-commit-config.yaml"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(config_mode & 0o111, 0);
    }

    #[test]
    fn hook_config_is_valid_yaml_with_expected_hooks() {
        let doc: serde_yaml::Value = serde_yaml::from_str(templates::HOOK_CONFIG).unwrap();
        let repos = doc["repos"].as_sequence().unwrap();

        let ids: Vec<&str> = repos
            .iter()
            .flat_map(|repo| repo["hooks"].as_sequence().unwrap())
            .map(|hook| hook["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "trailing-whitespace",
                "end-of-file-fixer",
                "check-merge-conflict",
                "check-yaml",
                "check-added-large-files",
                "check-case-conflict",
                "black",
                "isort",
                "flake8",
                "clang-format",
                "cmake-format",
            ]
        );

        let local = repos.iter().find(|r| r["repo"] == "local").unwrap();
        assert_eq!(local["hooks"][0]["files"].as_str().unwrap(), r"\.(c|h|cpp|hpp)$");
        assert_eq!(
            local["hooks"][1]["files"].as_str().unwrap(),
            r"CMakeLists\.txt$|.*\.cmake$"
        );
        assert_eq!(local["hooks"][1]["args"][0].as_str().unwrap(), "--in-place");
    }

    #[test]
    fn every_pinned_repo_has_a_rev() {
        let doc: serde_yaml::Value = serde_yaml::from_str(templates::HOOK_CONFIG).unwrap();
        for repo in doc["repos"].as_sequence().unwrap() {
            if repo["repo"] != "local" {
                assert!(repo["rev"].as_str().is_some(), "{:?}", repo["repo"]);
            }
        }
    }

    #[test]
    fn scripts_invoke_aggregate_targets() {
        assert!(templates::CHECK_SCRIPT.starts_with("#!/bin/bash"));
        assert!(templates::CHECK_SCRIPT.contains("make check-all"));
        assert!(templates::FIX_SCRIPT.contains("make fix-all"));
    }

    #[test]
    fn default_set_has_hook_config_and_two_scripts() {
        let artifacts = default_artifacts();
        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts.iter().filter(|a| a.executable).count(), 2);
    }
}
