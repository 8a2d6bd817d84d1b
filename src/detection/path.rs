//! Executable lookup on `PATH`.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does not shell
/// out to `which`.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in candidate_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![
        tool.to_string(),
        format!("{}.exe", tool),
        format!("{}.cmd", tool),
        format!("{}.bat", tool),
    ]
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}
