//! Probe result types.
//!
//! Each tool check produces a [`ProbeResult`] describing whether the tool is
//! usable and what it reported. Results live for one run only.

use regex::Regex;
use std::sync::OnceLock;

use super::registry::{ToolCategory, ToolSpec};

/// The result of probing a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The tool that was checked.
    pub tool: ToolSpec,
    /// Whether the probe command succeeded.
    pub available: bool,
    /// Trimmed stdout on success, trimmed stderr otherwise.
    pub detail: String,
}

impl ProbeResult {
    /// Whether this result should trigger an install.
    pub fn is_blocking(&self) -> bool {
        !self.available && self.tool.required
    }

    /// Version number reported by the tool, if one can be found in the detail.
    pub fn version(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        extract_version(&self.detail)
    }

    /// One-line description for progress output.
    pub fn summary_line(&self) -> String {
        if self.available {
            let version = self
                .version()
                .or_else(|| self.detail.lines().next().map(str::to_string))
                .unwrap_or_default();
            format!("{} {}", self.tool.name, version).trim_end().to_string()
        } else if self.tool.required {
            format!("{}: not found", self.tool.name)
        } else {
            format!("{}: not found (optional)", self.tool.name)
        }
    }
}

/// Probe results for a whole run.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// Wrap a list of results.
    pub fn new(results: Vec<ProbeResult>) -> Self {
        Self { results }
    }

    /// All results, in probe order.
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    /// Tools that are not available.
    pub fn missing(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| !r.available)
    }

    /// Required tools that are not available.
    pub fn blocking(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| r.is_blocking())
    }

    /// Whether any required tool of a branch is missing.
    pub fn needs_install(&self, category: ToolCategory) -> bool {
        self.blocking().any(|r| r.tool.category == category)
    }

    /// Names of missing tools in a branch, required or not.
    pub fn missing_in(&self, category: ToolCategory) -> Vec<String> {
        self.missing()
            .filter(|r| r.tool.category == category)
            .map(|r| r.tool.name.clone())
            .collect()
    }

    /// Look up a result by tool name.
    pub fn get(&self, name: &str) -> Option<&ProbeResult> {
        self.results.iter().find(|r| r.tool.name == name)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no tools were probed.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Extract version from command output.
fn extract_version(output: &str) -> Option<String> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            r"(\d+\.\d+\.\d+)",
            r"version\s+(\d+\.\d+)",
            r"v(\d+\.\d+)",
            r"(\d+\.\d+)",
        ]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
    });

    patterns
        .iter()
        .find_map(|re| re.captures(output).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().to_string())
}
