//! The fixed set of code-quality tools toolprep manages.

use std::fmt;

use crate::shell::CommandLine;

/// Which installation branch provides a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// Compiled-language tooling from the system package manager.
    Native,
    /// Interpreted-ecosystem tooling from the language package installer.
    Interpreted,
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolCategory::Native => write!(f, "native"),
            ToolCategory::Interpreted => write!(f, "interpreted"),
        }
    }
}

/// A tool definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name (e.g., "clang-format", "black").
    pub name: String,
    /// What the tool does, for display.
    pub role: String,
    /// Command whose success proves the tool is usable.
    pub probe_command: Vec<String>,
    /// Branch that installs the tool.
    pub category: ToolCategory,
    /// Whether a missing tool triggers (and a failed install fails) the run.
    pub required: bool,
}

impl ToolSpec {
    /// Define a tool.
    pub fn new(
        name: &str,
        role: &str,
        probe_command: &[&str],
        category: ToolCategory,
        required: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            probe_command: probe_command.iter().map(|s| s.to_string()).collect(),
            category,
            required,
        }
    }

    /// The probe as a runnable command.
    pub fn probe_command_line(&self) -> CommandLine {
        CommandLine::Argv(self.probe_command.clone())
    }
}

/// Registry of the tools a run checks.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// The built-in tool set.
    pub fn new() -> Self {
        use ToolCategory::{Interpreted, Native};

        Self {
            tools: vec![
                ToolSpec::new(
                    "clang-format",
                    "format checker",
                    &["clang-format", "--version"],
                    Native,
                    true,
                ),
                ToolSpec::new(
                    "clang-tidy",
                    "static analyzer",
                    &["clang-tidy", "--version"],
                    Native,
                    true,
                ),
                ToolSpec::new(
                    "cppcheck",
                    "security scanner",
                    &["cppcheck", "--version"],
                    Native,
                    true,
                ),
                ToolSpec::new(
                    "black",
                    "formatter",
                    &["python3", "-m", "black", "--version"],
                    Interpreted,
                    true,
                ),
                ToolSpec::new(
                    "isort",
                    "import sorter",
                    &["python3", "-m", "isort", "--version"],
                    Interpreted,
                    true,
                ),
                ToolSpec::new(
                    "flake8",
                    "linter",
                    &["python3", "-m", "flake8", "--version"],
                    Interpreted,
                    true,
                ),
                ToolSpec::new(
                    "mypy",
                    "type checker",
                    &["python3", "-m", "mypy", "--version"],
                    Interpreted,
                    false,
                ),
                ToolSpec::new(
                    "pre-commit",
                    "hook manager",
                    &["pre-commit", "--version"],
                    Interpreted,
                    false,
                ),
            ],
        }
    }

    /// Build a registry from an explicit tool list.
    pub fn from_tools(tools: Vec<ToolSpec>) -> Self {
        Self { tools }
    }

    /// All tools, in probe order.
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Tools installed by a given branch.
    pub fn in_category(&self, category: ToolCategory) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_covers_every_role() {
        let registry = ToolRegistry::new();
        for role in [
            "format checker",
            "static analyzer",
            "security scanner",
            "formatter",
            "import sorter",
            "linter",
            "type checker",
            "hook manager",
        ] {
            assert!(
                registry.tools().iter().any(|t| t.role == role),
                "no tool for role {}",
                role
            );
        }
    }

    #[test]
    fn names_are_unique() {
        let registry = ToolRegistry::new();
        let mut names: Vec<_> = registry.tools().iter().map(|t| &t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn native_tools_probe_their_own_binary() {
        let registry = ToolRegistry::new();
        for tool in registry.in_category(ToolCategory::Native) {
            assert_eq!(tool.probe_command[0], tool.name);
            assert!(tool.required);
        }
    }

    #[test]
    fn interpreted_modules_probe_through_python() {
        let black = ToolRegistry::new().get("black").cloned().unwrap();
        assert_eq!(
            black.probe_command_line().to_string(),
            "python3 -m black --version"
        );
    }

    #[test]
    fn type_checker_and_hook_manager_are_optional() {
        let registry = ToolRegistry::new();
        assert!(!registry.get("mypy").unwrap().required);
        assert!(!registry.get("pre-commit").unwrap().required);
    }

    #[test]
    fn get_unknown_tool_is_none() {
        assert!(ToolRegistry::new().get("eslint").is_none());
    }
}
