//! Hint text for the end of a run.

/// Steps to take once the tooling is in place.
pub fn next_steps() -> [&'static str; 4] {
    [
        "Run ./scripts/check-quality.sh to check code quality",
        "Run ./scripts/fix-quality.sh to auto-fix issues",
        "Use 'make check-all' and 'make fix-all' in your build directory",
        "Pre-commit hooks will run automatically on commit",
    ]
}

/// Hint after a run with a fatal failure.
pub fn after_failed_run(failed_tools: &[&str]) -> String {
    if failed_tools.is_empty() {
        return "Fix the problem above and re-run toolprep.".to_string();
    }
    format!(
        "Install {} manually or fix the problem above, then re-run toolprep.",
        failed_tools.join(", ")
    )
}

/// Hint when installed tools still fail to probe.
pub fn after_unverified_install() -> &'static str {
    "Restart your shell or check your PATH, then re-run toolprep to verify."
}

/// Hint when the hook manager could not install its git hook.
pub fn after_hook_failure() -> &'static str {
    "Run 'pre-commit install' inside the repository once pre-commit is available."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_mention_generated_scripts() {
        let steps = next_steps();
        assert!(steps[0].contains("check-quality.sh"));
        assert!(steps[1].contains("fix-quality.sh"));
    }

    #[test]
    fn failed_run_hint_names_tools() {
        let hint = after_failed_run(&["clang-tidy", "cppcheck"]);
        assert!(hint.contains("clang-tidy, cppcheck"));
    }

    #[test]
    fn failed_run_hint_without_tools() {
        assert!(after_failed_run(&[]).contains("re-run toolprep"));
    }
}
