//! Status vocabulary shared by every output surface.

use super::theme::ToolprepTheme;
use crate::runner::ToolStatus;

/// Canonical status kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Failed,
    /// Operation was skipped.
    Skipped,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for logs and other non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Skipped => "[skip]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &ToolprepTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }
}

impl From<ToolStatus> for StatusKind {
    fn from(status: ToolStatus) -> Self {
        match status {
            ToolStatus::Present | ToolStatus::Installed => Self::Success,
            ToolStatus::Unverified => Self::Warning,
            ToolStatus::Failed => Self::Failed,
            ToolStatus::Missing => Self::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 4] = [
        StatusKind::Success,
        StatusKind::Failed,
        StatusKind::Skipped,
        StatusKind::Warning,
    ];

    #[test]
    fn styled_contains_icon() {
        let theme = ToolprepTheme::plain();
        for kind in ALL {
            assert_eq!(kind.styled(&theme), kind.icon());
        }
    }

    #[test]
    fn icons_and_brackets_are_unique() {
        let mut icons: Vec<_> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());

        let mut brackets: Vec<_> = ALL.iter().map(|k| k.bracketed()).collect();
        brackets.sort();
        brackets.dedup();
        assert_eq!(brackets.len(), ALL.len());
    }

    #[test]
    fn from_tool_status() {
        assert_eq!(StatusKind::from(ToolStatus::Present), StatusKind::Success);
        assert_eq!(StatusKind::from(ToolStatus::Installed), StatusKind::Success);
        assert_eq!(StatusKind::from(ToolStatus::Unverified), StatusKind::Warning);
        assert_eq!(StatusKind::from(ToolStatus::Failed), StatusKind::Failed);
        assert_eq!(StatusKind::from(ToolStatus::Missing), StatusKind::Skipped);
    }
}
