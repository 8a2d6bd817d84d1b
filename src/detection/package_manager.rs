//! Package manager identities.

use std::fmt;

/// A package manager toolprep knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    // System
    Homebrew,
    Apt,
    Dnf,
    Yum,

    // Language
    Pip3,
    Pip,
}

impl PackageManager {
    /// Linux system managers in the order they are preferred.
    pub const LINUX_PRIORITY: [PackageManager; 3] =
        [PackageManager::Apt, PackageManager::Dnf, PackageManager::Yum];

    /// Interpreted-ecosystem installers in the order they are preferred.
    pub const PYTHON_PRIORITY: [PackageManager; 2] = [PackageManager::Pip3, PackageManager::Pip];

    /// Every manager toolprep looks for.
    pub const ALL: [PackageManager; 6] = [
        PackageManager::Homebrew,
        PackageManager::Apt,
        PackageManager::Dnf,
        PackageManager::Yum,
        PackageManager::Pip3,
        PackageManager::Pip,
    ];

    /// The executable whose presence indicates this manager.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Homebrew => "brew",
            PackageManager::Apt => "apt-get",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Pip3 => "pip3",
            PackageManager::Pip => "pip",
        }
    }

    /// Whether installs through this manager modify system directories.
    pub fn needs_root(&self) -> bool {
        matches!(
            self,
            PackageManager::Apt | PackageManager::Dnf | PackageManager::Yum
        )
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable())
    }
}
