//! Configuration loading for toolprep.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use toolprep::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".toolprep.yml"), "use_sudo: false").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert!(!settings.use_sudo);
//! assert!(settings.install_hooks);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_root, load_settings, load_settings_file, parse_settings, CONFIG_FILE_NAME,
};
pub use schema::Settings;
