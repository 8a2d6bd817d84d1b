//! CLI argument definitions.
//!
//! Running `toolprep` with no arguments performs the full bootstrap, so the
//! [`Cli`] struct carries flags only.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// toolprep - Code-quality toolchain bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "toolprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .toolprep.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode requested on the command line, if any.
    ///
    /// Flags win over the `output` key of the config file.
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.quiet {
            Some(OutputMode::Quiet)
        } else if self.verbose {
            Some(OutputMode::Verbose)
        } else {
            None
        }
    }
}
