//! toolprep CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use toolprep::cli::Cli;
use toolprep::config::{find_project_root, load_settings};
use toolprep::detection::SystemInspector;
use toolprep::runner::Bootstrap;
use toolprep::shell::{is_ci, CommandOptions, SystemRunner};
use toolprep::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolprep=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolprep starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&cwd))
        .unwrap_or(cwd);

    let settings = match load_settings(&project_root, cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let output_mode = cli.output_mode().unwrap_or(settings.output);
    let mut ui = create_ui(!is_ci(), output_mode);

    let runner = SystemRunner::with_options(CommandOptions {
        cwd: Some(project_root.clone()),
        timeout: settings.timeout(),
    });
    let inspector = SystemInspector::new();

    let summary = Bootstrap::new(&runner, &inspector, project_root)
        .with_settings(settings)
        .run(ui.as_mut());

    ExitCode::from(summary.exit_code())
}
