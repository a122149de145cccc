//! cfgmigrate CLI - migrate YAML configuration files to a newer template
//!
//! Usage: cfgmigrate <COMMAND>
//!
//! Commands:
//!   migrate  Add missing keys and bump the config version
//!   check    Report whether a migration is pending
//!   release  Compare the running version with a release tag

use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cfgmigrate::config::{self, Verbosity};
use cfgmigrate::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (settings, warnings) = match config::load_or_default(cli.settings.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };

    init_tracing(cli.verbose, settings.output.verbosity);

    for warning in &warnings {
        warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown settings key"
        );
    }

    let color = ui::terminal::color_enabled(cli.color, settings.output.color);

    let result = match &cli.command {
        Commands::Migrate {
            config,
            template,
            dry_run,
            no_fallback,
            no_verify,
            version_key,
        } => {
            let options = commands::resolve_options(
                &settings,
                version_key.as_deref(),
                *no_fallback,
                *no_verify,
            );
            commands::migrate::cmd_migrate(config, template, options, *dry_run, cli.json, color)
        }
        Commands::Check {
            config,
            template,
            version_key,
        } => {
            let options = commands::resolve_options(&settings, version_key.as_deref(), false, false);
            commands::check::cmd_check(config, template, options, cli.json, color)
        }
        Commands::Release { current, latest } => {
            commands::release::cmd_release(current, latest, cli.json, color)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr. `-v` flags win over the configured verbosity;
/// `CFGMIGRATE_LOG` takes full filter directives.
fn init_tracing(verbose: u8, verbosity: Verbosity) {
    let level = match verbose {
        0 => match verbosity {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        },
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::try_from_env("CFGMIGRATE_LOG")
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {err}");
    }
}
