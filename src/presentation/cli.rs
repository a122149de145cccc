//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --settings) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// cfgmigrate - bring YAML config files up to date without losing comments
#[derive(Parser, Debug)]
#[command(name = "cfgmigrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ./cfgmigrate.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add missing keys from the template and bump the config version
    Migrate {
        /// User configuration file
        #[arg(default_value = "config.yml")]
        config: PathBuf,

        /// Default template the config is migrated to
        #[arg(short, long)]
        template: PathBuf,

        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,

        /// Fail instead of rewriting without comments when the rewrite fails
        #[arg(long)]
        no_fallback: bool,

        /// Skip re-parsing the rewritten file before it is written
        #[arg(long)]
        no_verify: bool,

        /// Reserved version key
        #[arg(long, value_name = "KEY")]
        version_key: Option<String>,
    },

    /// Report missing keys and versions (exits 1 when a migration is pending)
    Check {
        /// User configuration file
        #[arg(default_value = "config.yml")]
        config: PathBuf,

        /// Default template the config is compared with
        #[arg(short, long)]
        template: PathBuf,

        /// Reserved version key
        #[arg(long, value_name = "KEY")]
        version_key: Option<String>,
    },

    /// Compare the running version with the latest release tag
    Release {
        /// Running version
        #[arg(long)]
        current: String,

        /// Latest published tag (e.g. v1.5.0)
        #[arg(long)]
        latest: String,
    },
}
