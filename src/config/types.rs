//! Settings type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::MigrateOptions;
use crate::domain::value_objects::DEFAULT_VERSION_KEY;
use crate::error::MigrateResult;

use super::loader::{self, SettingsWarning};

/// Migration behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrateSettings {
    #[serde(default = "default_version_key")]
    pub version_key: String,

    #[serde(default = "default_true")]
    pub fallback: bool,

    #[serde(default = "default_true")]
    pub verify: bool,
}

impl Default for MigrateSettings {
    fn default() -> Self {
        Self {
            version_key: default_version_key(),
            fallback: true,
            verify: true,
        }
    }
}

fn default_version_key() -> String {
    DEFAULT_VERSION_KEY.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a settings or environment value. Unknown values are `Normal`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full settings (`cfgmigrate.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub migrate: MigrateSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> MigrateResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MigrateResult<(Self, Vec<SettingsWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (CFGMIGRATE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn migrate_options(&self) -> MigrateOptions {
        MigrateOptions::new()
            .with_version_key(self.migrate.version_key.clone())
            .with_fallback(self.migrate.fallback)
            .with_verify(self.migrate.verify)
    }
}
