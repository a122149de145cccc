//! Settings for the cfgmigrate tool itself
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CFGMIGRATE_*)
//! 3. Settings file (`--settings <path>` or `./cfgmigrate.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, SettingsWarning, SETTINGS_FILE};
pub use types::{ColorMode, MigrateSettings, OutputSettings, Settings, Verbosity};
