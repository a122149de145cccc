//! Subcommand handlers

pub mod check;
pub mod migrate;
pub mod release;

use std::path::Path;

use cfgmigrate::application::MigrateOptions;
use cfgmigrate::config::Settings;

/// Migration options from settings with CLI flags applied on top
pub fn resolve_options(
    settings: &Settings,
    version_key: Option<&str>,
    no_fallback: bool,
    no_verify: bool,
) -> MigrateOptions {
    let mut options = settings.migrate_options();
    if let Some(key) = version_key {
        options = options.with_version_key(key);
    }
    if no_fallback {
        options = options.with_fallback(false);
    }
    if no_verify {
        options = options.with_verify(false);
    }
    options
}

/// Fail early with a readable message instead of an aborted report.
pub fn require_template(template: &Path) -> anyhow::Result<()> {
    if !template.is_file() {
        anyhow::bail!("template not found: {}", template.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let settings = Settings::default();
        let options = resolve_options(&settings, Some("schema"), true, false);
        assert_eq!(options.version_key, "schema");
        assert!(!options.fallback);
        assert!(options.verify);
    }
}
