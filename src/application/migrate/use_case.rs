//! Migrate Use Case
//!
//! Orchestrates one migration run:
//! 1. Load the template (text and structured view)
//! 2. Load the user file and detect missing keys
//! 3. Decide: up to date, version restamp only, or full rewrite
//! 4. Rewrite the line model, verify it, write it once
//! 5. On failure, run the structured fallback
//! 6. Notify the change listener after every successful write
//!
//! All text manipulation lives in domain services.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{Document, StructuredConfig};
use crate::domain::ports::{ChangeListener, FileSystem, TemplateSource};
use crate::domain::services::{missing_keys, restamp, MergePlanner, SectionChange};
use crate::domain::value_objects::{ConfigVersion, KeyPath};
use crate::error::{MigrateError, MigrateResult};
use crate::infrastructure::listener::NoopListener;

use super::fallback::structured_merge;
use super::options::MigrateOptions;
use super::result::{MigrationOutcome, MigrationReport, PlanKind, PlannedMigration};

/// Everything read before the first write
struct Loaded {
    template: Document,
    defaults: StructuredConfig,
    user_text: String,
    user: StructuredConfig,
    missing: Vec<KeyPath>,
    user_version: ConfigVersion,
    default_version: ConfigVersion,
}

impl Loaded {
    fn is_current(&self) -> bool {
        self.missing.is_empty() && self.user_version >= self.default_version
    }
}

/// Config migrator - brings a user file up to date with the template
///
/// Parameterized by its ports so tests can inject failing file systems.
pub struct ConfigMigrator<FS, TS, L = NoopListener>
where
    FS: FileSystem,
    TS: TemplateSource,
    L: ChangeListener,
{
    fs: FS,
    template: TS,
    listener: L,
    options: MigrateOptions,
}

impl<FS, TS> ConfigMigrator<FS, TS, NoopListener>
where
    FS: FileSystem,
    TS: TemplateSource,
{
    pub fn new(fs: FS, template: TS, options: MigrateOptions) -> Self {
        Self {
            fs,
            template,
            listener: NoopListener,
            options,
        }
    }
}

impl<FS, TS, L> ConfigMigrator<FS, TS, L>
where
    FS: FileSystem,
    TS: TemplateSource,
    L: ChangeListener,
{
    /// Replace the change listener
    pub fn with_listener<L2: ChangeListener>(self, listener: L2) -> ConfigMigrator<FS, TS, L2> {
        ConfigMigrator {
            fs: self.fs,
            template: self.template,
            listener,
            options: self.options,
        }
    }

    pub fn options(&self) -> &MigrateOptions {
        &self.options
    }

    /// Compute the migration without writing.
    ///
    /// Returns `None` when there is no user file or it is already current.
    pub fn plan(&self, path: &Path) -> MigrateResult<Option<PlannedMigration>> {
        let Some(loaded) = self.load(path)? else {
            return Ok(None);
        };
        if loaded.is_current() {
            return Ok(None);
        }

        let (kind, updated) = match self.rewrite(&loaded) {
            Ok((text, _)) if loaded.missing.is_empty() => (PlanKind::VersionOnly, text),
            Ok((text, _)) => (PlanKind::Rewrite, text),
            Err(err) if self.options.fallback => {
                debug!(error = %err, "planned rewrite failed, planning fallback");
                let text = structured_merge(
                    &loaded.user_text,
                    &loaded.defaults,
                    &self.options.version_key,
                    loaded.default_version,
                )?;
                (PlanKind::Fallback, text)
            }
            Err(err) => return Err(err),
        };

        Ok(Some(PlannedMigration {
            kind,
            user_version: loaded.user_version,
            default_version: loaded.default_version,
            missing_keys: loaded.missing,
            original: loaded.user_text,
            updated,
        }))
    }

    /// Run the migration. Never fails; the outcome is in the report.
    pub fn migrate(&self, path: &Path) -> MigrationReport {
        let loaded = match self.load(path) {
            Ok(Some(loaded)) => loaded,
            Ok(None) => {
                debug!(path = %path.display(), "no user config, nothing to migrate");
                return MigrationReport::new(path, MigrationOutcome::NoUserFile);
            }
            Err(err) => {
                warn!(error = %err, "config migration aborted");
                return MigrationReport::new(
                    path,
                    MigrationOutcome::Aborted {
                        reason: err.to_string(),
                    },
                );
            }
        };

        let mut report = MigrationReport {
            path: path.to_path_buf(),
            user_version: loaded.user_version,
            default_version: loaded.default_version,
            missing_keys: loaded.missing.clone(),
            outcome: MigrationOutcome::UpToDate,
        };

        if loaded.is_current() {
            info!("config is up to date");
            return report;
        }

        info!(
            from = %loaded.user_version,
            to = %loaded.default_version,
            "updating config"
        );

        let primary = self.rewrite(&loaded).and_then(|(text, changes)| {
            self.fs.write(path, &text)?;
            Ok(changes)
        });

        report.outcome = match primary {
            Ok(changes) => {
                self.listener.on_config_changed(path);
                info!(path = %path.display(), "config updated");
                if loaded.missing.is_empty() {
                    MigrationOutcome::VersionStamped
                } else {
                    MigrationOutcome::Rewritten { changes }
                }
            }
            Err(err) => self.recover(path, &loaded, err),
        };
        report
    }

    /// Read the template and the user file. `None` when the user file does not exist.
    fn load(&self, path: &Path) -> MigrateResult<Option<Loaded>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }

        let (template, defaults) = self.load_template()?;

        let user_text = self.fs.read(path)?;

        let tab_line = Document::parse(&user_text)
            .first_tab_indented()
            .map(|index| index + 1);
        if let Some(line) = tab_line {
            warn!(
                path = %path.display(),
                line,
                "tab indentation is not supported, rewrite may fall back"
            );
        }

        let user = StructuredConfig::parse(&user_text).map_err(|e| {
            let message = match tab_line {
                Some(line) => format!("tab indentation at line {line} is not supported ({e})"),
                None => e.to_string(),
            };
            MigrateError::UserConfigInvalid {
                file: path.to_path_buf(),
                message,
            }
        })?;

        let key = self.options.version_key.as_str();
        let user_version = user.version(key);
        let default_version = defaults.version(key);
        info!(%user_version, %default_version, "config versions");

        let missing = missing_keys(&user, &defaults, key);
        info!(count = missing.len(), keys = ?missing, "missing keys");

        Ok(Some(Loaded {
            template,
            defaults,
            user_text,
            user,
            missing,
            user_version,
            default_version,
        }))
    }

    fn load_template(&self) -> MigrateResult<(Document, StructuredConfig)> {
        let origin = self.template.describe();
        let text = self
            .template
            .load()
            .map_err(|e| MigrateError::template(format!("{origin}: {e}")))?;
        if text.trim().is_empty() {
            return Err(MigrateError::template(format!("{origin}: template is empty")));
        }
        let defaults = StructuredConfig::parse(&text)
            .map_err(|e| MigrateError::template(format!("{origin}: {e}")))?;
        Ok((Document::parse(&text), defaults))
    }

    /// Primary path: line rewrite plus optional verification.
    fn rewrite(&self, loaded: &Loaded) -> MigrateResult<(String, Vec<SectionChange>)> {
        let key = self.options.version_key.as_str();
        let mut doc = Document::parse(&loaded.user_text);

        let changes = if loaded.missing.is_empty() {
            info!("no missing keys, restamping version only");
            restamp(&mut doc, &loaded.template, key, loaded.default_version);
            Vec::new()
        } else {
            MergePlanner::new(&loaded.template, &loaded.defaults, key)
                .migrate(&mut doc, &loaded.user, &loaded.missing, loaded.default_version)
                .map_err(|e| MigrateError::rewrite(e.to_string()))?
        };

        let text = doc.render();
        if self.options.verify {
            self.verify(&text, loaded)?;
        }
        Ok((text, changes))
    }

    /// The rewritten text must parse, be complete and carry the new version.
    fn verify(&self, text: &str, loaded: &Loaded) -> MigrateResult<()> {
        let key = self.options.version_key.as_str();
        let parsed = StructuredConfig::parse(text)
            .map_err(|e| MigrateError::rewrite(format!("rewritten config is not valid YAML: {e}")))?;

        let still_missing = missing_keys(&parsed, &loaded.defaults, key);
        if !still_missing.is_empty() {
            let keys: Vec<&str> = still_missing.iter().map(KeyPath::as_str).collect();
            return Err(MigrateError::rewrite(format!(
                "keys still missing after rewrite: {}",
                keys.join(", ")
            )));
        }

        let version = parsed.version(key);
        if version != loaded.default_version {
            return Err(MigrateError::rewrite(format!(
                "rewritten config has version {version}, expected {}",
                loaded.default_version
            )));
        }
        Ok(())
    }

    /// Structured fallback after the primary path failed.
    fn recover(&self, path: &Path, loaded: &Loaded, primary: MigrateError) -> MigrationOutcome {
        if !self.options.fallback {
            error!(error = %primary, "config update failed and fallback is disabled");
            return MigrationOutcome::Failed {
                reason: primary.to_string(),
            };
        }

        warn!(error = %primary, "config update failed, falling back to structured merge");

        let fallback = self
            .fs
            .read(path)
            .map_err(MigrateError::from)
            .and_then(|text| {
                structured_merge(
                    &text,
                    &loaded.defaults,
                    &self.options.version_key,
                    loaded.default_version,
                )
            })
            .and_then(|merged| {
                self.fs.write(path, &merged)?;
                Ok(())
            });

        match fallback {
            Ok(()) => {
                self.listener.on_config_changed(path);
                warn!(path = %path.display(), "config updated by fallback, comments were not preserved");
                MigrationOutcome::FellBack {
                    reason: primary.to_string(),
                }
            }
            Err(err) => {
                let err = MigrateError::FallbackFailed {
                    primary: primary.to_string(),
                    fallback: err.to_string(),
                };
                error!(error = %err, "config update failed, file left unchanged");
                MigrationOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
