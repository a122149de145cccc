//! Migrate Result
//!
//! Report and plan types for migrate operations.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::SectionChange;
use crate::domain::value_objects::{ConfigVersion, KeyPath};

/// What a migration run ended with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// No user file exists; nothing was done
    NoUserFile,
    /// Nothing missing and version current
    UpToDate,
    /// Only the version block was rewritten
    VersionStamped,
    /// Missing keys were merged in with comments preserved
    Rewritten { changes: Vec<SectionChange> },
    /// The line rewrite failed and the structured fallback was written
    FellBack { reason: String },
    /// Migration did not start; the file is untouched
    Aborted { reason: String },
    /// Both paths failed; the file is untouched
    Failed { reason: String },
}

/// Result of one migration run
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub path: PathBuf,
    pub user_version: ConfigVersion,
    pub default_version: ConfigVersion,
    pub missing_keys: Vec<KeyPath>,
    pub outcome: MigrationOutcome,
}

impl MigrationReport {
    pub fn new(path: impl Into<PathBuf>, outcome: MigrationOutcome) -> Self {
        Self {
            path: path.into(),
            user_version: ConfigVersion::default(),
            default_version: ConfigVersion::default(),
            missing_keys: Vec::new(),
            outcome,
        }
    }

    /// Whether the file was written (the "config changed" signal)
    pub fn changed(&self) -> bool {
        matches!(
            self.outcome,
            MigrationOutcome::VersionStamped
                | MigrationOutcome::Rewritten { .. }
                | MigrationOutcome::FellBack { .. }
        )
    }

    pub fn is_success(&self) -> bool {
        !matches!(
            self.outcome,
            MigrationOutcome::Aborted { .. } | MigrationOutcome::Failed { .. }
        )
    }
}

/// Which path a planned migration takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    VersionOnly,
    Rewrite,
    Fallback,
}

/// A migration computed without writing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMigration {
    pub kind: PlanKind,
    pub user_version: ConfigVersion,
    pub default_version: ConfigVersion,
    pub missing_keys: Vec<KeyPath>,
    pub original: String,
    pub updated: String,
}
