//! cfgmigrate - comment-preserving YAML configuration migration
//!
//! Upgrades a user's YAML configuration file to a newer default template.
//! Missing keys are copied from the template with their comments, the user's
//! own lines and ordering are kept, and the reserved version key is moved to
//! the end and restamped. When the line-based rewrite cannot produce a valid
//! file, a structured merge takes over.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    check_release, is_newer_version, ConfigMigrator, MigrateOptions, MigrationOutcome,
    MigrationReport, PlanKind, PlannedMigration, UpdateStatus,
};
pub use config::Settings;
pub use domain::entities::{Document, StructuredConfig};
pub use domain::value_objects::{ConfigVersion, KeyPath, ReleaseVersion};
pub use error::{MigrateError, MigrateResult};
pub use infrastructure::{EmbeddedTemplate, FileTemplate, LocalFs, LoggingListener, NoopListener};
