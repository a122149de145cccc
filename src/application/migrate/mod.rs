//! Migrate Module
//!
//! Brings a user configuration file up to date with the shipped template.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`MigrateOptions`)
//! - `result` - Result types (`MigrationReport`, `MigrationOutcome`, `PlannedMigration`)
//! - `use_case` - Core use case logic (`ConfigMigrator`)
//! - `fallback` - Lossy structured merge used when the line rewrite fails
//!
//! ## Usage
//!
//! ```ignore
//! use cfgmigrate::application::migrate::{ConfigMigrator, MigrateOptions};
//! use cfgmigrate::infrastructure::{FileTemplate, LocalFs};
//!
//! let migrator = ConfigMigrator::new(LocalFs::new(), FileTemplate::new("default.yml"), MigrateOptions::default());
//! let report = migrator.migrate(Path::new("config.yml"));
//! ```

mod fallback;
mod options;
mod result;
mod use_case;

pub use fallback::structured_merge;
pub use options::MigrateOptions;
pub use result::{MigrationOutcome, MigrationReport, PlanKind, PlannedMigration};
pub use use_case::ConfigMigrator;
