//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text manipulation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConfigMigrator` - Brings a user config up to date with the template
//! - `check_release` - Decides whether a published release is newer

pub mod migrate;
pub mod release;

pub use migrate::{
    structured_merge, ConfigMigrator, MigrateOptions, MigrationOutcome, MigrationReport, PlanKind,
    PlannedMigration,
};
pub use release::{check_release, is_newer_version, UpdateStatus};
