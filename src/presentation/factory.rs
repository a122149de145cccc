//! Use case factory
//!
//! Creates the migrator with its production dependencies.

use std::path::Path;

use crate::application::{ConfigMigrator, MigrateOptions};
use crate::infrastructure::{FileTemplate, LocalFs, LoggingListener};

/// Migrator over the local disk with a template file and a logging listener
pub fn create_migrator(
    template: &Path,
    options: MigrateOptions,
) -> ConfigMigrator<LocalFs, FileTemplate, LoggingListener> {
    ConfigMigrator::new(LocalFs::new(), FileTemplate::new(template), options)
        .with_listener(LoggingListener)
}
