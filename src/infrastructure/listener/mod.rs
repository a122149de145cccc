//! Change listeners
//!
//! Implementations of the ChangeListener port.

use std::path::Path;

use tracing::info;

use crate::domain::ports::ChangeListener;

/// Ignores change notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ChangeListener for NoopListener {
    fn on_config_changed(&self, _path: &Path) {}
}

/// Logs that the configuration should be reloaded
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingListener;

impl ChangeListener for LoggingListener {
    fn on_config_changed(&self, path: &Path) {
        info!(path = %path.display(), "configuration changed, reload required");
    }
}
