//! ChangeListener port - notified when the configuration file was rewritten.

use std::path::Path;

/// Receiver of the "config changed" signal
///
/// Hosts use this to reload any cached view of the configuration.
pub trait ChangeListener {
    /// Called once after the file at `path` was persisted.
    fn on_config_changed(&self, path: &Path);
}

impl<F> ChangeListener for F
where
    F: Fn(&Path),
{
    fn on_config_changed(&self, path: &Path) {
        self(path)
    }
}
