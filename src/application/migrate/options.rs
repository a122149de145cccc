//! Migrate Options

use crate::domain::value_objects::DEFAULT_VERSION_KEY;

/// Options for the migrate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Reserved top-level key holding the integer config version
    pub version_key: String,
    /// Run the structured fallback when the line rewrite fails
    pub fallback: bool,
    /// Re-parse and check the rewritten text before it is written
    pub verify: bool,
}

impl MigrateOptions {
    pub fn new() -> Self {
        Self {
            version_key: DEFAULT_VERSION_KEY.to_string(),
            fallback: true,
            verify: true,
        }
    }

    pub fn with_version_key(mut self, key: impl Into<String>) -> Self {
        self.version_key = key.into();
        self
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    pub fn with_verify(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self::new()
    }
}
