//! Config Version Value Object
//!
//! The integer stored under the reserved version key of a configuration file.

use std::fmt;

use serde::Serialize;
use serde_yaml_ng::Value;

/// Key under which the version is stored when nothing else is configured
pub const DEFAULT_VERSION_KEY: &str = "config-version";

/// Integer configuration schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ConfigVersion(i64);

impl ConfigVersion {
    pub fn new(version: i64) -> Self {
        Self(version)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Read a version from a YAML value.
    ///
    /// Integers and integer-looking strings are accepted. Anything else
    /// (missing key, float, text) reads as version 0.
    pub fn from_value(value: Option<&Value>) -> Self {
        let parsed = match value {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        Self(parsed.unwrap_or(0))
    }

    pub fn to_value(self) -> Value {
        Value::Number(self.0.into())
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ConfigVersion {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
