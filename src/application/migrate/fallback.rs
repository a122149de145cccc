//! Fallback structured merge
//!
//! Sets every missing default and the version on the parsed tree and
//! serialises it with the YAML library. Comments and layout are lost; the
//! version key is moved to the end.

use serde_yaml_ng::Value;
use tracing::debug;

use crate::domain::entities::StructuredConfig;
use crate::domain::services::missing_keys;
use crate::domain::value_objects::ConfigVersion;
use crate::error::MigrateResult;

/// Merge `defaults` into `user_text` on the structured view.
pub fn structured_merge(
    user_text: &str,
    defaults: &StructuredConfig,
    version_key: &str,
    version: ConfigVersion,
) -> MigrateResult<String> {
    let mut user = StructuredConfig::parse(user_text)?;

    for key in missing_keys(&user, defaults, version_key) {
        let value = defaults.get(&key).cloned().unwrap_or(Value::Null);
        debug!(key = %key, "fallback: setting default");
        user.set(&key, value);
    }
    user.set_last(version_key, version.to_value());

    Ok(user.to_yaml()?)
}
