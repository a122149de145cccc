//! Missing-key detector
//!
//! Compares the leaf keys of the default template against a user
//! configuration. Only presence counts: a key whose value has a different
//! type in the user file is not missing.

use crate::domain::entities::StructuredConfig;
use crate::domain::value_objects::KeyPath;

/// Leaf paths of `defaults` that `user` does not contain, in template order.
///
/// Sections and the reserved `version_key` are never reported.
pub fn missing_keys(
    user: &StructuredConfig,
    defaults: &StructuredConfig,
    version_key: &str,
) -> Vec<KeyPath> {
    defaults
        .leaf_paths()
        .into_iter()
        .filter(|path| path.as_str() != version_key)
        .filter(|path| !user.contains(path))
        .collect()
}
