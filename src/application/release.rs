//! Release check
//!
//! Compares the running version against the latest published release tag.
//! Fetching the tag is the host's job; this only decides.

use serde::Serialize;
use tracing::info;

use crate::domain::value_objects::ReleaseVersion;

/// Immutable result of one release check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStatus {
    pub current: ReleaseVersion,
    pub latest: ReleaseVersion,
    pub update_available: bool,
}

/// Whether `remote` is newer than `current`. Either may carry a `v` prefix.
pub fn is_newer_version(remote: &str, current: &str) -> bool {
    ReleaseVersion::parse(remote).is_newer_than(&ReleaseVersion::parse(current))
}

pub fn check_release(current: &str, latest_tag: &str) -> UpdateStatus {
    let current = ReleaseVersion::parse(current);
    let latest = ReleaseVersion::parse(latest_tag);
    let update_available = latest.is_newer_than(&current);
    if update_available {
        info!(%current, %latest, "new release available");
    }
    UpdateStatus {
        current,
        latest,
        update_available,
    }
}
