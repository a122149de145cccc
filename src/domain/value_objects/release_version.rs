//! Release Version Value Object
//!
//! A dotted release version as published in release tags (`v1.4.2`).

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Release version with the tag prefix removed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Parse a version or tag name. A single leading `v` is dropped.
    pub fn parse(tag: &str) -> Self {
        let trimmed = tag.trim();
        Self(trimmed.strip_prefix('v').unwrap_or(trimmed).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn part(&self, index: usize) -> Option<u64> {
        match self.0.split('.').nth(index) {
            Some(part) => part.parse().ok(),
            None => Some(0),
        }
    }

    /// Whether `self` is a newer release than `current`.
    ///
    /// Parts are compared left to right with missing parts treated as 0, and
    /// the first differing part decides. Reaching a non-numeric part before
    /// that makes any difference between the two strings count as newer.
    pub fn is_newer_than(&self, current: &ReleaseVersion) -> bool {
        let len = self.0.split('.').count().max(current.0.split('.').count());
        for i in 0..len {
            let (Some(r), Some(l)) = (self.part(i), current.part(i)) else {
                return self.0 != current.0;
            };
            match r.cmp(&l) {
                Ordering::Greater => return true,
                Ordering::Less => return false,
                Ordering::Equal => {}
            }
        }
        false
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newer(remote: &str, current: &str) -> bool {
        ReleaseVersion::parse(remote).is_newer_than(&ReleaseVersion::parse(current))
    }

    #[test]
    fn strips_tag_prefix() {
        assert_eq!(ReleaseVersion::parse("v2.1.0").as_str(), "2.1.0");
        assert_eq!(ReleaseVersion::parse("2.1.0").as_str(), "2.1.0");
    }

    #[test]
    fn numeric_comparison() {
        assert!(newer("1.10.0", "1.9.3"));
        assert!(!newer("1.9.3", "1.10.0"));
        assert!(!newer("1.2.0", "1.2.0"));
    }

    #[test]
    fn missing_parts_are_zero() {
        assert!(!newer("1.2", "1.2.0"));
        assert!(newer("1.2.1", "1.2"));
    }

    #[test]
    fn first_differing_part_decides_before_any_suffix() {
        assert!(newer("1.3.0-beta", "1.2.0"));
        assert!(!newer("1.2.0", "1.3.0-beta"));
        assert!(!newer("1.1.beta", "1.2"));
        assert!(newer("1.2", "1.1.beta"));
    }

    #[test]
    fn non_numeric_part_reached_falls_back_to_inequality() {
        assert!(newer("1.3.0-beta", "1.3.0"));
        assert!(newer("1.3.0", "1.3.0-rc1"));
        assert!(!newer("1.3.0-beta", "v1.3.0-beta"));
    }
}
