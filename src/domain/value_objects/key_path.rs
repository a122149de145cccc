//! Key Path Value Object
//!
//! A dot-separated identifier naming an entry in a YAML mapping tree,
//! e.g. `messages.update-available`.

use std::fmt;

use serde::Serialize;

/// Number of spaces per nesting level in the line model.
///
/// Documents indented differently are outside what the locator handles.
pub const INDENT_WIDTH: usize = 2;

/// Dot-separated path to a configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let joined = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(".");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments minus one (`a` is depth 0, `a.b` depth 1).
    pub fn depth(&self) -> usize {
        self.0.matches('.').count()
    }

    /// Indentation the key line is expected to have.
    pub fn expected_indent(&self) -> usize {
        self.depth() * INDENT_WIDTH
    }

    /// First segment - the top-level section owning this key.
    pub fn section(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Last segment.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    pub fn is_top_level(&self) -> bool {
        !self.0.contains('.')
    }

    pub fn parent(&self) -> Option<KeyPath> {
        self.0.rfind('.').map(|idx| KeyPath(self.0[..idx].to_string()))
    }

    /// Strict ancestors from the section down to the direct parent.
    pub fn ancestors(&self) -> Vec<KeyPath> {
        let segments: Vec<&str> = self.segments().collect();
        (1..segments.len())
            .map(|n| KeyPath::from_segments(&segments[..n]))
            .collect()
    }

    pub fn child(&self, segment: &str) -> KeyPath {
        KeyPath(format!("{}.{}", self.0, segment))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_and_indent() {
        let path = KeyPath::new("messages.update-available");
        assert_eq!(path.depth(), 1);
        assert_eq!(path.expected_indent(), 2);
        assert_eq!(KeyPath::new("a.b.c").expected_indent(), 4);
        assert_eq!(KeyPath::new("debug").depth(), 0);
    }

    #[test]
    fn section_and_leaf() {
        let path = KeyPath::new("rewards.daily.amount");
        assert_eq!(path.section(), "rewards");
        assert_eq!(path.leaf(), "amount");
        assert!(!path.is_top_level());
        assert!(KeyPath::new("debug").is_top_level());
    }

    #[test]
    fn ancestors_from_section_down() {
        let path = KeyPath::new("a.b.c");
        assert_eq!(
            path.ancestors(),
            vec![KeyPath::new("a"), KeyPath::new("a.b")]
        );
        assert!(KeyPath::new("a").ancestors().is_empty());
    }

    #[test]
    fn parent_and_child() {
        let path = KeyPath::new("a.b");
        assert_eq!(path.parent(), Some(KeyPath::new("a")));
        assert_eq!(KeyPath::new("a").parent(), None);
        assert_eq!(KeyPath::new("a").child("b"), path);
    }
}
