//! Structured configuration view
//!
//! A parsed key/value tree answering semantic questions (does a key exist,
//! what is its value, is it a section). Built on `serde_yaml_ng::Value`,
//! whose mappings keep document order.

use serde_yaml_ng::{Mapping, Value};

use crate::domain::value_objects::{ConfigVersion, KeyPath};

/// Parsed YAML mapping addressed by dotted key paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredConfig {
    root: Mapping,
}

impl StructuredConfig {
    /// Parse YAML text. An empty (or comment-only) document is an empty mapping.
    pub fn parse(text: &str) -> Result<Self, serde_yaml_ng::Error> {
        let only_decoration = text.lines().all(|l| {
            let t = l.trim();
            t.is_empty() || t.starts_with('#')
        });
        if only_decoration {
            return Ok(Self::default());
        }

        match serde_yaml_ng::from_str::<Value>(text)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(<serde_yaml_ng::Error as serde::de::Error>::custom(format!(
                "expected a mapping at document root, found {}",
                kind_name(&other)
            ))),
        }
    }

    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = lookup(&self.root, first)?;
        for segment in segments {
            match current {
                Value::Mapping(map) => current = lookup(map, segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Presence check only. A key set to `null` is present.
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.get(path).is_some()
    }

    pub fn is_section(&self, path: &KeyPath) -> bool {
        matches!(self.get(path), Some(Value::Mapping(_)))
    }

    /// Every key path in document order, depth first.
    ///
    /// Sections (mapping-valued keys) are listed only when `include_sections`
    /// is set; their children are always listed.
    pub fn paths(&self, include_sections: bool) -> Vec<KeyPath> {
        let mut out = Vec::new();
        collect_paths(&self.root, None, include_sections, &mut out);
        out
    }

    pub fn leaf_paths(&self) -> Vec<KeyPath> {
        self.paths(false)
    }

    /// Version stored under `key`, or 0 when absent.
    pub fn version(&self, key: &str) -> ConfigVersion {
        ConfigVersion::from_value(self.get(&KeyPath::new(key)))
    }

    /// Set `path` to `value`, creating intermediate sections.
    ///
    /// A non-mapping value standing where a section is needed is replaced.
    pub fn set(&mut self, path: &KeyPath, value: Value) {
        let segments: Vec<&str> = path.segments().collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in parents {
            let key = existing_key(current, segment).unwrap_or_else(|| Value::String(segment.to_string()));
            let slot = current
                .entry(key)
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !slot.is_mapping() {
                *slot = Value::Mapping(Mapping::new());
            }
            let Value::Mapping(map) = slot else {
                return;
            };
            current = map;
        }

        let key = existing_key(current, leaf).unwrap_or_else(|| Value::String(leaf.to_string()));
        current.insert(key, value);
    }

    /// Set a top-level key, moving it after every other key.
    pub fn set_last(&mut self, key: &str, value: Value) {
        let old = std::mem::take(&mut self.root);
        for (k, v) in old {
            if key_segment(&k).as_deref() != Some(key) {
                self.root.insert(k, v);
            }
        }
        self.root.insert(Value::String(key.to_string()), value);
    }

    /// Serialise with the YAML library's own writer. Comments are not kept.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        if self.root.is_empty() {
            return Ok(String::new());
        }
        serde_yaml_ng::to_string(&self.root)
    }
}

/// Textual form of a mapping key as it appears in a key path.
fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn existing_key(map: &Mapping, segment: &str) -> Option<Value> {
    map.keys()
        .find(|k| key_segment(k).as_deref() == Some(segment))
        .cloned()
}

fn lookup<'a>(map: &'a Mapping, segment: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(segment) {
        return Some(value);
    }
    map.iter()
        .find(|(k, _)| key_segment(k).as_deref() == Some(segment))
        .map(|(_, v)| v)
}

fn collect_paths(
    map: &Mapping,
    prefix: Option<&KeyPath>,
    include_sections: bool,
    out: &mut Vec<KeyPath>,
) {
    for (key, value) in map {
        let Some(segment) = key_segment(key) else {
            continue;
        };
        let path = match prefix {
            Some(p) => p.child(&segment),
            None => KeyPath::new(segment),
        };
        match value {
            Value::Mapping(children) => {
                if include_sections {
                    out.push(path.clone());
                }
                collect_paths(children, Some(&path), include_sections, out);
            }
            _ => out.push(path),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# top comment
settings:
  enabled: true
  nested:
    depth: 3
messages:
  reload: "&aReloaded"
  empty:
list:
  - one
  - two
config-version: 4
"#;

    #[test]
    fn parse_and_get() {
        let cfg = StructuredConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            cfg.get(&"settings.nested.depth".into()),
            Some(&Value::Number(3.into()))
        );
        assert!(cfg.contains(&"messages.empty".into()));
        assert!(!cfg.contains(&"messages.missing".into()));
        assert!(!cfg.contains(&"list.one".into()));
    }

    #[test]
    fn sections_versus_leaves() {
        let cfg = StructuredConfig::parse(SAMPLE).unwrap();
        assert!(cfg.is_section(&"settings".into()));
        assert!(cfg.is_section(&"settings.nested".into()));
        assert!(!cfg.is_section(&"list".into()));
    }

    #[test]
    fn leaf_paths_in_document_order() {
        let cfg = StructuredConfig::parse(SAMPLE).unwrap();
        let paths: Vec<String> = cfg.leaf_paths().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "settings.enabled",
                "settings.nested.depth",
                "messages.reload",
                "messages.empty",
                "list",
                "config-version",
            ]
        );
    }

    #[test]
    fn paths_with_sections() {
        let cfg = StructuredConfig::parse("a:\n  b:\n    c: 1\n").unwrap();
        let paths: Vec<String> = cfg.paths(true).iter().map(|p| p.to_string()).collect();
        assert_eq!(paths, vec!["a", "a.b", "a.b.c"]);
    }

    #[test]
    fn version_reads_reserved_key() {
        let cfg = StructuredConfig::parse(SAMPLE).unwrap();
        assert_eq!(cfg.version("config-version"), ConfigVersion::new(4));
        assert_eq!(cfg.version("other-version"), ConfigVersion::new(0));
    }

    #[test]
    fn empty_and_comment_only_documents() {
        assert!(StructuredConfig::parse("").unwrap().leaf_paths().is_empty());
        assert!(StructuredConfig::parse("# nothing\n\n")
            .unwrap()
            .leaf_paths()
            .is_empty());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(StructuredConfig::parse("- a\n- b\n").is_err());
    }

    #[test]
    fn set_creates_and_replaces_sections() {
        let mut cfg = StructuredConfig::parse("messages: oops\n").unwrap();
        cfg.set(&"messages.update".into(), Value::String("hi".into()));
        cfg.set(&"rewards.daily.amount".into(), Value::Number(5.into()));

        assert!(cfg.is_section(&"messages".into()));
        assert_eq!(
            cfg.get(&"messages.update".into()),
            Some(&Value::String("hi".into()))
        );
        assert_eq!(
            cfg.get(&"rewards.daily.amount".into()),
            Some(&Value::Number(5.into()))
        );
    }

    #[test]
    fn numeric_keys_are_addressable() {
        let cfg = StructuredConfig::parse("levels:\n  1: bronze\n  2: silver\n").unwrap();
        assert_eq!(
            cfg.get(&"levels.2".into()),
            Some(&Value::String("silver".into()))
        );
        let reparsed = StructuredConfig::parse(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, cfg);
    }

    #[test]
    fn set_last_moves_key_to_end() {
        let mut cfg = StructuredConfig::parse("config-version: 1
a: 1
b: 2
").unwrap();
        cfg.set_last("config-version", Value::Number(2.into()));
        let keys: Vec<String> = cfg.leaf_paths().iter().map(|p| p.to_string()).collect();
        assert_eq!(keys, vec!["a", "b", "config-version"]);
        assert_eq!(cfg.version("config-version"), ConfigVersion::new(2));
    }
}
