//! Merge planner and rewriter
//!
//! Brings a user `Document` up to date with the template without touching
//! the user's own lines:
//! - a section missing entirely is copied from the template and appended
//! - keys missing from an existing section are spliced in after its last child
//! - the version block is moved to the end and restamped
//!
//! Template lines are copied verbatim (comments included) whenever the
//! locator finds them; otherwise the value is rendered.

use std::cmp::Reverse;

use serde::Serialize;
use serde_yaml_ng::Value;
use tracing::{debug, info};

use crate::domain::entities::{Document, StructuredConfig};
use crate::domain::services::locator::{
    extract_key, extract_section, find_key_insertion_point, LocateError,
};
use crate::domain::services::renderer::render_entry;
use crate::domain::services::version_stamp::restamp;
use crate::domain::value_objects::{ConfigVersion, KeyPath};

/// Missing keys sharing a top-level section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    pub section: String,
    pub keys: Vec<KeyPath>,
}

/// Group keys by their first segment, keeping first-seen section order.
pub fn group_by_section(missing: &[KeyPath]) -> Vec<SectionGroup> {
    let mut groups: Vec<SectionGroup> = Vec::new();
    for key in missing {
        match groups.iter_mut().find(|g| g.section == key.section()) {
            Some(group) => group.keys.push(key.clone()),
            None => groups.push(SectionGroup {
                section: key.section().to_string(),
                keys: vec![key.clone()],
            }),
        }
    }
    groups
}

/// How a section was changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Whole section copied from the template
    Appended,
    /// Whole section rendered from default values
    AppendedRendered,
    /// Keys inserted into an existing section
    Spliced,
}

/// One section-level decision, reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionChange {
    pub section: String,
    pub kind: ChangeKind,
    /// Keys this change covers
    pub keys: Vec<KeyPath>,
    /// Keys that had to be rendered instead of copied
    pub rendered: Vec<KeyPath>,
}

/// Lines to insert at one index of the original document
#[derive(Debug)]
struct Splice {
    at: usize,
    anchor_depth: usize,
    seq: usize,
    lines: Vec<String>,
}

/// Rewrites a user document against a template
pub struct MergePlanner<'a> {
    template: &'a Document,
    defaults: &'a StructuredConfig,
    version_key: &'a str,
}

impl<'a> MergePlanner<'a> {
    pub fn new(template: &'a Document, defaults: &'a StructuredConfig, version_key: &'a str) -> Self {
        Self {
            template,
            defaults,
            version_key,
        }
    }

    /// Full primary path: merge missing keys, then restamp the version block.
    pub fn migrate(
        &self,
        doc: &mut Document,
        user: &StructuredConfig,
        missing: &[KeyPath],
        version: ConfigVersion,
    ) -> Result<Vec<SectionChange>, LocateError> {
        let changes = self.merge(doc, user, missing)?;
        restamp(doc, self.template, self.version_key, version);
        Ok(changes)
    }

    /// Insert every missing key into `doc`.
    ///
    /// Insertion points are computed against the document as it was before
    /// any change, so splices never shift each other's anchors.
    pub fn merge(
        &self,
        doc: &mut Document,
        user: &StructuredConfig,
        missing: &[KeyPath],
    ) -> Result<Vec<SectionChange>, LocateError> {
        let mut changes = Vec::new();
        let mut splices: Vec<Splice> = Vec::new();
        let mut appends: Vec<Vec<String>> = Vec::new();

        for group in group_by_section(missing) {
            let in_file = doc.has_top_level_key(&group.section);
            info!(section = %group.section, in_file, "section presence");

            if in_file {
                let change = self.plan_splices(doc, user, &group, &mut splices)?;
                changes.push(change);
            } else {
                let (lines, change) = self.section_lines(&group);
                info!(
                    section = %group.section,
                    lines = lines.len(),
                    "appending section"
                );
                appends.push(lines);
                changes.push(change);
            }
        }

        splices.sort_by_key(|s| (s.at, Reverse(s.anchor_depth), s.seq));
        for splice in splices.into_iter().rev() {
            doc.insert_lines(splice.at, splice.lines);
        }
        for lines in appends {
            if !doc.is_empty() {
                doc.push("");
            }
            doc.extend(lines);
        }

        Ok(changes)
    }

    /// Lines for a section absent from the user file.
    fn section_lines(&self, group: &SectionGroup) -> (Vec<String>, SectionChange) {
        let verbatim = extract_section(self.template, &group.section);
        if !verbatim.is_empty() {
            return (
                verbatim,
                SectionChange {
                    section: group.section.clone(),
                    kind: ChangeKind::Appended,
                    keys: group.keys.clone(),
                    rendered: Vec::new(),
                },
            );
        }

        info!(section = %group.section, "section not in template text, rendering it");
        let mut partial = StructuredConfig::default();
        for key in &group.keys {
            partial.set(key, self.default_value(key));
        }
        let value = partial
            .get(&KeyPath::new(group.section.as_str()))
            .cloned()
            .unwrap_or(Value::Null);
        (
            render_entry(&group.section, &value, 0),
            SectionChange {
                section: group.section.clone(),
                kind: ChangeKind::AppendedRendered,
                keys: group.keys.clone(),
                rendered: group.keys.clone(),
            },
        )
    }

    /// Queue splices for the missing keys of a section the user already has.
    fn plan_splices(
        &self,
        doc: &Document,
        user: &StructuredConfig,
        group: &SectionGroup,
        splices: &mut Vec<Splice>,
    ) -> Result<SectionChange, LocateError> {
        let mut rendered = Vec::new();

        for unit in promote(user, &group.keys) {
            let anchor = unit.parent().unwrap_or_else(|| unit.clone());
            let at = find_key_insertion_point(doc, &anchor)?;
            info!(key = %unit, anchor = %anchor, at, "inserting key");

            let mut lines = extract_key(self.template, &unit);
            if lines.is_empty() {
                debug!(key = %unit, "key not in template text, rendering it");
                lines = render_entry(unit.leaf(), &self.default_value(&unit), unit.expected_indent());
                rendered.push(unit.clone());
            }

            let anchor_depth = anchor.depth();
            // Keys sharing an anchor form one contiguous buffer
            match splices
                .iter_mut()
                .find(|s| s.at == at && s.anchor_depth == anchor_depth)
            {
                Some(existing) => existing.lines.extend(lines),
                None => {
                    let seq = splices.len();
                    splices.push(Splice {
                        at,
                        anchor_depth,
                        seq,
                        lines,
                    });
                }
            }
        }

        Ok(SectionChange {
            section: group.section.clone(),
            kind: ChangeKind::Spliced,
            keys: group.keys.clone(),
            rendered,
        })
    }

    fn default_value(&self, key: &KeyPath) -> Value {
        self.defaults.get(key).cloned().unwrap_or(Value::Null)
    }
}

/// Replace each key by its highest ancestor (below the section) that the user
/// lacks, so a missing mapping is copied once as a whole. Order is kept and
/// duplicates are dropped.
fn promote(user: &StructuredConfig, keys: &[KeyPath]) -> Vec<KeyPath> {
    let mut units: Vec<KeyPath> = Vec::new();
    for key in keys {
        let unit = key
            .ancestors()
            .into_iter()
            .skip(1)
            .find(|ancestor| !user.contains(ancestor))
            .unwrap_or_else(|| key.clone());
        if !units.contains(&unit) {
            units.push(unit);
        }
    }
    units
}
