//! Version stamp manager
//!
//! The reserved version key lives in a trailing block: the `key: N` line plus
//! the comment and blank lines directly above it. Migration removes the user's
//! block and appends the template's block with the new number.

use crate::domain::entities::Document;
use crate::domain::services::locator::extract_section;
use crate::domain::value_objects::ConfigVersion;

/// Remove the last `key:` line and the comment/blank run directly above it.
///
/// Returns whether a block was found.
pub fn strip_version_block(doc: &mut Document, key: &str) -> bool {
    let Some(version_line) = doc.lines().iter().rposition(|l| l.declares(key)) else {
        return false;
    };

    let mut block_start = version_line;
    while block_start > 0 && doc.lines()[block_start - 1].is_decoration() {
        block_start -= 1;
    }

    doc.remove_range(block_start..version_line + 1);
    true
}

/// The template's version block with its value replaced by `version`.
///
/// Falls back to a single `key: N` line when the template has no block.
pub fn build_version_block(template: &Document, key: &str, version: ConfigVersion) -> Vec<String> {
    let mut block = extract_section(template, key);
    if block.is_empty() {
        return vec![format!("{key}: {version}")];
    }

    let marker = format!("{key}:");
    for line in &mut block {
        if let Some(pos) = line.find(&marker) {
            if line.trim_start().starts_with(&marker) {
                *line = format!("{}{marker} {version}", &line[..pos]);
            }
        }
    }
    block
}

/// Strip the old block, trim trailing blanks, then append one blank line and the new block.
pub fn restamp(doc: &mut Document, template: &Document, key: &str, version: ConfigVersion) {
    strip_version_block(doc, key);
    doc.trim_trailing_blank();
    if !doc.is_empty() {
        doc.push("");
    }
    doc.extend(build_version_block(template, key, version));
}
