//! Key and section locator
//!
//! Finds the line range of a top-level section or a dotted key inside a
//! `Document`. A range covers the leading comment block, the header line and
//! every nested line below it, with trailing blank lines trimmed.
//!
//! Nesting is inferred from indentation at a fixed two spaces per level.

use std::ops::Range;

use thiserror::Error;

use crate::domain::entities::{Document, Line};
use crate::domain::value_objects::{KeyPath, INDENT_WIDTH};

/// Locator miss. Callers recover with manual rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("section '{name}' not found")]
    SectionNotFound { name: String },

    #[error("key '{path}' not found")]
    KeyNotFound { path: KeyPath },
}

/// Line range of a located section or key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First line of the leading comment block (equals `header` when there is none)
    pub comment_start: usize,
    /// The `key:` line
    pub header: usize,
    /// Last non-blank line belonging to the entry
    pub last_line: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.comment_start..self.last_line + 1
    }
}

/// Locate a top-level section by name.
pub fn locate_section(doc: &Document, name: &str) -> Result<Span, LocateError> {
    let header = doc
        .lines()
        .iter()
        .position(|l| l.indent() == 0 && l.declares(name))
        .ok_or_else(|| LocateError::SectionNotFound {
            name: name.to_string(),
        })?;

    Ok(Span {
        comment_start: comment_start(doc, header, 0),
        header,
        last_line: body_end(doc, header, 0),
    })
}

/// Locate a key by its dotted path, descending one indentation level per segment.
pub fn locate_key(doc: &Document, path: &KeyPath) -> Result<Span, LocateError> {
    let not_found = || LocateError::KeyNotFound { path: path.clone() };
    let segments: Vec<&str> = path.segments().collect();
    let (leaf, ancestors) = segments.split_last().ok_or_else(not_found)?;

    let mut search_start = 0;
    for (depth, segment) in ancestors.iter().enumerate() {
        let header = find_declaration(doc, search_start, depth * INDENT_WIDTH, segment)
            .ok_or_else(not_found)?;
        search_start = header + 1;
    }

    let indent = ancestors.len() * INDENT_WIDTH;
    let header = find_declaration(doc, search_start, indent, leaf).ok_or_else(not_found)?;

    Ok(Span {
        comment_start: comment_start(doc, header, search_start),
        header,
        last_line: body_end(doc, header, indent),
    })
}

/// Raw lines of a top-level section, empty when absent.
pub fn extract_section(doc: &Document, name: &str) -> Vec<String> {
    locate_section(doc, name)
        .map(|span| doc.raw_lines(span.range()))
        .unwrap_or_default()
}

/// Raw lines of a key with its comments and nested value, empty when absent.
pub fn extract_key(doc: &Document, path: &KeyPath) -> Vec<String> {
    locate_key(doc, path)
        .map(|span| doc.raw_lines(span.range()))
        .unwrap_or_default()
}

/// Index right after the last content line of the named section.
///
/// New keys spliced here land inside the section, before the next top-level
/// entry. A section without children yields the line after its header.
pub fn find_section_insertion_point(doc: &Document, name: &str) -> Result<usize, LocateError> {
    let span = locate_section(doc, name)?;
    Ok(block_insertion_point(doc, span.header))
}

/// Index right after the last content line nested below `path`.
pub fn find_key_insertion_point(doc: &Document, path: &KeyPath) -> Result<usize, LocateError> {
    if path.is_top_level() {
        return find_section_insertion_point(doc, path.as_str());
    }
    let span = locate_key(doc, path)?;
    Ok(block_insertion_point(doc, span.header))
}

/// Index after the last content line indented deeper than the header at `header`.
fn block_insertion_point(doc: &Document, header: usize) -> usize {
    let lines = doc.lines();
    let own_indent = lines[header].indent();
    let mut last_child = header;
    for (i, line) in lines.iter().enumerate().skip(header + 1) {
        if !line.is_content() {
            continue;
        }
        if line.indent() <= own_indent {
            break;
        }
        last_child = i;
    }
    last_child + 1
}

/// First content line at exactly `indent` declaring `key`, searching from `start`.
///
/// The search gives up once a content line shallower than `indent` shows the
/// enclosing block has ended.
fn find_declaration(doc: &Document, start: usize, indent: usize, key: &str) -> Option<usize> {
    for (i, line) in doc.lines().iter().enumerate().skip(start) {
        if line.is_content() && line.indent() < indent {
            return None;
        }
        if line.indent() == indent && line.declares(key) {
            return Some(i);
        }
    }
    None
}

/// Start of the comment block directly above `header`, never above `floor`.
/// Leading blank lines of that block are dropped.
fn comment_start(doc: &Document, header: usize, floor: usize) -> usize {
    let lines = doc.lines();
    let mut start = header;
    while start > floor && lines[start - 1].is_decoration() {
        start -= 1;
    }
    while start < header && lines[start].is_blank() {
        start += 1;
    }
    start
}

/// Last non-blank line nested below the header at `header` (indent `indent`).
///
/// Blank lines and deeper lines belong to the body. So do `- ` items at the
/// header's own indent when the header has no inline value (an indentless
/// block sequence). A comment at or above the header's indent belongs to the
/// body only when body content follows; otherwise it leads whatever comes next.
fn body_end(doc: &Document, header: usize, indent: usize) -> usize {
    let lines = doc.lines();
    let opens_block = lines[header].opens_block();
    let mut last = header;
    let mut i = header + 1;
    while i < lines.len() {
        let line = &lines[i];
        if line.is_blank() || in_body(line, indent, opens_block) {
            last = i;
            i += 1;
            continue;
        }
        if line.is_comment() && continues_body(doc, i, indent, opens_block) {
            last = i;
            i += 1;
            continue;
        }
        break;
    }
    while last > header && lines[last].is_blank() {
        last -= 1;
    }
    last
}

fn in_body(line: &Line, indent: usize, opens_block: bool) -> bool {
    line.indent() > indent || (opens_block && line.indent() == indent && line.is_sequence_item())
}

fn continues_body(doc: &Document, from: usize, indent: usize, opens_block: bool) -> bool {
    doc.lines()[from..]
        .iter()
        .find(|l| l.is_content())
        .is_some_and(|l| in_body(l, indent, opens_block))
}
