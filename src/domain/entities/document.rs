//! Line-oriented YAML document
//!
//! A YAML file as an ordered list of raw lines, each with its indentation
//! depth. Structure is inferred from three primitives only: indentation,
//! comment lines and blank lines. No YAML parser is involved.

use std::ops::Range;

/// Count leading space characters. Tabs are not indentation here.
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// One raw line plus its computed indentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    indent: usize,
}

impl Line {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let indent = indent_of(&raw);
        Self { raw, indent }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.trimmed().starts_with('#')
    }

    /// Neither blank nor a comment.
    pub fn is_content(&self) -> bool {
        !self.is_blank() && !self.is_comment()
    }

    /// Blank or comment - the lines that may lead a key as its description.
    pub fn is_decoration(&self) -> bool {
        self.is_blank() || self.is_comment()
    }

    /// Content line whose trimmed text starts with `key:`.
    pub fn declares(&self, key: &str) -> bool {
        if self.is_comment() {
            return false;
        }
        self.trimmed()
            .strip_prefix(key)
            .is_some_and(|rest| rest.starts_with(':'))
    }

    /// `key:` with nothing but an optional comment after the colon.
    pub fn opens_block(&self) -> bool {
        if !self.is_content() {
            return false;
        }
        self.trimmed().split_once(':').is_some_and(|(_, rest)| {
            let rest = rest.trim();
            rest.is_empty() || rest.starts_with('#')
        })
    }

    /// Block sequence entry (`- item` or a bare `-`).
    pub fn is_sequence_item(&self) -> bool {
        let t = self.trimmed();
        t == "-" || t.starts_with("- ")
    }

    /// Leading whitespace contains a tab character.
    pub fn has_tab_indent(&self) -> bool {
        self.raw
            .chars()
            .take_while(|c| c.is_whitespace())
            .any(|c| c == '\t')
    }
}

/// Ordered sequence of lines, mutated in place during one migration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into lines. `\r\n` endings are normalised away.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(Line::new).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Line::new).collect(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, raw: impl Into<String>) {
        self.lines.push(Line::new(raw));
    }

    pub fn extend<I, S>(&mut self, raws: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(raws.into_iter().map(Line::new));
    }

    /// Splice `raws` in before line `at` (`at == len()` appends).
    pub fn insert_lines<I, S>(&mut self, at: usize, raws: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let at = at.min(self.lines.len());
        self.lines
            .splice(at..at, raws.into_iter().map(Line::new))
            .for_each(drop);
    }

    pub fn remove_range(&mut self, range: Range<usize>) {
        self.lines.drain(range);
    }

    pub fn trim_trailing_blank(&mut self) {
        while self.lines.last().is_some_and(Line::is_blank) {
            self.lines.pop();
        }
    }

    /// Raw text of the lines in `range`.
    pub fn raw_lines(&self, range: Range<usize>) -> Vec<String> {
        self.lines[range]
            .iter()
            .map(|l| l.raw.clone())
            .collect()
    }

    /// Whether any non-comment line sits at depth 0 and declares `key`.
    pub fn has_top_level_key(&self, key: &str) -> bool {
        self.lines
            .iter()
            .any(|l| l.indent() == 0 && l.declares(key))
    }

    /// Index of the first line indented with a tab.
    pub fn first_tab_indented(&self) -> Option<usize> {
        self.lines.iter().position(Line::has_tab_indent)
    }

    /// Join lines with `\n`, terminating the last one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.raw);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_counts_spaces_only() {
        assert_eq!(indent_of("    key: 1"), 4);
        assert_eq!(indent_of("key: 1"), 0);
        assert_eq!(indent_of("\tkey: 1"), 0);
        assert_eq!(indent_of(""), 0);
    }

    #[test]
    fn line_predicates() {
        assert!(Line::new("   ").is_blank());
        assert!(Line::new("  # note").is_comment());
        assert!(Line::new("  key: v").is_content());
        assert!(Line::new("").is_decoration());
        assert!(!Line::new("key: v").is_decoration());
    }

    #[test]
    fn declares_requires_colon_after_key() {
        assert!(Line::new("  messages: x").declares("messages"));
        assert!(Line::new("messages:").declares("messages"));
        assert!(!Line::new("messages-extra: x").declares("messages"));
        assert!(!Line::new("# messages: x").declares("messages"));
    }

    #[test]
    fn block_headers_and_sequence_items() {
        assert!(Line::new("  worlds:").opens_block());
        assert!(Line::new("worlds:   # list").opens_block());
        assert!(!Line::new("  worlds: []").opens_block());
        assert!(!Line::new("# worlds:").opens_block());
        assert!(Line::new("  - world").is_sequence_item());
        assert!(Line::new("-").is_sequence_item());
        assert!(!Line::new("  -1: x").is_sequence_item());
    }

    #[test]
    fn tab_indentation_is_detected() {
        let doc = Document::parse("a:\n\tb: 1\n");
        assert_eq!(doc.first_tab_indented(), Some(1));
        assert!(Document::parse("a:\n  b: 1\n").first_tab_indented().is_none());
    }

    #[test]
    fn parse_and_render_normalise_line_endings() {
        let doc = Document::parse("a: 1\r\nb: 2");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.render(), "a: 1\nb: 2\n");
    }

    #[test]
    fn insert_and_remove() {
        let mut doc = Document::from_lines(["a", "d"]);
        doc.insert_lines(1, ["b", "c"]);
        assert_eq!(doc.raw_lines(0..doc.len()), vec!["a", "b", "c", "d"]);
        doc.remove_range(1..3);
        assert_eq!(doc.raw_lines(0..doc.len()), vec!["a", "d"]);
        doc.insert_lines(10, ["e"]);
        assert_eq!(doc.get(2).map(Line::raw), Some("e"));
    }

    #[test]
    fn trim_trailing_blank_lines() {
        let mut doc = Document::from_lines(["a: 1", "", "   "]);
        doc.trim_trailing_blank();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn top_level_key_ignores_nested_and_comments() {
        let doc = Document::parse("# rewards: off\nother:\n  rewards: 1\n");
        assert!(!doc.has_top_level_key("rewards"));
        assert!(doc.has_top_level_key("other"));
    }
}
