//! Value renderer
//!
//! Renders default values as YAML lines when they cannot be copied verbatim
//! from the template. Output only has to be valid YAML; it does not try to
//! match the template's quoting or number formatting.

use serde_yaml_ng::Value;

use crate::domain::value_objects::INDENT_WIDTH;

/// Render the text that follows `key: ` for a leaf value.
///
/// Lists render as a newline followed by one `- "item"` entry per element,
/// indented one level deeper than `key_indent`.
pub fn render_value(value: &Value, key_indent: usize) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::String(s) => quote(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Sequence(items) if items.is_empty() => "[]".to_string(),
        Value::Sequence(items) => {
            let pad = " ".repeat(key_indent + INDENT_WIDTH);
            let mut out = String::from("\n");
            for item in items {
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&render_item(item));
                out.push('\n');
            }
            out.trim_end().to_string()
        }
        Value::Mapping(map) if map.is_empty() => "{}".to_string(),
        Value::Mapping(_) => flow(value),
        Value::Tagged(_) => serde_yaml_ng::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "\"\"".to_string()),
    }
}

/// Render `key: value` at `indent`, split into lines.
///
/// Non-empty mappings become a header followed by their children one level deeper.
pub fn render_entry(key: &str, value: &Value, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            let mut lines = vec![format!("{pad}{key}:")];
            for (child_key, child) in map {
                lines.extend(render_entry(&key_text(child_key), child, indent + INDENT_WIDTH));
            }
            lines
        }
        _ => format!("{pad}{key}: {}", render_value(value, indent))
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect(),
    }
}

/// Double-quoted YAML string with escapes for quotes, backslashes and control characters.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn render_item(item: &Value) -> String {
    match item {
        Value::String(s) => quote(s),
        Value::Bool(b) => quote(&b.to_string()),
        Value::Number(n) => quote(&n.to_string()),
        Value::Null => "\"\"".to_string(),
        other => flow(other),
    }
}

/// Single-line flow rendering. JSON is a subset of YAML.
fn flow(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => flow(key),
    }
}
