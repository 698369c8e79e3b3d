//! YAML key highlighting for read-only display
//!
//! Wraps the mapping key at the start of each line in a styled span so the
//! web UI can render queue definitions inside a `<pre>` block. This is a
//! line-oriented text transform, not a YAML parser: malformed documents are
//! never rejected and nothing is HTML-escaped.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// CSS class applied to highlighted keys
pub const DEFAULT_KEY_CLASS: &str = "yaml-key";

/// Whitespace as browsers define `\s`: the BOM counts, NEL does not
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Leading indentation, then a run of non-space non-colon characters, then a colon
fn key_pattern() -> String {
    format!(r"^([{ws}]*)([^:{ws}]+):", ws = JS_WHITESPACE)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HighlightError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Compiled key pattern plus the span class to emit
#[derive(Debug, Clone)]
pub struct YamlHighlighter {
    key_pattern: Regex,
    key_class: String,
}

impl Default for YamlHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlHighlighter {
    pub fn new() -> Self {
        Self::with_class(DEFAULT_KEY_CLASS)
    }

    pub fn with_class(key_class: &str) -> Self {
        Self {
            key_pattern: Regex::new(&key_pattern()).expect("key pattern is a valid regex"),
            key_class: key_class.to_string(),
        }
    }

    pub fn key_class(&self) -> &str {
        &self.key_class
    }

    /// Format a whole document, preserving line count and order
    pub fn format(&self, yaml: &str) -> String {
        yaml.split('\n')
            .map(|line| self.format_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format raw file bytes, rejecting anything that is not UTF-8 text
    pub fn format_bytes(&self, bytes: &[u8]) -> Result<String, HighlightError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            HighlightError::InvalidInput(format!("YAML content is not UTF-8: {}", e))
        })?;
        Ok(self.format(text))
    }

    /// Format a JSON-supplied value, which must be a string
    pub fn format_value(&self, value: &serde_json::Value) -> Result<String, HighlightError> {
        match value {
            serde_json::Value::String(text) => Ok(self.format(text)),
            serde_json::Value::Null => Err(HighlightError::InvalidInput(
                "YAML content is missing".to_string(),
            )),
            other => Err(HighlightError::InvalidInput(format!(
                "expected a string, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn format_line(&self, line: &str) -> String {
        let Some(captures) = self.key_pattern.captures(line) else {
            return line.to_string();
        };

        let indent = &captures[1];
        let key = &captures[2];
        // Group 0 always ends at the colon, so the rest starts right after it
        let rest = &line[captures[0].len()..];

        format!(
            "{}<span class=\"{}\">{}</span>:{}",
            indent, self.key_class, key, rest
        )
    }
}

fn shared() -> &'static YamlHighlighter {
    static HIGHLIGHTER: OnceLock<YamlHighlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(YamlHighlighter::new)
}

/// Highlight keys with the default `yaml-key` class
pub fn format_yaml(yaml: &str) -> String {
    shared().format(yaml)
}

pub fn format_yaml_bytes(bytes: &[u8]) -> Result<String, HighlightError> {
    shared().format_bytes(bytes)
}

pub fn format_yaml_value(value: &serde_json::Value) -> Result<String, HighlightError> {
    shared().format_value(value)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        assert_eq!(
            format_yaml("key: value"),
            "<span class=\"yaml-key\">key</span>: value"
        );
    }

    #[test]
    fn test_nested_key_keeps_indent_outside_span() {
        assert_eq!(
            format_yaml("  nested: 1"),
            "  <span class=\"yaml-key\">nested</span>: 1"
        );
    }

    #[test]
    fn test_document_with_trailing_newline() {
        let input = "a: 1\nb:\n  c: 2\n";
        let expected = "<span class=\"yaml-key\">a</span>: 1\n\
                        <span class=\"yaml-key\">b</span>:\n  \
                        <span class=\"yaml-key\">c</span>: 2\n";
        assert_eq!(format_yaml(input), expected);
    }

    #[test]
    fn test_line_count_preserved() {
        let inputs = [
            "",
            "\n",
            "a: 1",
            "a: 1\n\n\nb: 2",
            "- item\n- other\n",
            "text without keys\r\nmore: stuff\r\n",
        ];
        for input in inputs {
            let output = format_yaml(input);
            assert_eq!(
                output.split('\n').count(),
                input.split('\n').count(),
                "line count changed for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_yaml(""), "");
    }

    #[test]
    fn test_non_key_lines_unchanged() {
        assert_eq!(format_yaml("- item"), "- item");
        assert_eq!(format_yaml("  continuation text"), "  continuation text");
        assert_eq!(format_yaml("   "), "   ");
    }

    #[test]
    fn test_comment_with_space_is_not_a_key() {
        // The key run stops at the space after '#', so no colon follows it
        assert_eq!(
            format_yaml("# comment: not a key"),
            "# comment: not a key"
        );
    }

    #[test]
    fn test_comment_without_space_is_highlighted() {
        assert_eq!(
            format_yaml("#comment: x"),
            "<span class=\"yaml-key\">#comment</span>: x"
        );
    }

    #[test]
    fn test_rest_of_line_kept_verbatim() {
        assert_eq!(
            format_yaml("url: http://host:8080/path  # note"),
            "<span class=\"yaml-key\">url</span>: http://host:8080/path  # note"
        );
    }

    #[test]
    fn test_list_item_key_is_not_highlighted() {
        // "-" is followed by a space, so the run never reaches a colon
        assert_eq!(format_yaml("- name: foo"), "- name: foo");
    }

    #[test]
    fn test_tabs_and_crlf() {
        assert_eq!(
            format_yaml("\tkey: v\r"),
            "\t<span class=\"yaml-key\">key</span>: v\r"
        );
    }

    #[test]
    fn test_byte_order_mark_stays_outside_span() {
        assert_eq!(
            format_yaml("\u{feff}name: x"),
            "\u{feff}<span class=\"yaml-key\">name</span>: x"
        );
    }

    #[test]
    fn test_next_line_char_is_part_of_key() {
        assert_eq!(
            format_yaml("\u{85}key: v"),
            "<span class=\"yaml-key\">\u{85}key</span>: v"
        );
    }

    #[test]
    fn test_unicode_spaces_are_indent() {
        assert_eq!(
            format_yaml("\u{a0}\u{3000}key: v"),
            "\u{a0}\u{3000}<span class=\"yaml-key\">key</span>: v"
        );
        // Space inside the key run ends it before the colon
        assert_eq!(format_yaml("a\u{2003}b: v"), "a\u{2003}b: v");
    }

    #[test]
    fn test_non_ascii_key() {
        assert_eq!(
            format_yaml("キュー: 1"),
            "<span class=\"yaml-key\">キュー</span>: 1"
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        assert_eq!(
            format_yaml("<b>: <i>x</i>"),
            "<span class=\"yaml-key\"><b></span>: <i>x</i>"
        );
    }

    #[test]
    fn test_custom_class() {
        let highlighter = YamlHighlighter::with_class("key");
        assert_eq!(highlighter.key_class(), "key");
        assert_eq!(highlighter.format("a: 1"), "<span class=\"key\">a</span>: 1");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(
            format_yaml_bytes(b"a: 1").unwrap(),
            "<span class=\"yaml-key\">a</span>: 1"
        );
        assert_eq!(
            format_yaml_bytes(b"\xef\xbb\xbfa: 1").unwrap(),
            "\u{feff}<span class=\"yaml-key\">a</span>: 1"
        );
        assert!(matches!(
            format_yaml_bytes(&[0xff, 0xfe, b':']),
            Err(HighlightError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_format_value_requires_string() {
        assert_eq!(
            format_yaml_value(&json!("a: 1")).unwrap(),
            "<span class=\"yaml-key\">a</span>: 1"
        );

        let err = format_yaml_value(&json!(42)).unwrap_err();
        assert_eq!(
            err,
            HighlightError::InvalidInput("expected a string, got number".to_string())
        );
        assert!(format_yaml_value(&json!(null)).is_err());
        assert!(format_yaml_value(&json!({"a": 1})).is_err());
    }
}
