// SPDX-License-Identifier: Apache-2.0

//! Indented text rendering of a parsed tree, used by the `print_tree` binary.

use jsontree::Value;

/// How nesting is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Markers added per nesting level.
    pub indent: usize,
    pub marker: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            marker: '-',
        }
    }
}

/// Renders `tree` one entry per line.
///
/// Every line starts with `indent * (depth + 1)` markers. Object entries
/// show `key : value`, array entries just the value. A nested
/// container shows its label alone and its entries on the following lines,
/// one level deeper. A root that is not a container renders as `NONE`.
pub fn render_tree(tree: &Value, options: &RenderOptions) -> String {
    let mut out = String::new();
    if tree.is_object() || tree.is_array() {
        render_entries(tree, 1, options, &mut out);
    } else {
        out.push_str("NONE\n");
    }
    out
}

fn render_entries(container: &Value, level: usize, options: &RenderOptions, out: &mut String) {
    match container {
        Value::Object(entries) => {
            for (key, value) in entries {
                push_prefix(level, options, out);
                out.push(' ');
                out.push_str(key);
                out.push_str(" :");
                render_value(value, level, options, out);
            }
        }
        Value::Array(items) => {
            for value in items {
                push_prefix(level, options, out);
                render_value(value, level, options, out);
            }
        }
        _ => {}
    }
}

fn render_value(value: &Value, level: usize, options: &RenderOptions, out: &mut String) {
    match value {
        Value::Object(_) | Value::Array(_) => {
            out.push('\n');
            render_entries(value, level + 1, options, out);
        }
        Value::Null => push_scalar("null", out),
        Value::Bool(b) => push_scalar(if *b { "true" } else { "false" }, out),
        Value::Number(n) => push_scalar(&n.to_string(), out),
        Value::String(s) => push_scalar(s, out),
    }
}

fn push_scalar(text: &str, out: &mut String) {
    out.push(' ');
    out.push_str(text);
    out.push('\n');
}

fn push_prefix(level: usize, options: &RenderOptions, out: &mut String) {
    out.extend(std::iter::repeat(options.marker).take(options.indent * level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn render(doc: &str) -> String {
        render_tree(&jsontree::parse(doc).unwrap(), &RenderOptions::default())
    }

    #[test]
    fn test_flat_object() {
        assert_eq!(
            render(r#"{"name": "Ivan", "age": 25, "legal": false, "nick": null}"#),
            "-- age : 25\n-- legal : false\n-- name : Ivan\n-- nick : null\n"
        );
    }

    #[test]
    fn test_nested_containers() {
        let got = render(r#"{"marks": [4, 5.5], "address": {"city": "Moscow"}}"#);
        assert_eq!(
            got,
            "-- address :\n---- city : Moscow\n-- marks :\n---- 4\n---- 5.5\n"
        );
    }

    #[test]
    fn test_array_of_arrays() {
        assert_eq!(render("[[1], []]"), "--\n---- 1\n--\n");
    }

    #[test]
    fn test_scalar_lines() {
        assert_eq!(
            render(r#"["a b", 1.5, 7, true, null]"#),
            "-- a b\n-- 1.5\n-- 7\n-- true\n-- null\n"
        );
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(render("{}"), "");
    }

    #[test]
    fn test_non_container_root() {
        let options = RenderOptions::default();
        assert_eq!(render_tree(&jsontree::Value::Null, &options), "NONE\n");
    }

    #[test]
    fn test_custom_marker() {
        let tree = jsontree::parse("[true, [false]]").unwrap();
        let options = RenderOptions {
            indent: 1,
            marker: '*',
        };
        assert_eq!(render_tree(&tree, &options), "* true\n*\n** false\n");
    }
}
