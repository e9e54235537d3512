//! Canonical text form of a value.
//!
//! Mapping keys are emitted in sorted order and every nesting level is
//! indented by two spaces, so two values render to the same lines exactly
//! when they are structurally equal.

use crate::value::Value;

const INDENT: &str = "  ";

/// Renders a value to its canonical lines.
pub fn canonical_lines(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    render(value, 0, "", "", &mut lines);
    lines
}

/// Renders a value to its canonical form as a single string.
pub fn to_canonical_string(value: &Value) -> String {
    canonical_lines(value).join("\n")
}

fn render(value: &Value, depth: usize, lead: &str, suffix: &str, out: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    match value {
        Value::Map(map) if !map.is_empty() => {
            out.push(format!("{indent}{lead}{{"));
            for (key, child) in map.iter() {
                let child_lead = format!("{}: ", render_key(key));
                render(child, depth + 1, &child_lead, ",", out);
            }
            out.push(format!("{indent}}}{suffix}"));
        }
        Value::List(items) if !items.is_empty() => {
            out.push(format!("{indent}{lead}["));
            for item in items {
                render(item, depth + 1, "", ",", out);
            }
            out.push(format!("{indent}]{suffix}"));
        }
        _ => out.push(format!("{indent}{lead}{}{suffix}", render_scalar(value))),
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
}

fn render_key(key: &str) -> String {
    if is_bare_key(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s))
}

/// Renders a scalar, or an empty container, on a single line.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(f) => format!("{:?}", f),
        Value::String(s) => quote(s),
        Value::List(items) if items.is_empty() => "[]".to_string(),
        Value::Map(map) if map.is_empty() => "{}".to_string(),
        // Non-empty containers never reach here from `render`.
        Value::List(_) => "[...]".to_string(),
        Value::Map(_) => "{...}".to_string(),
    }
}
