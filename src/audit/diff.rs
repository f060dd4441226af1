//! Diff generation for audit logging
//!
//! Summarizes the top-level field changes between two JSON values.

use serde_json::Value;

/// Describe what changed between `before` and `after`
///
/// Returns `None` when nothing changed. Object values are compared field by
/// field; anything else is shown as a single `old -> new` pair.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    if before == after {
        return None;
    }

    let (Value::Object(old), Value::Object(new)) = (before, after) else {
        return Some(format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();
    for (key, old_val) in old {
        match new.get(key) {
            Some(new_val) if new_val == old_val => {}
            Some(new_val) => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(old_val),
                format_value(new_val)
            )),
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(old_val))),
        }
    }
    for (key, new_val) in new.iter().filter(|(k, _)| !old.contains_key(*k)) {
        changes.push(format!("{}: (added) -> {}", key, format_value(new_val)));
    }

    Some(changes.join(", "))
}

/// Format a JSON value for a one-line summary
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}
