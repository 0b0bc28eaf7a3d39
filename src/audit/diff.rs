//! Diff generation for audit logging
//!
//! Summarises which top-level fields changed between two JSON values.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let truncated: String = s.chars().take(47).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_change() {
        let before = json!({"name": "Ada", "phone": "5551234567"});
        let after = json!({"name": "Ada", "phone": "5559999999"});

        assert_eq!(
            generate_diff(&before, &after),
            Some("phone: \"5551234567\" -> \"5559999999\"".to_string())
        );
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"name": "Ada", "notes": "old"});
        let after = json!({"name": "Ada", "email": "ada@example.com"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("notes: \"old\" -> (removed)"));
        assert!(diff.contains("email: (added) -> \"ada@example.com\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Ada"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_long_string_truncation() {
        let long = "x".repeat(80);
        let formatted = format_value(&json!(long));
        assert!(formatted.ends_with("...\""));
        assert_eq!(formatted.len(), 47 + 5);
    }
}
