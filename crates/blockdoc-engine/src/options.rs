//! Select-option normalization.
//!
//! Coerces whatever an upstream producer sent as selection options into the
//! uniform `{name, color}` shape. This is a best-effort boundary over
//! untrusted data and must never fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound on an option name salvaged from arbitrary input.
const MAX_NAME_LEN: usize = 30;

const DEFAULT_COLOR: &str = "default";

/// A normalized selection option for select-type fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub color: String,
}

/// Coerces a heterogeneous option list into uniform `{name, color}` pairs.
///
/// Non-sequence input yields an empty sequence, not an error.
pub fn normalize_options(raw: &Value) -> Vec<SelectOption> {
    let Value::Array(options) = raw else {
        return Vec::new();
    };
    options.iter().map(normalize_one).collect()
}

fn normalize_one(option: &Value) -> SelectOption {
    match option {
        Value::String(name) => SelectOption {
            name: name.clone(),
            color: DEFAULT_COLOR.to_string(),
        },
        Value::Object(fields) => match fields.get("name") {
            // Pre-normalized nested shape: lift the inner pair out.
            Some(Value::Object(inner)) => SelectOption {
                name: inner
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("Option")
                    .to_string(),
                color: inner
                    .get("color")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_COLOR)
                    .to_string(),
            },
            Some(Value::String(name)) => SelectOption {
                name: name.clone(),
                color: fields
                    .get("color")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_COLOR)
                    .to_string(),
            },
            _ => salvage(option),
        },
        other => salvage(other),
    }
}

/// Last resort: stringify whatever was given and bound its length.
fn salvage(option: &Value) -> SelectOption {
    SelectOption {
        name: option.to_string().chars().take(MAX_NAME_LEN).collect(),
        color: DEFAULT_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn opt(name: &str, color: &str) -> SelectOption {
        SelectOption {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn non_sequence_input_yields_empty() {
        assert_eq!(normalize_options(&json!("a, b")), vec![]);
        assert_eq!(normalize_options(&json!({"name": "x"})), vec![]);
        assert_eq!(normalize_options(&Value::Null), vec![]);
    }

    #[test]
    fn bare_strings_get_the_default_color() {
        assert_eq!(
            normalize_options(&json!(["Urgent", "Later"])),
            vec![opt("Urgent", "default"), opt("Later", "default")]
        );
    }

    #[test]
    fn nested_name_records_are_lifted() {
        assert_eq!(
            normalize_options(&json!([{"name": {"name": "High", "color": "red"}}])),
            vec![opt("High", "red")]
        );
        assert_eq!(
            normalize_options(&json!([{"name": {"name": "Low"}}])),
            vec![opt("Low", "default")]
        );
        assert_eq!(
            normalize_options(&json!([{"name": {"color": "red"}}])),
            vec![opt("Option", "red")]
        );
    }

    #[test]
    fn plain_records_keep_their_color() {
        assert_eq!(
            normalize_options(&json!([{"name": "Done", "color": "green"}])),
            vec![opt("Done", "green")]
        );
        assert_eq!(
            normalize_options(&json!([{"name": "Done"}])),
            vec![opt("Done", "default")]
        );
    }

    #[test]
    fn anything_else_is_stringified_and_bounded() {
        let normalized = normalize_options(&json!([42, true, {"label": "no name field"}]));
        assert_eq!(normalized[0], opt("42", "default"));
        assert_eq!(normalized[1], opt("true", "default"));
        assert_eq!(normalized[2].color, "default");
        assert!(normalized[2].name.chars().count() <= 30);
    }

    #[test]
    fn normalizing_is_idempotent() {
        let first = normalize_options(&json!(["a", {"name": "b", "color": "blue"}, 7]));
        let as_json = serde_json::to_value(&first).expect("options serialize");
        let second = normalize_options(&as_json);
        assert_eq!(first, second);
    }
}
