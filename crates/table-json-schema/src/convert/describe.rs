//! Human-readable property descriptions.

use rand::Rng;
use serde_json::{Map, Value};

/// Describe a property, drawing a random example for numeric bounds.
pub fn describe(property: &Map<String, Value>, field: &str) -> String {
    describe_with(property, field, |max| {
        if max == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..max)
        }
    })
}

/// Describe a property with a caller-supplied example generator.
///
/// `example` receives the numeric `maximum` and returns a value in
/// `[0, maximum)`; it is only called when the property has no `default`.
pub fn describe_with<F>(property: &Map<String, Value>, field: &str, example: F) -> String
where
    F: FnOnce(u64) -> u64,
{
    let Some((type_name, optional)) = resolved_type(property) else {
        return match property.get("enum") {
            Some(Value::Array(members)) => format!(
                "Enum list type, one of - {}",
                members.iter().map(render).collect::<Vec<_>>().join(", ")
            ),
            _ => String::new(),
        };
    };

    if type_name == "object" {
        return String::new();
    }

    let numeric = matches!(type_name, "integer" | "number");
    let word = if numeric {
        "Numeric".to_string()
    } else {
        capitalize(type_name)
    };
    let word = if optional {
        format!("Optional {}", word.to_lowercase())
    } else {
        word
    };

    let mut description = format!("{} type value for field {}", word, field);

    if numeric {
        if let Some(maximum) = property.get("maximum") {
            let sample = match property.get("default") {
                Some(default) => render(default),
                None => example(upper_bound(maximum)).to_string(),
            };
            description.push_str(&format!(" e.g. {}", sample));
        }
    } else if type_name == "string" {
        if let Some(pattern) = property.get("pattern") {
            description.push_str(&format!(" with pattern {} ", render(pattern)));
        }
    }

    description
}

/// The property's non-null type name and whether null is also allowed.
fn resolved_type(property: &Map<String, Value>) -> Option<(&str, bool)> {
    match property.get("type")? {
        Value::String(name) => Some((name.as_str(), false)),
        Value::Array(types) => {
            let optional = types.iter().any(|t| t == "null");
            types
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null")
                .map(|name| (name, optional))
        }
        _ => None,
    }
}

/// Float maxima are truncated; values past `u64::MAX` saturate.
fn upper_bound(maximum: &Value) -> u64 {
    maximum
        .as_u64()
        .or_else(|| maximum.as_f64().filter(|m| *m > 0.0).map(|m| m as u64))
        .unwrap_or(0)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
