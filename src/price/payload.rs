//! Tolerant view over a heterogeneous price payload.
//!
//! Every accessor returns `None` for absent, null or wrongly typed fields so
//! that a broken field only disqualifies the resolution step that needs it.

use serde_json::Value;

/// Key pairs that may carry preformatted display strings.
const DISPLAY_KEYS: &[(&str, &str)] = &[
    ("min_display", "max_display"),
    ("min_formatted", "max_formatted"),
    ("min_price_display", "max_price_display"),
];

/// Tokens that upstream templating sometimes glues onto the front of a value.
const ARTIFACT_PREFIXES: &[&str] = &["undefined", "null", "NaN", "None"];

#[derive(Debug, Clone, PartialEq)]
pub enum EstimatedPrice {
    Text(String),
    Amount(f64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricePayload {
    pub min_display: Option<String>,
    pub max_display: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub estimated_price: Option<EstimatedPrice>,
}

impl PricePayload {
    pub fn from_value(value: &Value) -> Self {
        let range = value.get("price_range").filter(|v| v.is_object());
        let scopes: Vec<&Value> = range.into_iter().chain(std::iter::once(value)).collect();

        let (min_display, max_display) = scopes
            .iter()
            .flat_map(|scope| DISPLAY_KEYS.iter().map(move |keys| (scope, keys)))
            .find_map(|(scope, (min_key, max_key))| {
                let min = display_field(scope, min_key)?;
                let max = display_field(scope, max_key)?;
                Some((min, max))
            })
            .map_or((None, None), |(min, max)| (Some(min), Some(max)));

        let min = range
            .and_then(|r| number_field(r, "min"))
            .or_else(|| number_field(value, "min_price"));
        let max = range
            .and_then(|r| number_field(r, "max"))
            .or_else(|| number_field(value, "max_price"));

        let estimated_price = match value.get("estimated_price") {
            Some(Value::String(s)) if !s.trim().is_empty() => {
                Some(EstimatedPrice::Text(s.trim().to_string()))
            }
            Some(Value::Number(n)) => n.as_f64().map(EstimatedPrice::Amount),
            _ => None,
        };

        Self { min_display, max_display, min, max, estimated_price }
    }
}

fn display_field(scope: &Value, key: &str) -> Option<String> {
    let raw = scope.get(key)?.as_str()?;
    let cleaned = strip_artifacts(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Numbers, or strings that read as a plain number (`"15000"`, `"15,000"`).
fn number_field(scope: &Value, key: &str) -> Option<f64> {
    let number = match scope.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Remove stray templating tokens stuck to the front of a display string.
pub fn strip_artifacts(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let stripped = ARTIFACT_PREFIXES
            .iter()
            .find_map(|token| text.strip_prefix(token))
            .map(str::trim_start);
        match stripped {
            Some(rest) if rest.len() < text.len() => text = rest,
            _ => return text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_nested_range() {
        let payload = PricePayload::from_value(&json!({
            "price_range": {"min": 15000, "max": "18,000"}
        }));
        assert_eq!(payload.min, Some(15_000.0));
        assert_eq!(payload.max, Some(18_000.0));
        assert_eq!(payload.min_display, None);
    }

    #[test]
    fn test_reads_display_strings_from_either_scope() {
        let nested = PricePayload::from_value(&json!({
            "price_range": {"min_display": "$14,500", "max_display": "$16,000"}
        }));
        assert_eq!(nested.min_display.as_deref(), Some("$14,500"));

        let top = PricePayload::from_value(&json!({
            "min_price_display": "undefined₹26,00,000",
            "max_price_display": "₹30,00,000"
        }));
        assert_eq!(top.min_display.as_deref(), Some("₹26,00,000"));
        assert_eq!(top.max_display.as_deref(), Some("₹30,00,000"));
    }

    #[test]
    fn test_tolerates_wrong_types() {
        let payload = PricePayload::from_value(&json!({
            "price_range": "15000-18000",
            "min_display": 12,
            "estimated_price": null
        }));
        assert_eq!(payload, PricePayload::default());

        assert_eq!(PricePayload::from_value(&json!([1, 2])), PricePayload::default());
    }

    #[test]
    fn test_strip_artifacts() {
        assert_eq!(strip_artifacts("undefined$15,000"), "$15,000");
        assert_eq!(strip_artifacts("null NaN ₹5,00,000"), "₹5,00,000");
        assert_eq!(strip_artifacts("$9,000"), "$9,000");
        assert_eq!(strip_artifacts("null"), "");
    }
}
