//! Decoding of the report service's JSON responses.
//!
//! Only the envelope is validated here: the document must be a JSON object.
//! Missing or oddly typed fields are tolerated and become empty input for
//! the formatting components.

use serde_json::{Map, Value};
use thiserror::Error;

pub mod details;

pub use details::parse_details;

/// Keys that may hold the market narrative, in lookup order.
const MARKET_TEXT_KEYS: &[&str] = &["market_analysis", "analysis", "report"];
const COMPARISON_TEXT_KEYS: &[&str] = &["comparison", "report"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// A market-analysis response: narrative, optional structured factors and
/// the price fields (kept as the raw object for the resolver).
#[derive(Debug, Clone, Default)]
pub struct MarketInput {
    pub text: String,
    pub factors: Option<Vec<(String, String)>>,
    pub price: Value,
}

impl MarketInput {
    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, InputError> {
        let object = expect_object(&value)?;
        let text = first_text(object, MARKET_TEXT_KEYS);
        let factors = object.get("factors").and_then(structured_factors);
        Ok(Self { text, factors, price: value })
    }
}

/// A comparison response plus the names of the compared items.
#[derive(Debug, Clone, Default)]
pub struct ComparisonInput {
    pub text: String,
    pub entities: Vec<String>,
}

impl ComparisonInput {
    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, InputError> {
        let object = expect_object(&value)?;
        let text = first_text(object, COMPARISON_TEXT_KEYS);
        let entities = object
            .get("entities")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default();
        Ok(Self { text, entities })
    }
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, InputError> {
    value.as_object().ok_or_else(|| InputError::NotAnObject(json_kind(value)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn first_text(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

/// Name → description pairs from a factor object. Scalar values are turned
/// into text; nested values are skipped. `None` when not an object.
fn structured_factors(value: &Value) -> Option<Vec<(String, String)>> {
    let object = value.as_object()?;
    let entries = object
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect();
    Some(entries)
}
