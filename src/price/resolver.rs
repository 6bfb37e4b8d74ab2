//! Price resolution state machine.

use crate::domain::{PriceRange, PriceSource};
use crate::price::currency::Currency;
use crate::price::payload::{EstimatedPrice, PricePayload};
use crate::utils::parse_amount;
use once_cell::sync::Lazy;
use regex::Regex;

/// Quoted entries of an array-encoded string: `['₹28,00,000', "₹26,00,000"]`.
static QUOTED_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'([^']*)'|"([^"]*)""#).expect("valid regex"));

const RANGE_SEPARATOR: &str = " - ";

/// Resolution steps, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStep {
    DisplayStrings,
    NumericBounds,
    ArrayString,
    DashRange,
    Scalar,
}

impl ResolutionStep {
    pub const ORDER: [ResolutionStep; 5] = [
        ResolutionStep::DisplayStrings,
        ResolutionStep::NumericBounds,
        ResolutionStep::ArrayString,
        ResolutionStep::DashRange,
        ResolutionStep::Scalar,
    ];

    fn source(&self) -> PriceSource {
        match self {
            ResolutionStep::DisplayStrings => PriceSource::DisplayStrings,
            ResolutionStep::NumericBounds => PriceSource::NumericBounds,
            ResolutionStep::ArrayString => PriceSource::ArrayString,
            ResolutionStep::DashRange => PriceSource::DashRange,
            ResolutionStep::Scalar => PriceSource::Scalar,
        }
    }

    /// `(min, max)` display values, or `None` when this step does not apply.
    fn attempt(&self, payload: &PricePayload, threshold: f64) -> Option<(String, String)> {
        match self {
            ResolutionStep::DisplayStrings => {
                Some((payload.min_display.clone()?, payload.max_display.clone()?))
            }
            ResolutionStep::NumericBounds => {
                let (min, max) = (payload.min?, payload.max?);
                if min <= 0.0 || max <= 0.0 {
                    return None;
                }
                let currency = Currency::infer(min.max(max), threshold);
                Some((currency.format(min), currency.format(max)))
            }
            ResolutionStep::ArrayString => parse_array_string(estimated_text(payload)?),
            ResolutionStep::DashRange => {
                let (min, max) = estimated_text(payload)?.split_once(RANGE_SEPARATOR)?;
                let (min, max) = (min.trim(), max.trim());
                if min.is_empty() || max.is_empty() {
                    return None;
                }
                Some((min.to_string(), max.to_string()))
            }
            ResolutionStep::Scalar => match payload.estimated_price.as_ref()? {
                EstimatedPrice::Text(text) if text.chars().any(|c| c.is_ascii_digit()) => {
                    Some((text.clone(), text.clone()))
                }
                EstimatedPrice::Amount(amount) if *amount > 0.0 => {
                    let formatted = Currency::infer(*amount, threshold).format(*amount);
                    Some((formatted.clone(), formatted))
                }
                _ => None,
            },
        }
    }
}

fn estimated_text(payload: &PricePayload) -> Option<&str> {
    match payload.estimated_price.as_ref()? {
        EstimatedPrice::Text(text) => Some(text.as_str()),
        EstimatedPrice::Amount(_) => None,
    }
}

/// Smallest and largest entry of a bracketed list of quoted amounts, each
/// kept in its original written form.
fn parse_array_string(text: &str) -> Option<(String, String)> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;

    let mut entries: Vec<(f64, &str)> = QUOTED_ENTRY
        .captures_iter(inner)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim())
        .filter_map(|entry| parse_amount(entry).map(|amount| (amount, entry)))
        .collect();

    entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let (_, min) = entries.first()?;
    let (_, max) = entries.last()?;
    Some((min.to_string(), max.to_string()))
}

/// Resolve a payload into a display range. Never fails; an unusable payload
/// yields [`PriceRange::unavailable`].
pub fn resolve(payload: &PricePayload, threshold: f64) -> PriceRange {
    for step in ResolutionStep::ORDER {
        if let Some((min, max)) = step.attempt(payload, threshold) {
            tracing::debug!("Price resolved by {:?}: {} / {}", step, min, max);
            return PriceRange::new(min, max, step.source());
        }
    }
    tracing::debug!("No usable price in payload");
    PriceRange::unavailable()
}
