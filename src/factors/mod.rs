//! Pricing factor extraction.
//!
//! Sources are tried in priority order and the first non-empty one wins:
//!
//! 1. the structured factor object sent alongside the report,
//! 2. factor lines inside the "Key Pricing Factors" block of the text,
//! 3. factor lines anywhere in the text whose name is in a fixed vocabulary.

use crate::config::EngineConfig;
use crate::domain::FactorMap;

pub mod normalize;
pub mod scan;

pub use normalize::{normalize_factor_name, normalize_factor_value};
pub use scan::{parse_factor_line, scan_factor_block, scan_factor_vocabulary};

/// Build the factor mapping for a market report.
///
/// A non-empty `structured` object is authoritative and the text is not
/// scanned at all, even if the normalized result turns out empty.
pub fn extract_factors(
    text: &str,
    structured: Option<&[(String, String)]>,
    config: &EngineConfig,
) -> FactorMap {
    if let Some(entries) = structured.filter(|entries| !entries.is_empty()) {
        let factors = from_structured(entries);
        tracing::debug!(
            "Using {} structured factor(s) ({} supplied)",
            factors.len(),
            entries.len()
        );
        return factors;
    }

    let block = scan_factor_block(text, config.min_line_chars);
    if !block.is_empty() {
        tracing::debug!("Found {} factor(s) in the pricing factors block", block.len());
        return block;
    }

    let scanned = scan_factor_vocabulary(text, config.min_line_chars);
    tracing::debug!("Vocabulary scan found {} factor(s)", scanned.len());
    scanned
}

/// Normalize a structured factor object. Later keys overwrite earlier ones
/// that normalize to the same name.
pub fn from_structured(entries: &[(String, String)]) -> FactorMap {
    let mut factors = FactorMap::new();
    for (key, value) in entries {
        let Some(name) = normalize_factor_name(key) else {
            continue;
        };
        if let Some(description) = normalize_factor_value(key, &name, value) {
            factors.insert(name, description);
        }
    }
    factors
}
