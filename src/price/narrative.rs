//! Price amounts mentioned in report prose.

use crate::domain::{PriceRange, PriceSource};
use crate::utils::parse_amount;
use once_cell::sync::Lazy;
use regex::Regex;

const AMOUNT: &str = r"[$₹£€]\s?\d+(?:,\d+)*(?:\.\d+)?";

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(AMOUNT).expect("valid regex"));

/// `$15,000 - $18,000`, `$15,000 – $18,000`, `₹5,00,000 to ₹6,00,000`.
static EXPLICIT_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)({AMOUNT})\s*(?:-|–|to)\s*({AMOUNT})")).expect("valid regex")
});

/// Every currency-prefixed amount, in order of appearance.
pub fn price_mentions(text: &str) -> Vec<String> {
    AMOUNT_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Best-effort range from the narrative itself.
///
/// An explicit pair wins; otherwise the smallest and largest of at least two
/// mentioned amounts are used.
pub fn range_from_text(text: &str) -> PriceRange {
    if let Some(caps) = EXPLICIT_RANGE.captures(text) {
        if let (Some(min), Some(max)) = (caps.get(1), caps.get(2)) {
            return PriceRange::new(
                min.as_str().to_string(),
                max.as_str().to_string(),
                PriceSource::Narrative,
            );
        }
    }

    let mut amounts: Vec<(f64, String)> = price_mentions(text)
        .into_iter()
        .filter_map(|m| parse_amount(&m).map(|amount| (amount, m)))
        .collect();
    if amounts.len() < 2 {
        return PriceRange::unavailable();
    }

    amounts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let min = amounts.remove(0).1;
    let max = amounts.pop().map(|(_, m)| m).unwrap_or_else(|| min.clone());
    PriceRange::new(min, max, PriceSource::Narrative)
}
