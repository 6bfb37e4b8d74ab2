//! Factor lines embedded in report prose.

use crate::domain::FactorMap;
use crate::factors::normalize::normalize_factor_name;
use crate::segment::markers::{is_bold_heading, mentions_pricing_factors};
use once_cell::sync::Lazy;
use regex::Regex;

/// Factor-name prefixes accepted by the whole-text scan (lower-case).
pub const FACTOR_VOCABULARY: &[&str] =
    &["mileage", "condition", "market", "location", "age", "depreciation", "features"];

/// Upper-case label words that mark a summary line rather than a factor.
const NON_FACTOR_TOKENS: &[&str] = &["ESTIMATED", "MARKET", "PRICE RANGE", "SUMMARY"];

/// Shapes tried in order: dashed first, then bare.
static FACTOR_SHAPES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"^[-•*]\s*([A-Za-z][A-Za-z0-9 /&()'_\-]{0,48}?)\s*:\s*(.+)$")
            .expect("valid regex"),
        Regex::new(r"^([A-Za-z][A-Za-z0-9 /&()'_\-]{0,48}?)\s*:\s*(.+)$").expect("valid regex"),
    ]
});

/// A `Name: Description` pair found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorLine {
    pub name: String,
    pub description: String,
}

/// Match `line` against the factor shapes and normalize the result.
///
/// Descriptions of `min_description_chars` characters or fewer are rejected.
pub fn parse_factor_line(line: &str, min_description_chars: usize) -> Option<FactorLine> {
    let unbolded = line.trim().replace("**", "");
    let caps = FACTOR_SHAPES.iter().find_map(|re| re.captures(&unbolded))?;

    let raw_name = caps.get(1)?.as_str().trim();
    if NON_FACTOR_TOKENS.iter().any(|token| raw_name.contains(token)) {
        return None;
    }

    let description = caps.get(2)?.as_str().trim();
    if description.chars().count() <= min_description_chars {
        return None;
    }

    Some(FactorLine { name: normalize_factor_name(raw_name)?, description: description.to_string() })
}

/// Factor lines between a "pricing factors" marker and the next unrelated
/// bold heading. First match wins for repeated names.
pub fn scan_factor_block(text: &str, min_description_chars: usize) -> FactorMap {
    let mut factors = FactorMap::new();
    let mut lines = text.lines().map(str::trim);

    if lines.by_ref().find(|line| mentions_pricing_factors(line)).is_none() {
        return factors;
    }

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if is_bold_heading(line) && !line.to_lowercase().contains("factor") {
            break;
        }
        if let Some(found) = parse_factor_line(line, min_description_chars) {
            factors.insert_if_absent(found.name, found.description);
        }
    }

    factors
}

/// Whole-text scan restricted to the fixed factor vocabulary.
pub fn scan_factor_vocabulary(text: &str, min_description_chars: usize) -> FactorMap {
    let mut factors = FactorMap::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(found) = parse_factor_line(line, min_description_chars) else {
            continue;
        };
        let lower = found.name.to_lowercase();
        if FACTOR_VOCABULARY.iter().any(|prefix| lower.starts_with(prefix)) {
            factors.insert_if_absent(found.name, found.description);
        }
    }

    factors
}
