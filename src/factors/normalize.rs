//! Factor name and description normalization.

use crate::segment::markers::BULLET_GLYPHS;
use crate::utils::title_case;

/// Trailing words that carry no meaning in a factor name.
const BOILERPLATE_SUFFIXES: &[&str] = &["impact", "assessment", "factor", "factors"];

/// `"mileage_impact"` → `"Mileage"`, `"market-demand factors"` → `"Market Demand"`.
pub fn normalize_factor_name(raw: &str) -> Option<String> {
    let spaced: String = raw
        .replace("**", "")
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    let titled = title_case(spaced.trim().trim_matches(|c: char| BULLET_GLYPHS.contains(&c)));
    let mut words: Vec<&str> = titled.split_whitespace().collect();
    while words.len() > 1
        && words.last().is_some_and(|w| BOILERPLATE_SUFFIXES.contains(&w.to_lowercase().as_str()))
    {
        words.pop();
    }

    let name = words.join(" ");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Strip markup, a leading bullet, and an echo of the factor label
/// (`"Mileage: High mileage..."` under the key `mileage`).
pub fn normalize_factor_value(raw_key: &str, name: &str, value: &str) -> Option<String> {
    let unbolded = value.replace("**", "");
    let mut text = unbolded.trim();
    text = text.strip_prefix(BULLET_GLYPHS).unwrap_or(text).trim_start();

    if let Some((label, rest)) = text.split_once(':') {
        let label = label.trim().to_lowercase().replace(['_', '-'], " ");
        let key = raw_key.trim().to_lowercase().replace(['_', '-'], " ");
        if label == name.to_lowercase() || label == key {
            text = rest.trim();
        }
    }

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
