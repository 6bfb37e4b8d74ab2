//! Small string helpers used by the segmenter and factor extractor.

/// Remove bold/heading markup (`*`, `#`) and surrounding whitespace.
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "").trim().trim_matches(|c: char| c == '*' || c == '#').trim().to_string()
}

/// Capitalize the first letter of each whitespace-separated word and
/// lower-case the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("**Market Trends:**"), "Market Trends:");
        assert_eq!(strip_markup("### Depreciation"), "Depreciation");
        assert_eq!(strip_markup("  plain  "), "plain");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mileage"), "Mileage");
        assert_eq!(title_case("MARKET   demand"), "Market Demand");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹...");
    }
}
