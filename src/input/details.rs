//! "Key: value" vehicle detail lines, as returned by the detail extractor.

const NOT_SPECIFIED: &str = "not specified";

/// Parse `Key: value` lines into `(snake_case_key, value)` pairs.
///
/// Empty and "Not specified" values are dropped. Keys keep the position of
/// their first occurrence; a repeated key overwrites the value.
pub fn parse_details(text: &str) -> Vec<(String, String)> {
    let mut details: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key
            .trim()
            .trim_start_matches(|c: char| c == '-' || c == '*' || c == '•')
            .trim()
            .to_lowercase()
            .replace(' ', "_");
        let value = value.trim();
        if key.is_empty() || value.is_empty() || value.eq_ignore_ascii_case(NOT_SPECIFIED) {
            continue;
        }

        match details.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => details.push((key, value.to_string())),
        }
    }

    details
}
