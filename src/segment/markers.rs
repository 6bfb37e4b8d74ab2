//! Header, bullet and key/value predicates.
//!
//! The report text has no grammar, only loose conventions. Every convention
//! the segmenter and factor extractor rely on is a named predicate here so the
//! heuristics can be tuned without touching the control flow.

use crate::config::EngineConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Glyphs that introduce a bullet item.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '*'];

/// Substrings that mark a line as a section header (matched lower-case).
pub const SECTION_KEYWORDS: &[&str] = &[
    "analysis",
    "trends",
    "demand",
    "supply",
    "factors",
    "depreciation",
    "location",
    "condition",
    "recommendations",
    "impact",
];

/// `**1.` / `**12.` at the start of a line.
pub static NUMBERED_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*\s*\d+\.").expect("valid regex"));

/// A line that is nothing but a "Final Recommendation" marker, with optional
/// bold/heading markup and trailing colon.
pub static FINAL_RECOMMENDATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[#*\s]*(?:final|overall)\s+recommendations?[*:\s]*$").expect("valid regex")
});

/// Leading enumerator such as `1.` or `2)`.
pub static LEADING_ENUMERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*").expect("valid regex"));

/// `Name: Description` with an optional leading bullet glyph.
pub static KEY_VALUE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[•*\-]?\s*[A-Za-z][A-Za-z0-9 /&()'_\-]{0,48}:\s*\S").expect("valid regex")
});

/// A bold-wrapped heading line (`**Market Trends**`, `**Tips:**`) or a
/// markdown `#` heading.
pub static BOLD_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*\*[^*]+\*\*:?|\*\*[^*]+:\*\*|#{1,6}\s+\S.*)$").expect("valid regex")
});

pub fn is_numbered_bold(line: &str) -> bool {
    NUMBERED_BOLD.is_match(line.trim())
}

pub fn is_final_recommendation(line: &str) -> bool {
    FINAL_RECOMMENDATION.is_match(line.trim())
}

pub fn is_short_colon_line(line: &str, config: &EngineConfig) -> bool {
    let trimmed = line.trim().trim_end_matches('*').trim_end();
    trimmed.ends_with(':') && trimmed.chars().count() < config.header_max_chars
}

/// Any line mentioning a section keyword is a header. Bullet items and long
/// lines can be excluded through `keyword_headers_skip_bullets` and
/// `keyword_header_max_chars`.
pub fn has_section_keyword(line: &str, config: &EngineConfig) -> bool {
    let trimmed = line.trim();
    if config.keyword_headers_skip_bullets && is_bullet(trimmed) && !trimmed.starts_with("**") {
        return false;
    }
    if config.keyword_header_max_chars.is_some_and(|max| trimmed.chars().count() >= max) {
        return false;
    }
    let lower = trimmed.to_lowercase();
    SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

pub fn is_header_candidate(line: &str, config: &EngineConfig) -> bool {
    is_numbered_bold(line)
        || is_final_recommendation(line)
        || is_short_colon_line(line, config)
        || has_section_keyword(line, config)
}

/// A `Name: Description` entry that is a header candidate only through the
/// keyword rule, e.g. "Location: Urban areas command a premium".
pub fn is_keyword_only_entry(line: &str, config: &EngineConfig) -> bool {
    is_key_value_line(line)
        && !is_numbered_bold(line)
        && !is_final_recommendation(line)
        && !is_short_colon_line(line, config)
}

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_GLYPHS)
}

pub fn mentions_pricing_factors(text: &str) -> bool {
    text.to_lowercase().contains("pricing factor")
}

pub fn is_key_value_line(line: &str) -> bool {
    KEY_VALUE_LINE.is_match(&line.trim().replace("**", ""))
}

pub fn is_bold_heading(line: &str) -> bool {
    BOLD_HEADING.is_match(line.trim())
}
