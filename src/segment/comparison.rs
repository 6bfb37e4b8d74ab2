//! Segmenter for the numbered car-comparison report shape.

use crate::classify::{classify_sections, ClassifyContext};
use crate::config::EngineConfig;
use crate::domain::{Line, Section};
use crate::segment::cleanup::strip_bullet;
use crate::segment::markers::LEADING_ENUMERATOR;
use crate::utils::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;

/// Chunk boundaries: a numbered bold marker or a bold final-recommendation
/// marker, anywhere in the text.
static CHUNK_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\*\*\s*\d+\.|\*\*\s*final\s+recommendations?\s*:?\s*\*\*").expect("valid regex")
});

static RECOMMENDATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)recommendation|conclusion").expect("valid regex"));

/// Split a comparison narrative on its numbered bold markers.
///
/// The first non-empty line of each chunk is the title and the rest is
/// content. Text before the first marker forms its own chunk. Lines are
/// classified against `entities` (usually the two vehicles compared).
pub fn segment_comparison(text: &str, entities: &[String], config: &EngineConfig) -> Vec<Section> {
    let mut bounds: Vec<usize> = CHUNK_MARKER.find_iter(text).map(|m| m.start()).collect();
    bounds.insert(0, 0);
    bounds.dedup();
    bounds.push(text.len());

    let mut sections = Vec::new();
    for (idx, window) in bounds.windows(2).enumerate() {
        let chunk = &text[window[0]..window[1]];
        let mut lines = chunk.lines().map(str::trim).filter(|l| !l.is_empty());

        let Some(first) = lines.next() else {
            continue;
        };
        let title = chunk_title(first).unwrap_or_else(|| format!("Section {}", idx + 1));

        let mut section = Section::new(title);
        // No noise filter here: short verdicts like "Winner: A" are content.
        for line in lines {
            section.content.push(Line::new(line, truncate_chars(strip_bullet(line), config.max_line_chars)));
        }

        if section.is_empty() {
            tracing::debug!("Skipping comparison chunk '{}' with no content", section.title);
            continue;
        }
        sections.push(section);
    }

    classify_sections(&mut sections, &ClassifyContext::new(entities.to_vec()));
    sections
}

fn chunk_title(line: &str) -> Option<String> {
    let unbolded = line.replace("**", "");
    let title = LEADING_ENUMERATOR.replace(unbolded.trim(), "");
    let title = title.trim().trim_end_matches(':').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Everything after the first line that mentions a recommendation or
/// conclusion, joined with newlines.
pub fn extract_recommendation(text: &str) -> Option<String> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| RECOMMENDATION_MARKER.is_match(line))?;

    let rest: Vec<&str> = lines.map(str::trim).filter(|l| !l.is_empty()).collect();
    if rest.is_empty() {
        None
    } else {
        Some(rest.join("\n"))
    }
}
