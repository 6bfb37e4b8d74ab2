//! Section segmentation for narrative reports.
//!
//! [`segment`] handles the loose market-analysis shape (numbered bold
//! headers, colon-terminated lines, keyword headers). [`segment_comparison`]
//! handles the narrower numbered-comparison shape.

use crate::classify::{classify_sections, ClassifyContext};
use crate::config::EngineConfig;
use crate::domain::{Line, Section};
use crate::utils::strip_markup;

pub mod cleanup;
pub mod comparison;
pub mod markers;

pub use cleanup::{clean_line, strip_bullet};
pub use comparison::{extract_recommendation, segment_comparison};

/// A section being filled. Suppressed sections collect lines but are never
/// emitted; the factor extractor reads that region instead.
struct OpenSection {
    section: Section,
    suppressed: bool,
}

impl OpenSection {
    fn from_header(line: &str, ordinal: usize) -> Self {
        let title = header_title(line).unwrap_or_else(|| format!("Section {ordinal}"));
        let suppressed = markers::mentions_pricing_factors(&title);
        Self { section: Section::new(title), suppressed }
    }

    fn push(&mut self, line: &str, config: &EngineConfig) {
        if let Some(text) = clean_line(line, config) {
            self.section.content.push(Line::new(line, text));
        }
    }
}

/// Split raw report text into titled sections, in input order.
///
/// Never fails: text with no recognizable header yields a single fallback
/// section, and empty text yields no sections.
pub fn segment(text: &str, config: &EngineConfig) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<OpenSection> = None;
    let mut preamble = 0usize;
    let mut headers_seen = 0usize;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // Factor entries inside a withheld block stay with that block even
        // when they mention a section keyword.
        let in_suppressed = current.as_ref().is_some_and(|open| open.suppressed);
        let factor_entry = in_suppressed && markers::is_keyword_only_entry(line, config);

        if !factor_entry && markers::is_header_candidate(line, config) {
            flush(current.take(), &mut sections);
            headers_seen += 1;
            current = Some(OpenSection::from_header(line, headers_seen));
            continue;
        }

        match current.as_mut() {
            Some(open) => open.push(line, config),
            None => preamble += 1,
        }
    }
    flush(current.take(), &mut sections);

    if preamble > 0 && !sections.is_empty() {
        tracing::debug!("Dropped {} preamble line(s) before the first header", preamble);
    }

    if sections.is_empty() {
        if let Some(section) = fallback_section(text, config) {
            tracing::debug!(
                "No usable headers among {} candidate(s); emitting fallback section",
                headers_seen
            );
            sections.push(section);
        }
    }

    classify_sections(&mut sections, &ClassifyContext::default());
    sections
}

fn flush(open: Option<OpenSection>, sections: &mut Vec<Section>) {
    let Some(open) = open else {
        return;
    };
    if open.suppressed {
        tracing::debug!(
            "Withholding '{}' ({} line(s)) for the factor extractor",
            open.section.title,
            open.section.content.len()
        );
        return;
    }
    if !open.section.is_empty() {
        sections.push(open.section);
    }
}

/// Display title of a header line: bullet and markup stripped, enumerator
/// removed, trailing colon dropped. `None` when nothing is left.
pub fn header_title(line: &str) -> Option<String> {
    let stripped = strip_markup(strip_bullet(line.trim()));
    let without_enum = markers::LEADING_ENUMERATOR.replace(&stripped, "");
    let title = strip_markup(without_enum.trim().trim_end_matches(':'));
    let title = title.trim_end_matches(':').trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

fn fallback_section(text: &str, config: &EngineConfig) -> Option<Section> {
    if text.trim().is_empty() {
        return None;
    }

    let mut section = Section::new(config.fallback_title.clone());
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty()
            || markers::is_key_value_line(line)
            || markers::mentions_pricing_factors(line)
        {
            continue;
        }
        if let Some(cleaned) = clean_line(line, config) {
            section.content.push(Line::new(line, cleaned));
        }
    }

    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}
