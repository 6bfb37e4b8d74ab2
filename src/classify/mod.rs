//! Per-line classification.
//!
//! Rules are checked in priority order and the first match wins:
//! bullet glyph, entity header, verdict, plain.

use crate::domain::{LineTag, Section};
use crate::segment::markers::is_bullet;
use once_cell::sync::Lazy;
use regex::Regex;

/// "Make Model 2021:" style line introducing one of the compared vehicles.
static ENTITY_YEAR_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z]+\s+[A-Z][a-zA-Z]+\s+\d{4}:").expect("valid regex")
});

const VERDICT_PREFIX: &str = "winner:";

/// Entity names supplied by the caller. Never derived from the text.
#[derive(Debug, Clone, Default)]
pub struct ClassifyContext {
    entities: Vec<String>,
}

impl ClassifyContext {
    pub fn new(entities: Vec<String>) -> Self {
        let entities = entities
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entities }
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    fn mentions_entity(&self, line: &str) -> bool {
        self.entities.iter().any(|e| line.contains(e.as_str()))
    }
}

pub fn classify(line: &str, context: &ClassifyContext) -> LineTag {
    let line = line.trim();
    if is_bullet(line) {
        LineTag::Bullet
    } else if context.mentions_entity(line) || ENTITY_YEAR_HEADER.is_match(line) {
        LineTag::EntityHeader
    } else if line.to_lowercase().starts_with(VERDICT_PREFIX) {
        LineTag::Verdict
    } else {
        LineTag::Plain
    }
}

/// Re-tag every line of every section from its source text.
pub fn classify_sections(sections: &mut [Section], context: &ClassifyContext) {
    for line in sections.iter_mut().flat_map(|s| s.content.iter_mut()) {
        line.tag = classify(&line.source, context);
    }
}
