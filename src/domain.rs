//! Core data types shared by the formatting components.

use serde::Serialize;

/// Classification assigned to a single content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    Bullet,
    EntityHeader,
    Verdict,
    Plain,
}

/// A content line inside a section.
///
/// `source` is the trimmed line as it appeared in the report (bullet glyphs
/// intact) and is what the classifier looks at. `text` is the cleaned form
/// meant for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub text: String,
    #[serde(skip)]
    pub source: String,
    pub tag: LineTag,
}

impl Line {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self { source: source.into(), text: text.into(), tag: LineTag::Plain }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: Vec<Line>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), content: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorEntry {
    pub name: String,
    pub description: String,
}

/// Ordered name → description mapping with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorMap {
    entries: Vec<FactorEntry>,
}

impl FactorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten entry keeps its original position.
    pub fn insert(&mut self, name: String, description: String) {
        match self.position(&name) {
            Some(idx) => self.entries[idx] = FactorEntry { name, description },
            None => self.entries.push(FactorEntry { name, description }),
        }
    }

    /// Insert only when no entry with the same name exists yet.
    pub fn insert_if_absent(&mut self, name: String, description: String) -> bool {
        if self.position(&name).is_some() {
            return false;
        }
        self.entries.push(FactorEntry { name, description });
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].description.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorEntry> {
        self.entries.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name.eq_ignore_ascii_case(name))
    }
}

/// Which resolution step produced a price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    DisplayStrings,
    NumericBounds,
    ArrayString,
    DashRange,
    Scalar,
    Narrative,
    Unavailable,
}

/// Resolved (min, max) display pair. Either both bounds are present or
/// neither is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: Option<String>,
    pub max: Option<String>,
    pub source: PriceSource,
}

impl PriceRange {
    pub fn new(min: String, max: String, source: PriceSource) -> Self {
        Self { min: Some(min), max: Some(max), source }
    }

    pub fn unavailable() -> Self {
        Self { min: None, max: None, source: PriceSource::Unavailable }
    }

    pub fn is_available(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }

    pub fn display(&self, placeholder: &str) -> String {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) if min == max => min.clone(),
            (Some(min), Some(max)) => format!("{min} - {max}"),
            _ => placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_map_overwrite_keeps_position() {
        let mut map = FactorMap::new();
        map.insert("Mileage".into(), "first".into());
        map.insert("Condition".into(), "good shape".into());
        map.insert("MILEAGE".into(), "second".into());

        let names: Vec<&str> = map.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["MILEAGE", "Condition"]);
        assert_eq!(map.get("mileage"), Some("second"));
    }

    #[test]
    fn test_factor_map_insert_if_absent_is_first_match() {
        let mut map = FactorMap::new();
        assert!(map.insert_if_absent("Location".into(), "urban".into()));
        assert!(!map.insert_if_absent("location".into(), "rural".into()));
        assert_eq!(map.get("Location"), Some("urban"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_price_display() {
        let range = PriceRange::new("$15,000".into(), "$18,000".into(), PriceSource::NumericBounds);
        assert_eq!(range.display("n/a"), "$15,000 - $18,000");

        let single = PriceRange::new("$9,500".into(), "$9,500".into(), PriceSource::Scalar);
        assert_eq!(single.display("n/a"), "$9,500");

        assert_eq!(PriceRange::unavailable().display("n/a"), "n/a");
    }
}
