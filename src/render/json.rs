//! JSON rendering.

use anyhow::Result;
use serde::Serialize;

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::domain::{FactorMap, Line, LineTag, Section};
    use serde_json::{json, Value};

    #[test]
    fn test_sections_serialize_without_source() {
        let mut section = Section::new("Market Trends");
        let mut line = Line::new("- Demand is steady this quarter", "Demand is steady this quarter");
        line.tag = LineTag::Bullet;
        section.content.push(line);

        let rendered = render_json(&vec![section]).expect("json");
        let parsed: Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(
            parsed,
            json!([{"title": "Market Trends", "content": [{"text": "Demand is steady this quarter", "tag": "bullet"}]}])
        );
    }

    #[test]
    fn test_factor_map_serializes_as_list() {
        let mut factors = FactorMap::new();
        factors.insert("Mileage".into(), "High mileage reduces value".into());
        let parsed: Value = serde_json::from_str(&render_json(&factors).expect("json")).expect("parse");
        assert_eq!(parsed, json!([{"name": "Mileage", "description": "High mileage reduces value"}]));
    }
}
