//! Report pipelines.
//!
//! A market report runs the segmenter and classifier over the narrative,
//! and the factor extractor and price resolver independently over the same
//! payload. A comparison report runs the comparison segmenter with the
//! compared vehicles as classification context.

use crate::config::EngineConfig;
use crate::domain::{FactorMap, PriceRange, Section};
use crate::factors::extract_factors;
use crate::input::{ComparisonInput, MarketInput};
use crate::price::{range_from_text, resolve_price};
use crate::segment::{extract_recommendation, segment, segment_comparison};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub sections: Vec<Section>,
    pub factors: FactorMap,
    pub price: PriceRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub sections: Vec<Section>,
    pub recommendation: Option<String>,
}

/// Stateless between calls; every call builds a fresh report.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: EngineConfig,
}

impl ReportFormatter {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn format_market(&self, input: &MarketInput) -> MarketReport {
        let sections = segment(&input.text, &self.config);
        let factors = extract_factors(&input.text, input.factors.as_deref(), &self.config);
        let price = self.resolve_market_price(input);

        tracing::debug!(
            sections = sections.len(),
            factors = factors.len(),
            price_source = ?price.source,
            "Formatted market report"
        );
        MarketReport { sections, factors, price }
    }

    pub fn format_comparison(&self, input: &ComparisonInput) -> ComparisonReport {
        let sections = segment_comparison(&input.text, &input.entities, &self.config);
        let recommendation = extract_recommendation(&input.text);

        tracing::debug!(sections = sections.len(), "Formatted comparison report");
        ComparisonReport { sections, recommendation }
    }

    fn resolve_market_price(&self, input: &MarketInput) -> PriceRange {
        let price = resolve_price(&input.price, &self.config);
        if price.is_available() || !self.config.scan_text_for_price {
            return price;
        }
        let scanned = range_from_text(&input.text);
        if scanned.is_available() {
            tracing::debug!("Price taken from the narrative text");
        }
        scanned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineTag, PriceSource};
    use serde_json::json;

    const NARRATIVE: &str = "\
**1. Estimated Price Range**
- Expect offers between $15,000 - $18,000 for this trim.

**Key Pricing Factors**
- Location: Urban areas command a premium
- Mileage: Slightly above average for the model year

**Market Trends**
- Compact sedans remain in popular with commuters across most regions.
";

    #[test]
    fn test_format_market_report() {
        let input = MarketInput::from_value(json!({
            "market_analysis": NARRATIVE,
            "estimated_price": "$15,000 - $18,000",
            "price_range": {"min": 0, "max": 0}
        }))
        .expect("object");

        let report = ReportFormatter::default().format_market(&input);

        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Estimated Price Range", "Market Trends"]);
        assert_eq!(report.sections[1].content[0].tag, LineTag::Bullet);

        let names: Vec<&str> = report.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Location", "Mileage"]);

        assert_eq!(report.price.source, PriceSource::DashRange);
        assert_eq!(report.price.display("n/a"), "$15,000 - $18,000");
    }

    #[test]
    fn test_market_price_falls_back_to_narrative() {
        let input = MarketInput::from_value(json!({
            "market_analysis": NARRATIVE,
            "estimated_price": "Price estimate included in analysis"
        }))
        .expect("object");

        let report = ReportFormatter::default().format_market(&input);
        assert_eq!(report.price.source, PriceSource::Narrative);
        assert_eq!(report.price.min.as_deref(), Some("$15,000"));

        let strict = ReportFormatter::new(EngineConfig {
            scan_text_for_price: false,
            ..EngineConfig::default()
        });
        assert!(!strict.format_market(&input).price.is_available());
    }

    #[test]
    fn test_structured_factors_keep_upstream_order() {
        let input = MarketInput::from_json(
            r#"{"factors": {"mileage_impact": "Upstream first value here", "condition": "Clean interior with no visible wear", "Mileage": "Upstream last value here"}}"#,
        )
        .expect("valid input");

        let report = ReportFormatter::default().format_market(&input);
        let names: Vec<&str> = report.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Mileage", "Condition"]);
        assert_eq!(report.factors.get("Mileage"), Some("Upstream last value here"));
    }

    #[test]
    fn test_empty_market_input() {
        let report = ReportFormatter::default().format_market(&MarketInput::default());
        assert!(report.sections.is_empty());
        assert!(report.factors.is_empty());
        assert!(!report.price.is_available());
    }

    #[test]
    fn test_format_comparison_report() {
        let input = ComparisonInput {
            text: "**1. Safety**\nHonda Civic: five-star overall rating\nWinner: Honda Civic\n**Final Recommendation**\nPick the Civic for families.".to_string(),
            entities: vec!["Honda Civic".to_string()],
        };
        let report = ReportFormatter::default().format_comparison(&input);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].content[0].tag, LineTag::EntityHeader);
        assert_eq!(report.recommendation.as_deref(), Some("Pick the Civic for families."));
    }
}
