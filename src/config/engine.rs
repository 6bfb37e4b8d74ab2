//! Tunable thresholds for the formatting heuristics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lines with this many characters or fewer are dropped as noise.
    pub min_line_chars: usize,
    /// Longer lines are cut to this many characters plus an ellipsis.
    pub max_line_chars: usize,
    /// A colon-terminated line counts as a header only below this length.
    pub header_max_chars: usize,
    /// When set, a keyword line counts as a header only below this length.
    pub keyword_header_max_chars: Option<usize>,
    /// Never treat a bullet item as a keyword header (bold `**` bullets
    /// excepted).
    pub keyword_headers_skip_bullets: bool,
    /// Title of the single section emitted when no header is found.
    pub fallback_title: String,
    /// Amounts above this are formatted as rupees, otherwise as dollars.
    pub high_denomination_threshold: f64,
    pub price_placeholder: String,
    /// Scan the narrative for amounts when the payload has no usable price.
    pub scan_text_for_price: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_line_chars: 10,
            max_line_chars: 200,
            header_max_chars: 50,
            keyword_header_max_chars: None,
            keyword_headers_skip_bullets: false,
            fallback_title: "Market Analysis".to_string(),
            high_denomination_threshold: 100_000.0,
            price_placeholder: "Price not available".to_string(),
            scan_text_for_price: true,
        }
    }
}
