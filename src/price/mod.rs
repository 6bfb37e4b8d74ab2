//! Price range resolution.
//!
//! A price payload can carry display strings, numeric bounds, an
//! array-encoded string, a dash-joined range or a bare scalar, in any mix.
//! [`resolve_price`] tries each shape in a fixed order and returns the first
//! usable `(min, max)` pair.

use crate::config::EngineConfig;
use crate::domain::PriceRange;
use serde_json::Value;

pub mod currency;
pub mod narrative;
pub mod payload;
pub mod resolver;

pub use currency::Currency;
pub use narrative::{price_mentions, range_from_text};
pub use payload::PricePayload;
pub use resolver::ResolutionStep;

/// Resolve a raw JSON price payload. Never fails.
pub fn resolve_price(payload: &Value, config: &EngineConfig) -> PriceRange {
    resolver::resolve(&PricePayload::from_value(payload), config.high_denomination_threshold)
}
