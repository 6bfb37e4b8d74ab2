//! report-format: turn free-text vehicle reports into renderable structure
//!
//! Reports from the comparison and price-estimation service arrive as loose
//! prose. This crate segments them into titled sections, classifies each
//! line, extracts pricing factors and resolves a displayable price range,
//! degrading to best-effort output instead of failing on malformed text.

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod factors;
pub mod input;
pub mod price;
pub mod render;
pub mod report;
pub mod segment;
pub mod utils;

pub use classify::{classify, ClassifyContext};
pub use config::EngineConfig;
pub use domain::{FactorEntry, FactorMap, Line, LineTag, PriceRange, PriceSource, Section};
pub use factors::extract_factors;
pub use input::{ComparisonInput, InputError, MarketInput};
pub use price::resolve_price;
pub use report::{ComparisonReport, MarketReport, ReportFormatter};
pub use segment::{segment, segment_comparison};
