//! Output rendering (plain text, JSON)

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::{render_comparison_text, render_factors, render_market_text, render_price, render_sections};
