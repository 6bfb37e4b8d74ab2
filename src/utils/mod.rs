//! Utility functions

pub mod numbers;
pub mod text;

pub use numbers::{format_indian_grouping, format_with_commas, parse_amount};
pub use text::{strip_markup, title_case, truncate_chars};
