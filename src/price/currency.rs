//! Currency inference for bare numeric bounds.
//!
//! The payload never says which currency a bare number is in, so it is
//! guessed from magnitude: amounts above the configured threshold are taken
//! as rupees, the rest as dollars. This is an approximation. A cheap car
//! priced in rupees or a very expensive one priced in dollars will be
//! labelled wrongly.

use crate::utils::{format_indian_grouping, format_with_commas};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Inr,
}

impl Currency {
    pub fn infer(amount: f64, threshold: f64) -> Self {
        if amount > threshold {
            Currency::Inr
        } else {
            Currency::Usd
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    /// Whole-unit display string, e.g. `$15,000` or `₹28,00,000`.
    pub fn format(&self, amount: f64) -> String {
        let whole = amount.max(0.0).round() as u64;
        let digits = match self {
            Currency::Usd => format_with_commas(whole),
            Currency::Inr => format_indian_grouping(whole),
        };
        format!("{}{}", self.glyph(), digits)
    }
}
