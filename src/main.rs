//! report-format: format vehicle comparison and price reports
//!
//! Reads a report service JSON response and prints its sections, pricing
//! factors and price range as text or JSON.

use anyhow::Result;

fn main() -> Result<()> {
    report_format::cli::run()
}
