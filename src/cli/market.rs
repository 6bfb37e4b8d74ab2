//! Market-analysis commands (`market`, `factors`, `price`).

use anyhow::Result;
use clap::Args;

use super::utils::{read_input, OutputFormat};
use crate::input::MarketInput;
use crate::render::{render_factors, render_json, render_market_text, render_price};
use crate::report::ReportFormatter;

#[derive(Args)]
pub struct MarketArgs {
    /// JSON response file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Full,
    Factors,
    Price,
}

pub fn run(formatter: &ReportFormatter, args: MarketArgs, view: View) -> Result<()> {
    let raw = read_input(&args.input)?;
    let input = MarketInput::from_json(&raw)?;
    let report = formatter.format_market(&input);
    let placeholder = formatter.config().price_placeholder.as_str();

    let output = match (view, args.format) {
        (View::Full, OutputFormat::Text) => render_market_text(&report, placeholder),
        (View::Full, OutputFormat::Json) => render_json(&report)?,
        (View::Factors, OutputFormat::Text) => {
            if report.factors.is_empty() {
                "No pricing factors found\n".to_string()
            } else {
                format!("{}\n", render_factors(&report.factors))
            }
        }
        (View::Factors, OutputFormat::Json) => render_json(&report.factors)?,
        (View::Price, OutputFormat::Text) => format!("{}\n", render_price(&report.price, placeholder)),
        (View::Price, OutputFormat::Json) => render_json(&report.price)?,
    };

    print!("{output}");
    Ok(())
}
