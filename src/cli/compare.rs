//! Comparison command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{parse_csv, read_input, OutputFormat};
use crate::input::ComparisonInput;
use crate::render::{render_comparison_text, render_json};
use crate::report::ReportFormatter;

#[derive(Args)]
pub struct CompareArgs {
    /// JSON response file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Names of the compared vehicles (repeatable or comma-separated)
    #[arg(short, long = "entity", value_name = "NAME")]
    pub entities: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(formatter: &ReportFormatter, args: CompareArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let mut input = ComparisonInput::from_json(&raw)?;
    input.entities.extend(parse_csv(&args.entities));

    let report = formatter.format_comparison(&input);
    let output = match args.format {
        OutputFormat::Text => render_comparison_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    print!("{output}");
    Ok(())
}
