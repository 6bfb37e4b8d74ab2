//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read the whole input document from a path, or from stdin when `-`.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed reading input file: {input}"))
}

/// Split repeated/comma-separated values, trimming whitespace and discarding
/// empty segments.
pub fn parse_csv(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
