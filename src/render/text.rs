//! Plain-text rendering for terminals and logs.

use crate::domain::{FactorMap, Line, LineTag, PriceRange, Section};
use crate::report::{ComparisonReport, MarketReport};

fn line_prefix(tag: LineTag) -> &'static str {
    match tag {
        LineTag::Bullet => "  • ",
        LineTag::EntityHeader => "  ## ",
        LineTag::Verdict => "  => ",
        LineTag::Plain => "  ",
    }
}

fn render_line(line: &Line) -> String {
    format!("{}{}", line_prefix(line.tag), line.text)
}

pub fn render_sections(sections: &[Section]) -> String {
    let mut blocks = Vec::with_capacity(sections.len());
    for section in sections {
        let mut block = vec![section.title.clone()];
        block.extend(section.content.iter().map(render_line));
        blocks.push(block.join("\n"));
    }
    blocks.join("\n\n")
}

pub fn render_factors(factors: &FactorMap) -> String {
    factors.iter().map(|f| format!("{}: {}", f.name, f.description)).collect::<Vec<_>>().join("\n")
}

pub fn render_price(price: &PriceRange, placeholder: &str) -> String {
    format!("Price range: {}", price.display(placeholder))
}

pub fn render_market_text(report: &MarketReport, placeholder: &str) -> String {
    let mut parts = vec![render_price(&report.price, placeholder)];
    if !report.sections.is_empty() {
        parts.push(render_sections(&report.sections));
    }
    if !report.factors.is_empty() {
        parts.push(format!("Key Pricing Factors\n{}", render_factors(&report.factors)));
    }
    format!("{}\n", parts.join("\n\n"))
}

pub fn render_comparison_text(report: &ComparisonReport) -> String {
    let mut out = render_sections(&report.sections);
    if let Some(rec) = &report.recommendation {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str("Recommendation\n");
        out.push_str(rec);
    }
    out.push('\n');
    out
}
