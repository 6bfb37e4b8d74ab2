//! Per-line cleanup applied to every retained content line.

use crate::config::EngineConfig;
use crate::segment::markers::BULLET_GLYPHS;
use crate::utils::truncate_chars;

/// Strip one leading bullet glyph, drop noise lines and bound the length.
///
/// Returns `None` when the line is too short to be meaningful.
pub fn clean_line(line: &str, config: &EngineConfig) -> Option<String> {
    let unbulleted = strip_bullet(line);

    if unbulleted.chars().count() <= config.min_line_chars {
        return None;
    }

    Some(truncate_chars(unbulleted, config.max_line_chars))
}

/// Trimmed line without its leading bullet glyph. A `**` prefix is bold
/// markup and is left alone.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    if trimmed.starts_with("**") {
        return trimmed;
    }
    trimmed.strip_prefix(BULLET_GLYPHS).unwrap_or(trimmed).trim_start()
}
