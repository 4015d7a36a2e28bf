//! Percentage formatting and coverage color levels.
//!
//! Thresholds are fixed: 90% and up is green, 80% up to 90% is yellow,
//! everything below is red.
//!
//! Escapes are emitted unconditionally; callers decide whether to color.

use colored::Color;

/// Lowest percentage rendered green
pub const HIGH_COVERAGE_THRESHOLD: f64 = 90.0;
/// Lowest percentage rendered yellow
pub const MEDIUM_COVERAGE_THRESHOLD: f64 = 80.0;

/// Coverage band a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageLevel {
    High,
    Medium,
    Low,
}

impl CoverageLevel {
    pub fn from_percent(val: f64) -> Self {
        if val >= HIGH_COVERAGE_THRESHOLD {
            Self::High
        } else if val >= MEDIUM_COVERAGE_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Terminal color for text output
    pub fn color(self) -> Color {
        match self {
            Self::High => Color::Green,
            Self::Medium => Color::Yellow,
            Self::Low => Color::Red,
        }
    }
}

/// Format a percentage as `%6.2f%%`, e.g. `" 95.00%"`.
pub fn format_percentage(val: f64) -> String {
    format!("{:6.2}%", val)
}

/// Format a percentage wrapped in its level's ANSI color.
///
/// Same escape sequence `colored` writes for the level color, but
/// independent of its global TTY detection.
pub fn colorize_percentage(val: f64) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m",
        CoverageLevel::from_percent(val).color().to_fg_str(),
        format_percentage(val)
    )
}
