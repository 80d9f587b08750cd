//! Text rendering of briefs, sessions and history.
//!
//! Renderers return plain strings so callers decide where output goes.

mod brief;
mod history;

pub use brief::*;
pub use history::*;

use chrono::{DateTime, Utc};

/// Visual band for a self-reported stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBand {
    Low,
    Medium,
    High,
}

impl StressBand {
    /// High for 7 and above, medium for 4 to 6, low below 4
    pub fn from_level(level: u8) -> Self {
        if level >= 7 {
            StressBand::High
        } else if level >= 4 {
            StressBand::Medium
        } else {
            StressBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressBand::Low => "low",
            StressBand::Medium => "mid",
            StressBand::High => "high",
        }
    }
}

/// Badge text, e.g. `Stress: 8/10 [high]`
pub fn stress_badge(level: u8) -> String {
    format!(
        "Stress: {}/10 [{}]",
        level,
        StressBand::from_level(level).label()
    )
}

/// Human-readable timestamp, e.g. `October 16, 2026 at 07:47 PM`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Cut text to `max_chars` characters, appending `...` when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

pub(crate) const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";
