//! Report structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::ScanOutcome;

/// A scan outcome together with where and when it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Source label (usually the input path)
    pub source: String,
    /// Timestamp
    pub scanned_at: DateTime<Utc>,
    /// The scan result
    #[serde(flatten)]
    pub outcome: ScanOutcome,
}

impl ScanReport {
    /// Create new report
    pub fn new(source: impl Into<String>, outcome: ScanOutcome) -> Self {
        Self {
            source: source.into(),
            scanned_at: Utc::now(),
            outcome,
        }
    }

    /// First line: the final floor
    pub fn floor_line(&self) -> String {
        format!("Santa is at floor {}.", self.outcome.floor)
    }

    /// Second line: first basement entry
    pub fn basement_line(&self) -> String {
        match self.outcome.basement_position {
            Some(position) => format!("Santa reaches the basement at character {}.", position),
            None => "Santa never reaches the basement.".to_string(),
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let floor = if self.outcome.floor < 0 {
            self.floor_line().red()
        } else {
            self.floor_line().green()
        };
        let basement = if self.outcome.entered_basement() {
            self.basement_line().yellow()
        } else {
            self.basement_line().dimmed()
        };
        format!("{}\n{}", floor, basement)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!("{}\n{}", self.floor_line(), self.basement_line())
    }
}
