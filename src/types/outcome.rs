//! Scan result value

use serde::{Deserialize, Serialize};
use crate::GROUND_FLOOR;

/// Result of scanning one instruction sequence
///
/// Two scans of the same characters always produce equal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Floor after the last character
    pub floor: i64,
    /// 1-based position of the first character that reached the basement
    pub basement_position: Option<usize>,
    /// Characters consumed, recognized or not
    pub characters: usize,
    /// Number of `(` seen
    pub ups: usize,
    /// Number of `)` seen
    pub downs: usize,
}

impl Default for ScanOutcome {
    fn default() -> Self {
        Self {
            floor: GROUND_FLOOR,
            basement_position: None,
            characters: 0,
            ups: 0,
            downs: 0,
        }
    }
}

impl ScanOutcome {
    /// Did the instructions ever reach the basement?
    pub fn entered_basement(&self) -> bool {
        self.basement_position.is_some()
    }

    /// Characters that were neither `(` nor `)`
    pub fn ignored(&self) -> usize {
        self.characters.saturating_sub(self.ups + self.downs)
    }
}
