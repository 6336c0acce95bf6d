//! Scanner: single pass over floor instructions
//!
//! Per character:
//! - `(` → floor + 1
//! - `)` → floor - 1
//! - anything else → floor unchanged, still counted as a position
//!
//! The first position at which the floor equals -1 is kept; later visits to
//! the basement never overwrite it.

use tracing::{debug, info};
use crate::{BASEMENT_FLOOR, GROUND_FLOOR};
use crate::types::{Direction, ScanOutcome};

/// Sequential floor scanner
#[derive(Debug)]
pub struct Scanner {
    /// Current floor
    floor: i64,
    /// Characters consumed so far
    index: usize,
    /// First 1-based position that landed on the basement
    basement_position: Option<usize>,
    ups: usize,
    downs: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create new scanner on the ground floor
    pub fn new() -> Self {
        Self {
            floor: GROUND_FLOOR,
            index: 0,
            basement_position: None,
            ups: 0,
            downs: 0,
        }
    }

    /// Apply one character
    pub fn feed(&mut self, c: char) {
        self.index += 1;

        let Some(direction) = Direction::from_char(c) else {
            return;
        };
        match direction {
            Direction::Up => self.ups += 1,
            Direction::Down => self.downs += 1,
        }
        self.floor += direction.delta();

        if self.basement_position.is_none() && self.floor == BASEMENT_FLOOR {
            debug!(position = self.index, "entered the basement");
            self.basement_position = Some(self.index);
        }
    }

    /// Apply every character of `text`
    pub fn feed_str(&mut self, text: &str) {
        for c in text.chars() {
            self.feed(c);
        }
    }

    /// Current floor
    pub fn floor(&self) -> i64 {
        self.floor
    }

    /// Result so far
    pub fn outcome(&self) -> ScanOutcome {
        ScanOutcome {
            floor: self.floor,
            basement_position: self.basement_position,
            characters: self.index,
            ups: self.ups,
            downs: self.downs,
        }
    }
}

/// Scan a character sequence with a fresh scanner
pub fn scan<I>(chars: I) -> ScanOutcome
where
    I: IntoIterator<Item = char>,
{
    let mut scanner = Scanner::new();
    for c in chars {
        scanner.feed(c);
    }
    let outcome = scanner.outcome();
    info!(
        floor = outcome.floor,
        basement_position = ?outcome.basement_position,
        characters = outcome.characters,
        "scan complete"
    );
    outcome
}

/// Scan a string
pub fn scan_str(text: &str) -> ScanOutcome {
    scan(text.chars())
}

// =============================================================================
// TESTS
// =============================================================================
