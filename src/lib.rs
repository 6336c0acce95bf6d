//! Floorscan: follow parenthesis floor instructions
//!
//! `(` moves one floor up, `)` moves one floor down, everything else is
//! ignored. A scan reports the final floor and the 1-based position of the
//! first character that lands on the first basement level.

pub mod core;
pub mod types;

// =============================================================================
// INSTRUCTIONS
// =============================================================================

/// Go up one floor
pub const UP: char = '(';

/// Go down one floor
pub const DOWN: char = ')';

// =============================================================================
// FLOORS
// =============================================================================

/// Every scan starts here
pub const GROUND_FLOOR: i64 = 0;

/// First basement level, the floor whose first arrival is recorded
pub const BASEMENT_FLOOR: i64 = -1;

// =============================================================================
// INPUT
// =============================================================================

/// Input read when no path is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "./input.txt";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
