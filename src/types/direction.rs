//! Direction definitions

use crate::{UP, DOWN};

/// One decoded floor instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `(` - one floor up
    Up,
    /// `)` - one floor down
    Down,
}

impl Direction {
    /// Decode a character, `None` for anything that is not an instruction
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            UP => Some(Direction::Up),
            DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Floor change caused by this instruction
    pub fn delta(&self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}
