//! Core types for Floorscan

mod direction;
mod outcome;
mod report;
mod error;

pub use direction::Direction;
pub use outcome::ScanOutcome;
pub use report::ScanReport;
pub use error::ScanError;
