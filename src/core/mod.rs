//! Core modules for Floorscan

pub mod scanner;
pub mod source;

pub use scanner::{Scanner, scan, scan_str};
pub use source::{open_source, scan_reader, scan_file};
