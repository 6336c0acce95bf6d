//! Integration tests for the scanner
//!
//! Tests the full path: characters → Scanner → ScanOutcome → report

use floorscan::core::{Scanner, scan, scan_str};
use floorscan::types::{ScanOutcome, ScanReport};
use floorscan::BASEMENT_FLOOR;
use pretty_assertions::assert_eq;

/// Worked floor examples
#[test]
fn test_floor_examples() {
    let cases = [
        ("(())", 0),
        ("()()", 0),
        ("(((", 3),
        ("(()(()(", 3),
        ("))(((((", 3),
        ("())", -1),
        ("))(", -1),
        (")))", -3),
        (")())())", -3),
    ];
    for (text, floor) in cases {
        assert_eq!(scan_str(text).floor, floor, "floor for {:?}", text);
    }
}

/// Worked basement examples
#[test]
fn test_basement_examples() {
    assert_eq!(scan_str(")").basement_position, Some(1));
    assert_eq!(scan_str("()())").basement_position, Some(5));
    assert_eq!(scan_str("((").basement_position, None);
}

/// Full outcome for a mixed sequence
#[test]
fn test_full_outcome() {
    let outcome = scan_str("(()))\n");
    assert_eq!(
        outcome,
        ScanOutcome {
            floor: BASEMENT_FLOOR,
            basement_position: Some(5),
            characters: 6,
            ups: 2,
            downs: 3,
        }
    );
}

/// Generic iterator input behaves like string input
#[test]
fn test_scan_accepts_any_char_iterator() {
    let chars = vec![')', '(', ')', ')'];
    assert_eq!(scan(chars), scan_str(")())"));
}

/// No state leaks between scans
#[test]
fn test_scans_are_independent() {
    let first = scan_str(")))");
    let second = scan_str("(((");
    assert_eq!(first.floor, -3);
    assert_eq!(second.floor, 3);
    assert_eq!(second.basement_position, None);
    assert_eq!(scan_str(")))"), first);
}

/// Feeding characters one by one tracks the floor as it goes
#[test]
fn test_incremental_floor() {
    let mut scanner = Scanner::new();
    let mut floors = Vec::new();
    for c in "()())".chars() {
        scanner.feed(c);
        floors.push(scanner.floor());
    }
    assert_eq!(floors, vec![1, 0, 1, 0, -1]);
}

/// Report renders the two result lines
#[test]
fn test_report_lines() {
    let report = ScanReport::new("input.txt", scan_str("()())"));
    assert_eq!(
        report.to_parseable_string(),
        "Santa is at floor -1.\nSanta reaches the basement at character 5."
    );
}

/// Long input stays linear and exact
#[test]
fn test_long_input() {
    let text = format!("{}{}", "(".repeat(10_000), ")".repeat(10_001));
    let outcome = scan_str(&text);
    assert_eq!(outcome.floor, -1);
    assert_eq!(outcome.basement_position, Some(20_001));
}
