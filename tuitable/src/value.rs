//! Cell classification for type-aware comparison.

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::collate::collate;

/// Cell texts treated as a missing value rather than comparable data.
const MISSING_SENTINELS: [&str; 2] = ["N/A", "-"];

/// Shape gate for date cells: `YYYY-MM-DD` with an optional `HH:MM:SS` tail.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(\s+\d{2}:\d{2}:\d{2})?$").expect("Invalid date pattern")
});

/// A cell's comparison key, parsed once per sort.
///
/// Every interpretation of the text is cached up front because the
/// comparison tier is decided per *pair*: a date-shaped cell still has a
/// numeric reading (`"2024-01-05"` → 2024), which is the reading used when
/// its partner is a plain number.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    /// Trimmed cell text.
    text: String,
    /// Whether the text is a missing-value sentinel.
    missing: bool,
    /// Chronological reading, when the text is a strict date or date-time.
    instant: Option<NaiveDateTime>,
    /// Numeric reading: leading decimal number after stripping `,` and `%`.
    number: Option<f64>,
}

impl SortKey {
    /// Parse a cell's text into its comparison key.
    ///
    /// Surrounding whitespace is trimmed first; sentinels are matched
    /// against the trimmed text exactly.
    pub fn parse(cell: &str) -> Self {
        let text = cell.trim();
        let missing = MISSING_SENTINELS.contains(&text);
        let instant = if missing { None } else { parse_instant(text) };
        let number = if missing { None } else { parse_number(text) };
        Self {
            text: text.to_string(),
            missing,
            instant,
            number,
        }
    }

    /// Returns `true` if the cell held a missing-value sentinel.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// The trimmed cell text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ascending comparison against another key.
    ///
    /// Tier order: missing values sort after everything real, then both
    /// keys compare chronologically if both are dates, numerically if both
    /// have a numeric reading, and as collated text otherwise. A failed
    /// parse simply drops a key out of its tier; nothing errors.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.missing, other.missing) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        if let (Some(a), Some(b)) = (self.instant, other.instant) {
            return a.cmp(&b);
        }
        if let (Some(a), Some(b)) = (self.number, other.number) {
            return a.total_cmp(&b);
        }
        collate(&self.text, &other.text)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a strict `YYYY-MM-DD[ HH:MM:SS]` cell into a date-time.
///
/// Date-only cells mean midnight. Anything failing the shape gate or the
/// calendar (say `2024-13-45`) is not a date.
fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    if !DATE_SHAPE.is_match(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Numeric reading of a cell: strip every `,` and `%`, then take the
/// longest leading decimal-number prefix. `None` without a leading number.
///
/// This is what makes `"1,234"`, `"85%"` and `"12.5 GB"` sort numerically.
fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != ',' && c != '%').collect();
    number_prefix(&cleaned)?.parse().ok()
}

/// Longest prefix scanning as `[sign] digits [. digits] [e [sign] digits]`,
/// requiring at least one digit before any exponent.
fn number_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

// =============================================================================
// Tests
// =============================================================================
