use chrono::NaiveDate;
use thiserror::Error;

/// Input matched none of the known date patterns.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("incorrect timestamp: {0}")]
pub struct DateParseError(pub String);

/// Patterns tried in order; the first one that consumes the whole input wins.
/// `%m/%d/%Y` before `%d/%m/%Y` means `03/04/2024` is always March 4th, while
/// `13/02/2024` falls through to February 13th. chrono accepts unpadded
/// single-digit numbers, so these also cover `2024-1-5` and `1/5/2024`.
const PATTERNS: &[&str] = &[
    "%Y%m%d",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(input, pattern).ok())
        .ok_or_else(|| DateParseError(input.to_string()))
}
