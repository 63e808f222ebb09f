//! Validation of bot form submissions.
//!
//! Untrusted form text crosses into numbers only through [`parse_number`] and
//! [`parse_integer`], which either yield a finite value or a tagged failure.
//! Validators never fail as Rust errors: every problem becomes a
//! [`ValidationError`](crate::model::ValidationError) in the returned list.

pub mod dip;
pub mod grid;
pub mod momentum;

use crate::error::NumberParseError;

/// A value is blank when nothing but whitespace was entered.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parses the whole trimmed text as a finite `f64`.
///
/// Partial input such as `"12abc"` is rejected, as are `inf` and `NaN`.
pub fn parse_number(raw: &str) -> Result<f64, NumberParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumberParseError::Blank);
    }
    let value: f64 = trimmed.parse().map_err(|_| NumberParseError::Malformed)?;
    if !value.is_finite() {
        return Err(NumberParseError::NonFinite);
    }
    Ok(value)
}

/// Parses the whole trimmed text as an `i64`.
pub fn parse_integer(raw: &str) -> Result<i64, NumberParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumberParseError::Blank);
    }
    trimmed.parse().map_err(|_| NumberParseError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100"), Ok(100.0));
        assert_eq!(parse_number(" 0.25 "), Ok(0.25));
        assert_eq!(parse_number("-3"), Ok(-3.0));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number(""), Err(NumberParseError::Blank));
        assert_eq!(parse_number("   "), Err(NumberParseError::Blank));
        assert_eq!(parse_number("12abc"), Err(NumberParseError::Malformed));
        assert_eq!(parse_number("1,000"), Err(NumberParseError::Malformed));
        assert_eq!(parse_number("inf"), Err(NumberParseError::NonFinite));
        assert_eq!(parse_number("NaN"), Err(NumberParseError::NonFinite));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("30"), Ok(30));
        assert_eq!(parse_integer(" -2 "), Ok(-2));
        assert_eq!(parse_integer("3.5"), Err(NumberParseError::Malformed));
        assert_eq!(parse_integer(""), Err(NumberParseError::Blank));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank("0"));
    }
}
