//! Reads and validates the Robux quantity entered by the user.

use thiserror::Error;

/// An error that can occur when parsing the quantity field.
///
/// These never reach the UI: [`read_quantity`] collapses every variant into
/// the 0 sentinel, which downstream means "nothing to calculate".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseQuantityError {
    /// The field is empty (or whitespace only).
    #[error("empty quantity")]
    Empty,
    /// The string is not a valid finite number (e.g., "abc", "1.2.3").
    #[error("invalid quantity format")]
    InvalidFormat,
    /// The value is numeric but negative.
    #[error("negative quantity")]
    Negative,
}

/// Parses the raw quantity text into a non-negative number.
pub fn parse_quantity(raw: &str) -> Result<f64, ParseQuantityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseQuantityError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseQuantityError::InvalidFormat)?;

    // "inf" and "NaN" parse as floats; neither is a usable quantity.
    if !value.is_finite() {
        return Err(ParseQuantityError::InvalidFormat);
    }
    if value < 0.0 {
        return Err(ParseQuantityError::Negative);
    }

    Ok(value)
}

/// Reads the quantity field, normalizing every invalid or negative entry to
/// the sentinel value 0. Never panics and never surfaces an error; a zero
/// result means "no calculation to perform".
pub fn read_quantity(raw: &str) -> f64 {
    parse_quantity(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_read_as_zero() {
        assert_eq!(read_quantity(""), 0.0);
        assert_eq!(read_quantity("   "), 0.0);
    }

    #[test]
    fn non_numeric_reads_as_zero() {
        for raw in ["abc", "1.2.3", "12abc", "--5", "NaN", "inf"] {
            assert_eq!(read_quantity(raw), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn negative_reads_as_zero() {
        assert_eq!(read_quantity("-5"), 0.0);
        assert_eq!(read_quantity("-0.01"), 0.0);
    }

    #[test]
    fn valid_quantities_pass_through() {
        assert_eq!(read_quantity("100"), 100.0);
        assert_eq!(read_quantity("12.5"), 12.5);
        assert_eq!(read_quantity(" 42 "), 42.0);
        assert_eq!(read_quantity("0"), 0.0);
    }

    #[test]
    fn parse_errors_are_distinguished() {
        assert_eq!(parse_quantity(""), Err(ParseQuantityError::Empty));
        assert_eq!(parse_quantity("abc"), Err(ParseQuantityError::InvalidFormat));
        assert_eq!(parse_quantity("-5"), Err(ParseQuantityError::Negative));
        assert_eq!(parse_quantity("7"), Ok(7.0));
    }
}
