//! ISBN-13 identifier check.
//!
//! Catalog insertion never validates identifier codes. This check is an
//! opt-in report over books already in the catalog.

use thiserror::Error;

/// Number of digits in an ISBN-13 code
pub const ISBN13_DIGITS: usize = 13;

/// Reasons an identifier code is not a well-formed ISBN-13
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Expected 13 digits, found {actual}")]
    WrongLength { actual: usize },

    #[error("Check digit mismatch: expected {expected}, found {actual}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

/// Validate an ISBN-13 code.
///
/// Hyphens are ignored wherever they appear. The remaining characters must be
/// exactly 13 ASCII digits whose weighted sum (weights 1 and 3 alternating)
/// is divisible by 10.
pub fn validate_isbn13(code: &str) -> Result<(), IsbnError> {
    let mut digits = Vec::with_capacity(ISBN13_DIGITS);

    for (position, ch) in code.chars().enumerate() {
        if ch == '-' {
            continue;
        }
        match ch.to_digit(10) {
            Some(d) => digits.push(d),
            None => return Err(IsbnError::InvalidCharacter { ch, position }),
        }
    }

    if digits.len() != ISBN13_DIGITS {
        return Err(IsbnError::WrongLength {
            actual: digits.len(),
        });
    }

    let expected = check_digit(&digits[..ISBN13_DIGITS - 1]);
    let actual = digits[ISBN13_DIGITS - 1];
    if expected != actual {
        return Err(IsbnError::ChecksumMismatch { expected, actual });
    }

    Ok(())
}

/// Compute the ISBN-13 check digit for the first 12 digits
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}
