//! Error types for the string calculator.
//!
//! Every failure of [`sum`](crate::sum) and [`Calculator`](crate::Calculator)
//! is reported through [`CalculatorError`]. Nothing is recovered locally; the
//! caller decides what a rejection means.
//!
//! # Examples
//!
//! ```
//! use string_calculator::{sum, CalculatorError};
//!
//! let err = sum("1,-2,3,-4").unwrap_err();
//! assert!(matches!(err, CalculatorError::NegativeNumbersNotAllowed { .. }));
//! assert_eq!(err.to_string(), "negative numbers not allowed: -2, -4");
//! ```

use thiserror::Error;

/// Errors produced while parsing or summing a number string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// One or more parsed numbers were negative.
    ///
    /// The offending values are kept in order of first appearance.
    #[error("negative numbers not allowed: {}", join_numbers(.negatives))]
    NegativeNumbersNotAllowed {
        /// Negative values in input order
        negatives: Vec<i64>,
    },

    /// A token could not be read as a 64-bit signed integer.
    ///
    /// Covers non-numeric text, empty tokens between adjacent separators and
    /// values outside the `i64` range.
    #[error("invalid number {token:?} at position {index}")]
    InvalidNumberFormat {
        /// Token text as it appeared in the payload
        token: String,
        /// Zero-based position of the token in the payload
        index: usize,
    },

    /// Input started with `//` but no newline closed the header.
    #[error("malformed delimiter header: expected \"//<delimiter>\\n\" before the numbers")]
    MalformedHeader,

    /// The delimiter declared by the header, or configured as default, was empty.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// The sum does not fit in an `i64`.
    #[error("sum overflows a 64-bit signed integer")]
    Overflow,
}

impl CalculatorError {
    /// Returns `true` for the negative-number rejection.
    #[must_use]
    pub fn is_negative_numbers(&self) -> bool {
        matches!(self, Self::NegativeNumbersNotAllowed { .. })
    }

    /// Returns `true` if the input itself could not be parsed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumberFormat { .. } | Self::MalformedHeader | Self::EmptyDelimiter
        )
    }
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalculatorError>;
