//! Calculator Engine
//!
//! Conversion, validation and summing, separated from parsing and CLI concerns.

use serde::Serialize;

use crate::error::{CalculatorError, Result};
use crate::parser::{parse_input, Token};

/// Delimiter used when the input carries no header
pub const DEFAULT_DELIMITER: &str = ",";

/// Detailed outcome of a successful calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub delimiter: String,
    pub numbers: Vec<i64>,
    pub total: i64,
}

/// Stateless calculator with a configurable default delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    default_delimiter: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            default_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Use `delimiter` for input that does not declare its own
    pub fn with_default_delimiter(delimiter: impl Into<String>) -> Result<Self> {
        let default_delimiter = delimiter.into();
        if default_delimiter.is_empty() {
            return Err(CalculatorError::EmptyDelimiter);
        }
        Ok(Self { default_delimiter })
    }

    pub fn default_delimiter(&self) -> &str {
        &self.default_delimiter
    }

    /// Sum the numbers in `input`
    pub fn add(&self, input: &str) -> Result<i64> {
        self.evaluate(input).map(|evaluation| evaluation.total)
    }

    /// Sum the numbers in `input`, keeping the delimiter and parsed values
    pub fn evaluate(&self, input: &str) -> Result<Evaluation> {
        if input.is_empty() {
            return Ok(Evaluation {
                delimiter: self.default_delimiter.clone(),
                numbers: Vec::new(),
                total: 0,
            });
        }

        let parsed = parse_input(input, &self.default_delimiter)?;
        let numbers = parse_numbers(&parsed.tokens)?;
        reject_negatives(&numbers)?;
        let total = checked_total(&numbers)?;

        Ok(Evaluation {
            delimiter: parsed.delimiter,
            numbers,
            total,
        })
    }
}

/// Sum a number string using the default `,` delimiter
///
/// ```
/// assert_eq!(string_calculator::sum("//;\n1;2"), Ok(3));
/// ```
pub fn sum(input: &str) -> Result<i64> {
    Calculator::new().add(input)
}

/// Convert every token, failing on the first one that is not an integer
fn parse_numbers(tokens: &[Token]) -> Result<Vec<i64>> {
    tokens.iter().map(parse_token).collect()
}

fn parse_token(token: &Token) -> Result<i64> {
    // Surrounding whitespace, including a stray '\r' from CRLF input, is ignored
    token
        .text
        .trim()
        .parse::<i64>()
        .map_err(|_| CalculatorError::InvalidNumberFormat {
            token: token.text.clone(),
            index: token.index,
        })
}

fn reject_negatives(numbers: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::NegativeNumbersNotAllowed { negatives })
    }
}

fn checked_total(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(CalculatorError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sum(""), Ok(0));
    }

    #[test]
    fn test_single_number() {
        assert_eq!(sum("1"), Ok(1));
    }

    #[test]
    fn test_two_numbers() {
        assert_eq!(sum("1,2"), Ok(3));
    }

    #[test]
    fn test_newline_and_comma() {
        assert_eq!(sum("1\n2,3"), Ok(6));
    }

    #[test]
    fn test_custom_delimiters() {
        assert_eq!(sum("//;\n1;2"), Ok(3));
        assert_eq!(sum("//;;\n1;;2;;3"), Ok(6));
    }

    #[test]
    fn test_negatives_in_input_order() {
        let err = sum("1,-5,3,-2").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::NegativeNumbersNotAllowed {
                negatives: vec![-5, -2]
            }
        );
        assert_eq!(err.to_string(), "negative numbers not allowed: -5, -2");
    }

    #[test]
    fn test_invalid_token_is_not_zero() {
        assert_eq!(
            sum("1,x"),
            Err(CalculatorError::InvalidNumberFormat {
                token: "x".to_string(),
                index: 1
            })
        );
    }

    #[test]
    fn test_invalid_token_wins_over_negatives() {
        let err = sum("-1,abc").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_whitespace_around_numbers() {
        assert_eq!(sum(" 1 ,2\r\n3"), Ok(6));
    }

    #[test]
    fn test_overflow() {
        let input = format!("{},1", i64::MAX);
        assert_eq!(sum(&input), Err(CalculatorError::Overflow));
    }

    #[test]
    fn test_configured_default_delimiter() {
        let calc = Calculator::with_default_delimiter(";").unwrap();
        assert_eq!(calc.default_delimiter(), ";");
        assert_eq!(Calculator::new().default_delimiter(), DEFAULT_DELIMITER);
        assert_eq!(calc.add("1;2\n3"), Ok(6));
        // A header still wins over the configured default
        assert_eq!(calc.add("//#\n4#5"), Ok(9));
    }

    #[test]
    fn test_empty_default_delimiter_rejected() {
        assert_eq!(
            Calculator::with_default_delimiter(""),
            Err(CalculatorError::EmptyDelimiter)
        );
    }

    #[test]
    fn test_evaluate_reports_details() {
        let evaluation = Calculator::new().evaluate("//;\n1;2\n3").unwrap();
        assert_eq!(evaluation.delimiter, ";");
        assert_eq!(evaluation.numbers, vec![1, 2, 3]);
        assert_eq!(evaluation.total, 6);
    }
}
