//! String Calculator
//!
//! Sums a delimited list of integers supplied as a string.
//!
//! This library provides:
//! - Custom delimiter headers (`//<delimiter>\n<numbers>`)
//! - Newline and delimiter as interchangeable separators
//! - Typed rejection of negative numbers and malformed input
//! - Configuration and input handling for the `strcalc` CLI
//!
//! ```
//! use string_calculator::sum;
//!
//! assert_eq!(sum("1\n2,3"), Ok(6));
//! assert_eq!(sum("//;;\n1;;2;;3"), Ok(6));
//! assert!(sum("1,-2").is_err());
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod parser;

// Re-exports for clean public API
pub use calculator::{sum, Calculator, Evaluation};
pub use config::Config;
pub use error::{CalculatorError, Result};
pub use parser::{parse_input, ParsedInput};
