//! Calculator
//!
//! Number conversion, negative-number rejection and summing.

pub mod engine;

pub use engine::{sum, Calculator, Evaluation, DEFAULT_DELIMITER};
