//! Number String Parser
//!
//! Turns raw input into positioned tokens. Conversion and validation of the
//! numbers themselves happens in [`crate::calculator`].

pub mod header;
pub mod lexer;

pub use header::{split_header, Header, HEADER_MARKER};
pub use lexer::{tokenize, Token};

use crate::error::Result;

/// Parsed input: the active delimiter and the tokens it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub delimiter: String,
    pub tokens: Vec<Token>,
}

/// Parse `input` into tokens
///
/// This is the main entry point for parsing. It strips an optional header
/// and splits the remaining payload on the active delimiter.
pub fn parse_input(input: &str, default_delimiter: &str) -> Result<ParsedInput> {
    let header = split_header(input, default_delimiter)?;
    let tokens = tokenize(header.payload, &header.delimiter);

    Ok(ParsedInput {
        delimiter: header.delimiter.into_owned(),
        tokens,
    })
}
