//! Delimiter Header
//!
//! Splits the optional `//<delimiter>\n` prefix off an input string.

use std::borrow::Cow;

use crate::error::{CalculatorError, Result};

/// Marker that opens a custom-delimiter header
pub const HEADER_MARKER: &str = "//";

/// Input split into its active delimiter and the numbers payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub delimiter: Cow<'a, str>,
    pub payload: &'a str,
}

/// Split a header off `input`, falling back to `default_delimiter`
///
/// The header runs from the marker to the first newline; everything after
/// that newline is payload. The declared delimiter may be any non-empty
/// string, including one that contains the marker itself.
pub fn split_header<'a>(input: &'a str, default_delimiter: &'a str) -> Result<Header<'a>> {
    let Some(rest) = input.strip_prefix(HEADER_MARKER) else {
        return Ok(Header {
            delimiter: Cow::Borrowed(default_delimiter),
            payload: input,
        });
    };

    let (delimiter, payload) = rest
        .split_once('\n')
        .ok_or(CalculatorError::MalformedHeader)?;

    if delimiter.is_empty() {
        return Err(CalculatorError::EmptyDelimiter);
    }

    Ok(Header {
        delimiter: Cow::Borrowed(delimiter),
        payload,
    })
}
