//! Input loading for the CLI.
//!
//! Resolves an [`InputSource`] to the exact string handed to the calculator.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::io::Read;
use std::sync::OnceLock;

use crate::config::InputSource;

/// Read the input text described by `source`
pub fn read_input(source: &InputSource, escapes: bool) -> Result<String> {
    match source {
        InputSource::Argument(text) => {
            log::debug!("Reading input from argument");
            if escapes {
                Ok(expand_escapes(text))
            } else {
                Ok(text.clone())
            }
        }
        InputSource::File(path) => {
            log::debug!("Reading input from file: {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok(content)
        }
        InputSource::Stdin => {
            log::debug!("Reading input from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read input from stdin")?;
            Ok(content)
        }
    }
}

/// Expand `\n`, `\t`, `\r` and `\\` escapes typed on a command line
pub fn expand_escapes(text: &str) -> String {
    static ESCAPE_RE: OnceLock<Regex> = OnceLock::new();
    let re = ESCAPE_RE.get_or_init(|| {
        Regex::new(r"\\([ntr\\])").expect("escape pattern is a valid regex")
    });

    re.replace_all(text, |caps: &Captures<'_>| match &caps[1] {
        "n" => "\n",
        "t" => "\t",
        "r" => "\r",
        _ => "\\",
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_newline_escape() {
        assert_eq!(expand_escapes(r"//;\n1;2"), "//;\n1;2");
    }

    #[test]
    fn test_escaped_backslash_is_not_newline() {
        assert_eq!(expand_escapes(r"1\\n2"), "1\\n2");
    }

    #[test]
    fn test_unknown_escape_untouched() {
        assert_eq!(expand_escapes(r"1\x2"), r"1\x2");
    }

    #[test]
    fn test_argument_without_escapes_is_verbatim() {
        let source = InputSource::Argument(r"1\n2".to_string());
        assert_eq!(read_input(&source, false).unwrap(), r"1\n2");
    }
}
