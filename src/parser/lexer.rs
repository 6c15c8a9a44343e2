//! Payload Lexer
//!
//! Normalizes newlines and splits the numbers payload into tokens.

/// A raw number token and where it sits in the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub index: usize,
}

/// Tokenize a numbers payload on `delimiter`
///
/// Every newline counts as a delimiter. Trailing empty fields are dropped,
/// so `"1,2,"` and `"1\n"` end cleanly; interior empty tokens are kept so
/// the caller can reject them.
pub fn tokenize(payload: &str, delimiter: &str) -> Vec<Token> {
    let normalized = normalize_newlines(payload, delimiter);

    let mut tokens: Vec<Token> = normalized
        .split(delimiter)
        .enumerate()
        .map(|(index, text)| Token {
            text: text.to_string(),
            index,
        })
        .collect();

    while tokens.last().is_some_and(|token| token.text.is_empty()) {
        tokens.pop();
    }

    tokens
}

/// Replace every newline in `payload` with `delimiter`
pub fn normalize_newlines(payload: &str, delimiter: &str) -> String {
    payload.replace('\n', delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_default_delimiter() {
        let tokens = tokenize("1,2,3", ",");
        assert_eq!(texts(&tokens), ["1", "2", "3"]);
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn test_newline_is_a_separator() {
        let tokens = tokenize("1\n2,3", ",");
        assert_eq!(texts(&tokens), ["1", "2", "3"]);
    }

    #[test]
    fn test_multi_char_delimiter() {
        let tokens = tokenize("1;;2\n3", ";;");
        assert_eq!(texts(&tokens), ["1", "2", "3"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let tokens = tokenize("1|2.3", "|");
        assert_eq!(texts(&tokens), ["1", "2.3"]);
    }

    #[test]
    fn test_interior_empty_tokens_are_kept() {
        let tokens = tokenize("1,,2", ",");
        assert_eq!(texts(&tokens), ["1", "", "2"]);
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_trailing_empty_tokens_are_dropped() {
        assert_eq!(texts(&tokenize("1,2,", ",")), ["1", "2"]);
        assert_eq!(texts(&tokenize("1\n", ",")), ["1"]);
        assert_eq!(texts(&tokenize("1,,\n", ",")), ["1"]);
        assert!(tokenize("\n", ",").is_empty());
        assert!(tokenize(",,", ",").is_empty());
    }

    #[test]
    fn test_empty_payload() {
        assert!(tokenize("", ",").is_empty());
    }
}
