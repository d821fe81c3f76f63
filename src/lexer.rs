//! Splits a command line into whitespace-delimited argument tokens.

/// Characters that separate tokens: space, tab, carriage return, newline
/// and the bell character.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits `line` into tokens on any run of delimiter characters.
///
/// Tokens are slices borrowing from `line`, so the sequence cannot outlive
/// the line it was cut from. No quoting, escaping or comment syntax is
/// recognized; a literal `"a b"` yields the two tokens `"a` and `b"`.
/// Empty and whitespace-only lines yield an empty vector.
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}
