use crate::{buffer, error::ShellError};

/// Initial token list capacity, and the step it grows by.
pub const TOKEN_BUFSIZE: usize = 64;

/// Space, tab, carriage return, newline and bell.
pub const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Splits `line` into owned words. Runs of delimiters never produce empty tokens.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens: Vec<String> = Vec::new();
    buffer::grow(&mut tokens, TOKEN_BUFSIZE, TOKEN_BUFSIZE)?;

    for word in line.split(DELIMITERS).filter(|word| return !word.is_empty()) {
        let needed = tokens.len() + 1;
        buffer::grow(&mut tokens, needed, TOKEN_BUFSIZE)?;
        tokens.push(word.to_string());
    }

    return Ok(tokens);
}
