//! Whitespace tokenization of a single OBJ line.

use crate::error::ParseError;

#[inline]
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

/// Iterate over the whitespace-separated tokens of `line`.
///
/// Runs of delimiters collapse, so no empty tokens are produced.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_delimiter(b)).filter(|t| !t.is_empty())
}

/// Return the token at `index`, or [`ParseError::MissingToken`] if the line
/// has fewer tokens.
pub fn split_token(line: &[u8], index: usize, line_number: usize) -> Result<&[u8], ParseError> {
    tokens(line).nth(index).ok_or(ParseError::MissingToken {
        line: line_number,
        index,
    })
}

/// The part of a face token before the first `/` (`7/2/5` -> `7`).
pub fn vertex_index_part(token: &[u8]) -> &[u8] {
    token.split(|&b| b == b'/').next().unwrap_or(token)
}
