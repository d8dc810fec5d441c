//! Reading reference strings and frame counts from text.
//!
//! Two reference-string spellings are accepted:
//! - separated: `"7 0 1 2"` or `"7,0,1,2"` (any mix of whitespace and commas),
//!   one symbol per token, so multi-character page names work
//! - compact: `"ABCBD"`, one symbol per character
//!
//! Blank input is an empty reference string, which is valid.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, Result};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Split `text` into page symbols.
///
/// # Example
/// ```
/// use pagesim::input::parse_reference_string;
///
/// assert_eq!(parse_reference_string("ABC"), vec!["A", "B", "C"]);
/// assert_eq!(parse_reference_string("10, 20 10"), vec!["10", "20", "10"]);
/// ```
pub fn parse_reference_string(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.contains(is_separator) {
        text.split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        text.chars().map(String::from).collect()
    }
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::Parse` if `text` is not an integer
/// - `Error::InvalidFrameCount` if it is negative
pub fn parse_frame_count(text: &str) -> Result<usize> {
    let value = parse_integer("frame count", text)?;
    usize::try_from(value).map_err(|_| Error::InvalidFrameCount(value))
}

/// Parse a reference-string length, as asked for by the interactive prompt.
///
/// # Errors
/// - `Error::Parse` if `text` is not a non-negative integer
pub fn parse_length(text: &str) -> Result<usize> {
    text.trim().parse::<usize>().map_err(|_| Error::Parse {
        field: "length",
        value: text.trim().to_string(),
    })
}

/// Collect `len` page symbols, asking `next_line` for each one in turn.
///
/// `next_line` receives the 1-based element number and returns `Ok(None)`
/// when input ends early, which cancels the whole collection. Blank lines are
/// skipped and the same element is asked for again. The result grows as
/// elements arrive, so a huge `len` costs nothing up front.
pub fn collect_elements<E, F>(len: usize, mut next_line: F) -> std::result::Result<Option<Vec<String>>, E>
where
    F: FnMut(usize) -> std::result::Result<Option<String>, E>,
{
    let mut elements = Vec::new();
    while elements.len() < len {
        let Some(value) = next_line(elements.len() + 1)? else {
            return Ok(None);
        };
        let value = value.trim();
        if !value.is_empty() {
            elements.push(value.to_string());
        }
    }
    Ok(Some(elements))
}

/// Load a reference string from a text file.
///
/// The whole file is read and split the same way as
/// [`parse_reference_string`], so line breaks act as separators.
///
/// # Errors
/// - `Error::Io` if the file can't be read
pub fn load_reference_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let symbols = parse_reference_string(&contents);
    debug!("Loaded {} references from {}", symbols.len(), path.display());
    Ok(symbols)
}

fn parse_integer(field: &'static str, text: &str) -> Result<i64> {
    let text = text.trim();
    text.parse::<i64>().map_err(|_| Error::Parse {
        field,
        value: text.to_string(),
    })
}
