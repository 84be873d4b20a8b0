//! Parse the serialized form of a sequence of diffs

use crate::diff::{Diff, Operation};
use percent_encoding::percent_decode;
use thiserror::Error;

type Result<T, E = ParsePatchError> = std::result::Result<T, E>;

/// An error returned when a serialized diff can't be read back
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePatchError {
    /// A line starts with something other than `' '`, `-` or `+`
    #[error("error parsing diff: line {line} has unknown tag {tag:?}")]
    UnknownTag { line: usize, tag: char },
    /// A line's text doesn't decode to valid UTF-8
    #[error("error parsing diff: line {line} doesn't decode to valid UTF-8")]
    InvalidUtf8 { line: usize },
}

pub(super) fn parse(input: &str) -> Result<Vec<Diff>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line).transpose())
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<Option<Diff>> {
    let mut chars = line.chars();
    let Some(tag) = chars.next() else {
        return Ok(None);
    };

    let operation = Operation::from_tag(tag).ok_or(ParsePatchError::UnknownTag {
        line: number,
        tag,
    })?;
    let text = decode(chars.as_str()).ok_or(ParsePatchError::InvalidUtf8 { line: number })?;

    Ok(Some(Diff::new(operation, text)))
}

// Form decoding: `+` is a space, everything else is plain percent decoding. Malformed escapes are
// left as they are.
fn decode(payload: &str) -> Option<String> {
    let bytes: Vec<u8> = payload
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&bytes)
        .decode_utf8()
        .ok()
        .map(|text| text.into_owned())
}
