//! The line oriented, serialized form of a sequence of diffs
//!
//! Every record takes up one line: a tag (`' '` for `Equal`, `-` for `Delete` and `+` for
//! `Insert`) directly followed by the record's text in `application/x-www-form-urlencoded` form.
//!
//! ```text
//!  ab
//! -c
//! +X
//!  abc%0A
//! ```

mod format;
mod parse;

pub use format::DiffFormatter;
pub use parse::ParsePatchError;

use crate::diff::Diff;
use std::{fmt, str::FromStr};

/// An owned sequence of diffs, ready to be written out or read back in
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Patch {
    diffs: Vec<Diff>,
}

impl Patch {
    pub fn new(diffs: Vec<Diff>) -> Self {
        Self { diffs }
    }

    pub fn diffs(&self) -> &[Diff] {
        &self.diffs
    }

    pub fn into_diffs(self) -> Vec<Diff> {
        self.diffs
    }
}

impl From<Vec<Diff>> for Patch {
    fn from(diffs: Vec<Diff>) -> Self {
        Self::new(diffs)
    }
}

impl FromStr for Patch {
    type Err = ParsePatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s).map(Self::new)
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DiffFormatter::new().fmt_diffs(&self.diffs))
    }
}

/// Write `diffs` out in their serialized form
///
/// ```
/// use ediff::{serialize, Diff};
///
/// let diffs = [Diff::equal("a b"), Diff::insert("x+y\n")];
/// assert_eq!(serialize(&diffs), " a+b\n+x%2By%0A\n");
/// ```
pub fn serialize(diffs: &[Diff]) -> String {
    DiffFormatter::new().fmt_diffs(diffs).to_string()
}

/// Read back diffs written by [`serialize`]
///
/// Blank lines are skipped. Nothing is returned unless every line parses.
pub fn deserialize(input: &str) -> Result<Vec<Diff>, ParsePatchError> {
    parse::parse(input)
}
