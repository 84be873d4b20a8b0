use crate::diff::{Diff, Operation};
use thiserror::Error;

/// An error returned when [`apply`]ing a sequence of diffs to a base text fails
///
/// [`apply`]: fn.apply.html
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// The 1-based record whose old text isn't found in the base at its position
    #[error("error applying record #{0}: text doesn't match the base")]
    Mismatch(usize),
    /// The diff ran out before the base did
    #[error("base has {0} bytes the diff doesn't account for")]
    TrailingBase(usize),
}

/// Rebuild the new text from a sequence of diffs.
///
/// Concatenates every `Equal` and `Insert` record and skips `Delete`s. The sequence isn't checked in
/// any way, see [`apply`] for that.
///
/// ```
/// use ediff::{apply_diff, Diff};
///
/// let diffs = [Diff::equal("ab"), Diff::delete("c"), Diff::insert("X")];
/// assert_eq!(apply_diff(&diffs), "abX");
/// ```
pub fn apply_diff(diffs: &[Diff]) -> String {
    image(diffs, Operation::Insert)
}

/// Rebuild the old text from a sequence of diffs, the mirror image of [`apply_diff`]
pub fn revert_diff(diffs: &[Diff]) -> String {
    image(diffs, Operation::Delete)
}

fn image(diffs: &[Diff], side: Operation) -> String {
    diffs
        .iter()
        .filter(|diff| diff.is_equal() || diff.operation() == side)
        .map(Diff::text)
        .collect()
}

/// Apply a sequence of diffs to a base text
///
/// The `Equal` and `Delete` records have to spell out `base_image` exactly, otherwise the diff was
/// made against some other text and an error is returned.
///
/// ```
/// use ediff::{apply, generate_diff};
///
/// let diffs = generate_diff("The quick brown fox", "The quack brown box");
/// assert_eq!(apply("The quick brown fox", &diffs).unwrap(), "The quack brown box");
/// assert!(apply("The lazy dog", &diffs).is_err());
/// ```
pub fn apply(base_image: &str, diffs: &[Diff]) -> Result<String, ApplyError> {
    let mut image = String::with_capacity(base_image.len());
    let mut rest = base_image;

    for (i, diff) in diffs.iter().enumerate() {
        match diff.operation() {
            Operation::Equal => {
                rest = rest.strip_prefix(diff.text()).ok_or(ApplyError::Mismatch(i + 1))?;
                image.push_str(diff.text());
            }
            Operation::Delete => {
                rest = rest.strip_prefix(diff.text()).ok_or(ApplyError::Mismatch(i + 1))?;
            }
            Operation::Insert => image.push_str(diff.text()),
        }
    }

    if !rest.is_empty() {
        return Err(ApplyError::TrailingBase(rest.len()));
    }

    Ok(image)
}
