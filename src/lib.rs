//! Tools for finding, storing and replaying character level differences between texts
//!
//! [`generate_diff`] aligns two texts with Myers' linear space algorithm and returns the edits as
//! a sequence of [`Diff`]s. The sequence can be written out with [`serialize`], read back in with
//! [`deserialize`] and replayed with [`apply_diff`] or, checked against the original text,
//! [`apply`].
//!
//! ```
//! use ediff::{apply, deserialize, generate_diff, serialize};
//!
//! let old = "The quick brown fox";
//! let new = "The quack brown box";
//!
//! let diffs = generate_diff(old, new);
//! let stored = serialize(&diffs);
//! assert_eq!(stored, " The+qu\n-i\n+a\n ck+brown+\n-f\n+b\n ox\n");
//!
//! let diffs = deserialize(&stored).unwrap();
//! assert_eq!(apply(old, &diffs).unwrap(), new);
//! ```

mod apply;
mod diff;
mod patch;

pub use apply::{apply, apply_diff, revert_diff, ApplyError};
pub use diff::{generate_diff, Diff, Operation};
pub use patch::{deserialize, serialize, DiffFormatter, ParsePatchError, Patch};
