use std::{cmp, fmt};

mod bisect;

#[cfg(test)]
mod tests;

/// The kind of edit a [`Diff`] describes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Text present in both the old and the new text
    Equal,
    /// Text only present in the new text
    Insert,
    /// Text only present in the old text
    Delete,
}

impl Operation {
    /// The character that starts a serialized line for this operation
    pub fn tag(self) -> char {
        match self {
            Operation::Equal => ' ',
            Operation::Insert => '+',
            Operation::Delete => '-',
        }
    }

    /// Inverse of [`Operation::tag`]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            ' ' => Some(Operation::Equal),
            '+' => Some(Operation::Insert),
            '-' => Some(Operation::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Equal => "Equal",
            Operation::Insert => "Insert",
            Operation::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// A single edit: an [`Operation`] and the text it applies to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diff {
    operation: Operation,
    text: String,
}

impl Diff {
    pub fn new<S: Into<String>>(operation: Operation, text: S) -> Self {
        Self {
            operation,
            text: text.into(),
        }
    }

    pub fn equal<S: Into<String>>(text: S) -> Self {
        Self::new(Operation::Equal, text)
    }

    pub fn insert<S: Into<String>>(text: S) -> Self {
        Self::new(Operation::Insert, text)
    }

    pub fn delete<S: Into<String>>(text: S) -> Self {
        Self::new(Operation::Delete, text)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_equal(&self) -> bool {
        self.operation == Operation::Equal
    }

    pub fn is_insert(&self) -> bool {
        self.operation == Operation::Insert
    }

    pub fn is_delete(&self) -> bool {
        self.operation == Operation::Delete
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diff({},\"{}\")", self.operation, self.text)
    }
}

/// Compute the edits that turn `old` into `new`.
///
/// The result is an alignment of the two texts: the `Equal` and `Delete`
/// records concatenate to `old`, the `Equal` and `Insert` records concatenate
/// to `new`. Texts are compared one `char` at a time and no record is ever
/// empty.
///
/// ```
/// use ediff::{generate_diff, Diff};
///
/// let diffs = generate_diff("abcd", "bc");
/// assert_eq!(
///     diffs,
///     vec![Diff::delete("a"), Diff::equal("bc"), Diff::delete("d")]
/// );
/// ```
pub fn generate_diff(old: &str, new: &str) -> Vec<Diff> {
    let mut builder = DiffBuilder::default();

    // Pending work, popped from the back. Pushing the second half of a split before the first
    // keeps the output in order without recursing.
    let mut pending = vec![Work::Diff(old, new)];
    while let Some(work) = pending.pop() {
        match work {
            Work::Emit(operation, text) => builder.push(operation, text),
            Work::Diff(old, new) => diff_pair(old, new, &mut builder, &mut pending),
        }
    }

    builder.finish()
}

enum Work<'a> {
    Diff(&'a str, &'a str),
    Emit(Operation, &'a str),
}

/// Collects records, materializing owned text only for non-empty segments
#[derive(Default)]
struct DiffBuilder {
    diffs: Vec<Diff>,
}

impl DiffBuilder {
    fn push(&mut self, operation: Operation, text: &str) {
        if !text.is_empty() {
            self.diffs.push(Diff::new(operation, text));
        }
    }

    fn finish(self) -> Vec<Diff> {
        self.diffs
    }
}

fn diff_pair<'a>(
    old: &'a str,
    new: &'a str,
    builder: &mut DiffBuilder,
    pending: &mut Vec<Work<'a>>,
) {
    if old == new {
        builder.push(Operation::Equal, old);
        return;
    }

    let prefix_len = common_prefix_len(old, new);
    let (prefix, old) = old.split_at(prefix_len);
    let new = &new[prefix_len..];

    let suffix_len = common_suffix_len(old, new);
    let (old, suffix) = old.split_at(old.len() - suffix_len);
    let new = &new[..new.len() - suffix_len];

    builder.push(Operation::Equal, prefix);

    match compute(old, new) {
        Compute::Done(diffs) => {
            for (operation, text) in diffs {
                builder.push(operation, text);
            }
            builder.push(Operation::Equal, suffix);
        }
        Compute::Split((old_a, new_a), (old_b, new_b)) => {
            pending.push(Work::Emit(Operation::Equal, suffix));
            pending.push(Work::Diff(old_b, new_b));
            pending.push(Work::Diff(old_a, new_a));
        }
    }
}

enum Compute<'a> {
    Done(Vec<(Operation, &'a str)>),
    Split((&'a str, &'a str), (&'a str, &'a str)),
}

// Diff two texts which share no common prefix or suffix.
fn compute<'a>(old: &'a str, new: &'a str) -> Compute<'a> {
    if old.is_empty() {
        return Compute::Done(vec![(Operation::Insert, new)]);
    }

    if new.is_empty() {
        return Compute::Done(vec![(Operation::Delete, old)]);
    }

    let old_len = old.chars().count();
    let new_len = new.chars().count();
    let (long, short, short_len, operation) = if old_len > new_len {
        (old, new, new_len, Operation::Delete)
    } else {
        (new, old, old_len, Operation::Insert)
    };

    // When one text is contained in the other the shortest edit is immediate
    if let Some(idx) = long.find(short) {
        return Compute::Done(vec![
            (operation, &long[..idx]),
            (Operation::Equal, short),
            (operation, &long[idx + short.len()..]),
        ]);
    }

    // A single char which isn't found in the other text can't share anything with it
    if short_len == 1 {
        return Compute::Done(vec![(Operation::Delete, old), (Operation::Insert, new)]);
    }

    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    match bisect::find_midpoint(&old_chars, &new_chars) {
        Some((x, y)) if !is_corner(x, y, old_chars.len(), new_chars.len()) => {
            tracing::trace!(x, y, "splitting at midpoint");
            let (old_a, old_b) = old.split_at(char_offset(old, x));
            let (new_a, new_b) = new.split_at(char_offset(new, y));
            Compute::Split((old_a, new_a), (old_b, new_b))
        }
        midpoint => {
            tracing::trace!(?midpoint, "no usable midpoint, replacing the whole range");
            Compute::Done(vec![(Operation::Delete, old), (Operation::Insert, new)])
        }
    }
}

// Splitting at a corner would leave one half identical to the input.
fn is_corner(x: usize, y: usize, n: usize, m: usize) -> bool {
    (x == 0 && y == 0) || (x >= n && y >= m)
}

// Byte offset of the `n`th char of `text`, clamped to the end of the text.
fn char_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Length in bytes of the longest common prefix, never splitting a char
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, c1), c2)| c1 != c2)
        .map_or_else(|| cmp::min(a.len(), b.len()), |((offset, _), _)| offset)
}

/// Length in bytes of the longest common suffix, never splitting a char
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .rev()
        .zip(b.chars().rev())
        .find(|((_, c1), c2)| c1 != c2)
        .map_or_else(
            || cmp::min(a.len(), b.len()),
            |((offset, c), _)| a.len() - offset - c.len_utf8(),
        )
}
