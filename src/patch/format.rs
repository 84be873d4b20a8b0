use crate::diff::Diff;
#[cfg(feature = "color")]
use crate::diff::Operation;
#[cfg(feature = "color")]
use anstyle::{AnsiColor, Style};
use std::fmt::{Display, Formatter, Result};

/// Struct used to adjust the formatting of a sequence of diffs
#[derive(Debug, Default)]
pub struct DiffFormatter {
    #[cfg(feature = "color")]
    with_color: bool,
}

impl DiffFormatter {
    /// Construct a new formatter which writes the plain serialized form
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable formatting with color, for display in a terminal
    ///
    /// The escape codes don't survive [`deserialize`](crate::deserialize), so this is meant for
    /// human eyes only.
    #[cfg(feature = "color")]
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Returns a `Display` impl which can be used to print a sequence of diffs
    pub fn fmt_diffs<'a>(&'a self, diffs: &'a [Diff]) -> impl Display + 'a {
        DiffsDisplay { f: self, diffs }
    }

    fn fmt_diff<'a>(&'a self, diff: &'a Diff) -> impl Display + 'a {
        DiffDisplay { f: self, diff }
    }

    #[cfg(feature = "color")]
    fn style(&self, operation: Operation) -> Style {
        if !self.with_color {
            return Style::new();
        }

        match operation {
            Operation::Equal => Style::new(),
            Operation::Delete => Style::new().fg_color(Some(AnsiColor::Red.into())),
            Operation::Insert => Style::new().fg_color(Some(AnsiColor::Green.into())),
        }
    }
}

struct DiffsDisplay<'a> {
    f: &'a DiffFormatter,
    diffs: &'a [Diff],
}

impl Display for DiffsDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for diff in self.diffs {
            write!(f, "{}", self.f.fmt_diff(diff))?;
        }

        Ok(())
    }
}

struct DiffDisplay<'a> {
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    f: &'a DiffFormatter,
    diff: &'a Diff,
}

impl Display for DiffDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        #[cfg(feature = "color")]
        let style = self.f.style(self.diff.operation());
        #[cfg(feature = "color")]
        write!(f, "{}", style.render())?;

        write!(f, "{}", self.diff.operation().tag())?;
        for chunk in form_urlencoded::byte_serialize(self.diff.text().as_bytes()) {
            f.write_str(chunk)?;
        }

        #[cfg(feature = "color")]
        write!(f, "{}", style.render_reset())?;

        writeln!(f)
    }
}
