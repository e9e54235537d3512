//! Structural comparison of two values.

use std::fmt;

use super::canonical::canonical_lines;
use super::lines::{edit_script, LineEdit};
use crate::value::Value;

/// DiffLine is one canonical line present on only one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    /// The line only exists in the right (new) value.
    Added(String),
    /// The line only exists in the left (old) value.
    Removed(String),
}

impl DiffLine {
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Added(s) | DiffLine::Removed(s) => s,
        }
    }

    /// Returns the marker used when printing the line: `+` or `-`.
    pub fn sign(&self) -> char {
        match self {
            DiffLine::Added(_) => '+',
            DiffLine::Removed(_) => '-',
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, DiffLine::Added(_))
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DiffLine::Removed(_))
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign(), self.text())
    }
}

/// Diff holds the changed lines between two values, in edit order.
///
/// An empty diff means the values are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    lines: Vec<DiffLine>,
}

impl Diff {
    pub fn new() -> Self {
        Diff { lines: Vec::new() }
    }

    /// Returns true if the compared values are equivalent.
    pub fn is_same(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter()
    }

    pub fn added_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_added()).count()
    }

    pub fn removed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_removed()).count()
    }
}

impl IntoIterator for Diff {
    type Item = DiffLine;
    type IntoIter = std::vec::IntoIter<DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Compares two values through their canonical text form.
///
/// Mapping key order never produces a difference; list order does. Lines
/// common to both sides are left out of the result.
pub fn diff(left: &Value, right: &Value) -> Diff {
    if left == right {
        return Diff::new();
    }

    let left_lines = canonical_lines(left);
    let right_lines = canonical_lines(right);

    let lines = edit_script(&left_lines, &right_lines)
        .into_iter()
        .filter_map(|edit| match edit {
            LineEdit::Unchanged(_) => None,
            LineEdit::Removed(text) => Some(DiffLine::Removed(text.to_string())),
            LineEdit::Added(text) => Some(DiffLine::Added(text.to_string())),
        })
        .collect();

    Diff { lines }
}
