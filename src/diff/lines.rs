//! Line-level alignment of two texts.

use similar::{capture_diff_slices, Algorithm, ChangeTag};

/// LineEdit is one step of an edit script turning the left lines into the
/// right lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit<'a> {
    Unchanged(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

impl<'a> LineEdit<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            LineEdit::Unchanged(s) | LineEdit::Removed(s) | LineEdit::Added(s) => s,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, LineEdit::Unchanged(_))
    }
}

/// Computes a minimal edit script with Myers' algorithm.
///
/// Memory stays linear in the input size. Where the two sides diverge,
/// removals are listed before additions.
pub fn edit_script<'a, L, R>(left: &'a [L], right: &'a [R]) -> Vec<LineEdit<'a>>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left: Vec<&'a str> = left.iter().map(|line| line.as_ref()).collect();
    let right: Vec<&'a str> = right.iter().map(|line| line.as_ref()).collect();

    capture_diff_slices(Algorithm::Myers, &left, &right)
        .iter()
        .flat_map(|op| op.iter_changes(&left, &right))
        .map(|change| match change.tag() {
            ChangeTag::Equal => LineEdit::Unchanged(change.value()),
            ChangeTag::Delete => LineEdit::Removed(change.value()),
            ChangeTag::Insert => LineEdit::Added(change.value()),
        })
        .collect()
}
