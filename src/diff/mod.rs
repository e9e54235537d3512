//! Diff module - Structural comparison of two value trees.
//!
//! Both trees are rendered to a canonical, key-sorted text form and the
//! two renderings are aligned line by line. Only lines unique to one side
//! are reported.

mod canonical;
mod lines;
mod structural;

#[cfg(test)]
mod diff_test;

pub use canonical::*;
pub use lines::*;
pub use structural::*;
