//! Report module - Decodes, reconciles and diffs two manifest streams.

mod compare;


pub use compare::*;
