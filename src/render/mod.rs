//! Render module - Console presentation of comparison reports.
//!
//! Colouring is a [`Styler`] value handed to the renderer; nothing outside
//! this module knows about terminal styles.

mod styler;
mod text;

pub use styler::*;
pub use text::*;
