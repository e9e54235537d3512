//! Manifest module - Identity keys, typed headers and stream decoding.
//!
//! A stream is split into documents, each document is decoded once into a
//! typed [`ManifestHeader`] and a generic [`crate::Value`], and documents that
//! fail to decode are dropped from the working set.

mod header;
mod identity;
mod stream;

pub use header::*;
pub use identity::*;
pub use stream::*;
