//! # Manifest Diff
//!
//! Compares two multi-document Kubernetes manifest streams resource by
//! resource.
//!
//! Manifests are matched across the two streams by their (kind, name,
//! namespace) identity. Every matched pair is compared structurally, with
//! mapping key order ignored and list order respected, and manifests found
//! on only one side are reported as added or removed.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of decoded YAML documents
//! - [`manifest`] - Identity keys, typed headers and stream decoding
//! - [`reconcile`] - Matching manifests of two streams by identity
//! - [`diff`] - Structural, line-oriented comparison of two value trees
//! - [`report`] - End-to-end comparison of two streams
//! - [`render`] - Console presentation of reports

pub mod diff;
pub mod error;
pub mod manifest;
pub mod reconcile;
pub mod render;
pub mod report;
pub mod value;

pub use diff::{diff, Diff, DiffLine};
pub use error::{Error, Result};
pub use manifest::{
    decode_document, decode_stream, extract_identity, split_documents, ManifestHeader,
    ManifestIdentity, ManifestRecord,
};
pub use reconcile::{reconcile, ReconcileEntry, Reconciliation};
pub use report::{compare_streams, EntryStatus, Report, ReportEntry, Summary};
pub use value::Value;
