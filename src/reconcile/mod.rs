//! Reconcile module - Matches manifests of two streams by identity.

mod reconciliation;


pub use reconciliation::*;
