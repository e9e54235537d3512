//! Pairing manifests of an old and a new stream by identity.

use tracing::debug;

use crate::manifest::{ManifestIdentity, ManifestRecord};

/// ReconcileEntry classifies one manifest of either stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReconcileEntry<'a> {
    /// A right manifest and the first left manifest sharing its identity.
    Matched {
        left: &'a ManifestRecord,
        right: &'a ManifestRecord,
    },
    /// A right manifest with no counterpart on the left.
    AddedOnRight(&'a ManifestRecord),
    /// A left manifest with no counterpart on the right.
    RemovedOnLeft(&'a ManifestRecord),
}

impl<'a> ReconcileEntry<'a> {
    /// Returns the identity the entry was classified under.
    pub fn identity(&self) -> &'a ManifestIdentity {
        match *self {
            ReconcileEntry::Matched { right, .. } => right.identity(),
            ReconcileEntry::AddedOnRight(record) | ReconcileEntry::RemovedOnLeft(record) => {
                record.identity()
            }
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ReconcileEntry::Matched { .. })
    }
}

/// Reconciliation is the ordered outcome of [`reconcile`].
///
/// Entries for the right stream come first, in right order, followed by
/// the left-only entries in left order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation<'a> {
    entries: Vec<ReconcileEntry<'a>>,
}

impl<'a> Reconciliation<'a> {
    pub fn new() -> Self {
        Reconciliation {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ReconcileEntry<'a>) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReconcileEntry<'a>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ReconcileEntry<'a>] {
        &self.entries
    }

    /// Returns the matched (left, right) pairs in order.
    pub fn matched(&self) -> impl Iterator<Item = (&'a ManifestRecord, &'a ManifestRecord)> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            ReconcileEntry::Matched { left, right } => Some((*left, *right)),
            _ => None,
        })
    }

    pub fn added(&self) -> impl Iterator<Item = &'a ManifestRecord> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            ReconcileEntry::AddedOnRight(record) => Some(*record),
            _ => None,
        })
    }

    pub fn removed(&self) -> impl Iterator<Item = &'a ManifestRecord> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            ReconcileEntry::RemovedOnLeft(record) => Some(*record),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for Reconciliation<'a> {
    type Item = ReconcileEntry<'a>;
    type IntoIter = std::vec::IntoIter<ReconcileEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn find_by_identity<'a>(
    records: &'a [ManifestRecord],
    identity: &ManifestIdentity,
) -> Option<&'a ManifestRecord> {
    records.iter().find(|record| record.identity() == identity)
}

/// Reconciles an old (`left`) and a new (`right`) manifest sequence.
///
/// Every right manifest is paired with the first left manifest of the same
/// identity, or reported as added. Then every left manifest whose identity
/// never occurs on the right is reported as removed. Repeated identities are
/// not deduplicated: later duplicates on the left are never paired.
pub fn reconcile<'a>(left: &'a [ManifestRecord], right: &'a [ManifestRecord]) -> Reconciliation<'a> {
    let mut result = Reconciliation::new();

    for record in right {
        let entry = match find_by_identity(left, record.identity()) {
            Some(counterpart) => ReconcileEntry::Matched {
                left: counterpart,
                right: record,
            },
            None => ReconcileEntry::AddedOnRight(record),
        };
        debug!(identity = %record.identity(), matched = entry.is_matched(), "reconciled right manifest");
        result.push(entry);
    }

    for record in left {
        if find_by_identity(right, record.identity()).is_none() {
            debug!(identity = %record.identity(), "left manifest has no counterpart");
            result.push(ReconcileEntry::RemovedOnLeft(record));
        }
    }

    result
}
