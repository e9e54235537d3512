//! Comparing two manifest streams end to end.

use tracing::debug;

use crate::diff::{diff, Diff};
use crate::manifest::{decode_stream, DecodedStream, ManifestIdentity};
use crate::reconcile::{reconcile, ReconcileEntry};

/// EntryStatus is the outcome for one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Present on both sides with differing content.
    Changed(Diff),
    /// Present on both sides with equivalent content.
    Identical,
    /// Present only in the right (new) stream.
    OnlyInRight,
    /// Present only in the left (old) stream.
    OnlyInLeft,
}

/// ReportEntry is the outcome for one manifest identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub identity: ManifestIdentity,
    pub status: EntryStatus,
}

/// Summary counts the entries of a report by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub changed: usize,
    pub identical: usize,
    pub only_in_left: usize,
    pub only_in_right: usize,
    /// Documents of the left stream dropped because they failed to decode.
    pub skipped_left: usize,
    /// Documents of the right stream dropped because they failed to decode.
    pub skipped_right: usize,
}

impl Summary {
    /// Returns true if the streams hold equivalent manifests.
    pub fn is_same(&self) -> bool {
        self.changed == 0 && self.only_in_left == 0 && self.only_in_right == 0
    }
}

/// Report is the ordered result of comparing two streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
    summary: Summary,
}

impl Report {
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    fn push(&mut self, identity: ManifestIdentity, status: EntryStatus) {
        match &status {
            EntryStatus::Changed(_) => self.summary.changed += 1,
            EntryStatus::Identical => self.summary.identical += 1,
            EntryStatus::OnlyInRight => self.summary.only_in_right += 1,
            EntryStatus::OnlyInLeft => self.summary.only_in_left += 1,
        }
        self.entries.push(ReportEntry { identity, status });
    }
}

/// Compares two raw manifest streams, treating `right` as the newer one.
pub fn compare_streams(left: &str, right: &str) -> Report {
    let left = decode_stream(left);
    let right = decode_stream(right);
    debug!(
        left = left.len(),
        right = right.len(),
        skipped_left = left.skipped,
        skipped_right = right.skipped,
        "decoded manifest streams"
    );
    compare_decoded(&left, &right)
}

/// Compares two already decoded streams.
pub fn compare_decoded(left: &DecodedStream, right: &DecodedStream) -> Report {
    let mut report = Report::default();
    report.summary.skipped_left = left.skipped;
    report.summary.skipped_right = right.skipped;

    for entry in reconcile(&left.records, &right.records) {
        let identity = entry.identity().clone();
        let status = match entry {
            ReconcileEntry::Matched { left, right } => {
                let changes = diff(left.value(), right.value());
                if changes.is_same() {
                    EntryStatus::Identical
                } else {
                    debug!(%identity, lines = changes.len(), "manifest changed");
                    EntryStatus::Changed(changes)
                }
            }
            ReconcileEntry::AddedOnRight(_) => EntryStatus::OnlyInRight,
            ReconcileEntry::RemovedOnLeft(_) => EntryStatus::OnlyInLeft,
        };
        report.push(identity, status);
    }

    report
}
