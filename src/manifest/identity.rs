//! Identity keys for matching manifests across two streams.

use std::fmt;

use super::header::ManifestHeader;

/// ManifestIdentity is the (kind, name, namespace) triple of a resource.
///
/// Equality is exact and case-sensitive on all three fields. An empty
/// namespace denotes a cluster-scoped resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManifestIdentity {
    kind: String,
    name: String,
    namespace: String,
}

impl ManifestIdentity {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        ManifestIdentity {
            kind: kind.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns true if the resource carries no namespace.
    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl fmt::Display for ManifestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.kind, self.name, self.namespace)
    }
}

/// Extracts the identity key of a decoded manifest header.
///
/// Missing kind, name or namespace become empty strings; this never fails.
pub fn extract_identity(header: &ManifestHeader) -> ManifestIdentity {
    let metadata = header.metadata.as_ref();
    ManifestIdentity {
        kind: header.kind.clone().unwrap_or_default(),
        name: metadata
            .and_then(|m| m.name.clone())
            .unwrap_or_default(),
        namespace: metadata
            .and_then(|m| m.namespace.clone())
            .unwrap_or_default(),
    }
}

impl From<&ManifestHeader> for ManifestIdentity {
    fn from(header: &ManifestHeader) -> Self {
        extract_identity(header)
    }
}
