//! The typed header every manifest is expected to carry.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value as Yaml};

/// ManifestHeader is the lightweight typed view of a manifest.
///
/// Only the fields used for identification and shape checking are typed;
/// the full document is compared through its generic [`crate::Value`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManifestHeader {
    #[serde(rename = "apiVersion", deserialize_with = "scalar_string")]
    pub api_version: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub kind: Option<String>,
    pub metadata: Option<ObjectMeta>,
    pub spec: Option<Mapping>,
}

/// ObjectMeta holds the metadata fields of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub namespace: Option<String>,
    pub labels: Option<Mapping>,
    pub annotations: Option<Mapping>,
}

/// Reads a plain scalar as text, so `name: 123` names a resource "123".
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Yaml>::deserialize(deserializer)? {
        None | Some(Yaml::Null) => Ok(None),
        Some(Yaml::String(s)) => Ok(Some(s)),
        Some(Yaml::Number(n)) => Ok(Some(n.to_string())),
        Some(Yaml::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(D::Error::custom("expected a scalar")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_decodes_known_fields() {
        let yaml = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: default
  labels:
    app: web
    tier: frontend
  annotations:
    owner: team
spec:
  replicas: 3
status:
  ready: true
"#;
        let header: ManifestHeader = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(header.api_version.as_deref(), Some("apps/v1"));
        assert_eq!(header.kind.as_deref(), Some("Deployment"));
        let metadata = header.metadata.as_ref().unwrap();
        assert_eq!(metadata.labels.as_ref().map(Mapping::len), Some(2));
        assert!(header.spec.is_some());
    }

    #[test]
    fn test_header_tolerates_nulls() {
        let header: ManifestHeader = serde_yaml::from_str("kind: Pod\nmetadata:\n  name:\n").unwrap();
        assert_eq!(header.metadata.unwrap().name, None);
        assert_eq!(header.api_version, None);
    }

    #[test]
    fn test_header_reads_scalars_as_text() {
        let header: ManifestHeader =
            serde_yaml::from_str("kind: Pod\nmetadata:\n  name: 123\n  namespace: true\n").unwrap();
        let metadata = header.metadata.unwrap();
        assert_eq!(metadata.name.as_deref(), Some("123"));
        assert_eq!(metadata.namespace.as_deref(), Some("true"));
    }

    #[test]
    fn test_header_rejects_wrong_shapes() {
        assert!(serde_yaml::from_str::<ManifestHeader>("kind: Pod\nspec: [1, 2]\n").is_err());
        assert!(serde_yaml::from_str::<ManifestHeader>("kind: Pod\nmetadata: name\n").is_err());
        assert!(serde_yaml::from_str::<ManifestHeader>("kind: {a: b}\n").is_err());
    }
}
