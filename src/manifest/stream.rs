//! Splitting and decoding multi-document manifest streams.

use tracing::{debug, trace};

use super::header::ManifestHeader;
use super::identity::{extract_identity, ManifestIdentity};
use crate::error::{Error, Result};
use crate::value::Value;

/// ManifestRecord is one successfully decoded document of a stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRecord {
    /// Position of the document within its stream, counting from zero.
    pub index: usize,
    pub identity: ManifestIdentity,
    pub header: ManifestHeader,
    pub value: Value,
    pub raw: String,
}

impl ManifestRecord {
    pub fn identity(&self) -> &ManifestIdentity {
        &self.identity
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// DecodedStream holds the records of one stream and how many were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedStream {
    pub records: Vec<ManifestRecord>,
    pub skipped: usize,
}

impl DecodedStream {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestRecord> {
        self.records.iter()
    }
}

/// Separator classifies a line that starts a new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `---` alone, or followed by whitespace and a comment.
    Bare,
    /// `---` followed by document content, as in `--- {a: 1}` or `--- !!map`.
    Inline,
}

fn separator(line: &str) -> Option<Separator> {
    let rest = line.strip_prefix("---")?;
    let trimmed = rest.trim();
    if trimmed.is_empty() {
        Some(Separator::Bare)
    } else if !rest.starts_with(char::is_whitespace) {
        None
    } else if trimmed.starts_with('#') {
        Some(Separator::Bare)
    } else {
        Some(Separator::Inline)
    }
}

/// Splits a raw stream into document segments at separator lines.
///
/// Segment text keeps its original line endings. A separator on the first
/// line produces an empty leading segment. A separator carrying content
/// stays at the head of the segment it opens, where the YAML parser reads
/// it as an explicit document start.
pub fn split_documents(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        match separator(line) {
            Some(Separator::Bare) => {
                segments.push(&text[start..offset]);
                start = offset + line.len();
            }
            Some(Separator::Inline) => {
                segments.push(&text[start..offset]);
                start = offset;
            }
            None => {}
        }
        offset += line.len();
    }
    segments.push(&text[start..]);
    segments
}

/// Returns true if a segment holds no YAML content at all.
fn is_blank(segment: &str) -> bool {
    segment.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Decodes one document segment.
///
/// Returns `Ok(None)` for empty documents. The typed header and the
/// generic tree come from the same parse, so a record always has both.
pub fn decode_document(index: usize, raw: &str) -> Result<Option<ManifestRecord>> {
    if is_blank(raw) {
        return Ok(None);
    }

    let mut yaml: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|source| Error::Decode { index, source })?;
    if !yaml.is_mapping() {
        return Err(Error::shape(index, "document is not a mapping"));
    }
    yaml.apply_merge().map_err(|source| Error::Decode { index, source })?;

    let header: ManifestHeader = serde_yaml::from_value(yaml.clone())
        .map_err(|e| Error::shape(index, format!("unexpected manifest layout: {}", e)))?;
    let value = Value::from_yaml_value(yaml).map_err(|e| Error::shape(index, e.to_string()))?;

    Ok(Some(ManifestRecord {
        index,
        identity: extract_identity(&header),
        header,
        value,
        raw: raw.to_string(),
    }))
}

/// Splits and decodes a whole stream, dropping documents that fail to decode.
pub fn decode_stream(text: &str) -> DecodedStream {
    let mut decoded = DecodedStream::default();

    for (index, segment) in split_documents(text).into_iter().enumerate() {
        match decode_document(index, segment) {
            Ok(Some(record)) => decoded.records.push(record),
            Ok(None) => trace!(index, "skipping empty document"),
            Err(err) => {
                debug!(index, error = %err, "dropping undecodable document");
                decoded.skipped += 1;
            }
        }
    }

    decoded
}
