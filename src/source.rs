//! Record sources: where the raw JSON documents come from

use crate::error::SourceError;
use crate::normalize::records_of;
use crate::types::{RecordKind, SourceConfig};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Supplies the raw record list of each kind
pub trait RecordSource {
    /// Human-readable origin, printed in the generated header
    fn describe(&self) -> String;

    fn fetch(&self, kind: RecordKind) -> Result<Vec<Value>, SourceError>;
}

/// Parse a raw document and unwrap its top-level array
pub fn parse_document(kind: RecordKind, mut bytes: Vec<u8>) -> Result<Vec<Value>, SourceError> {
    // simd-json parses in place, so keep a copy for the error path
    let original = bytes.clone();
    let document: Value = match simd_json::serde::from_slice(&mut bytes) {
        Ok(value) => value,
        Err(_) => serde_json::from_slice(&original)
            .map_err(|source| SourceError::Parse { kind, source })?,
    };

    Ok(records_of(kind, document)?)
}

/// Fetches documents over HTTP from a base URL
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpSource {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url_for(&self, kind: RecordKind) -> String {
        format!("{}/{}", self.base_url, kind.file_name())
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    fn fetch(&self, kind: RecordKind) -> Result<Vec<Value>, SourceError> {
        let url = self.url_for(kind);
        debug!(%kind, %url, "fetching document");

        let http_err = |source| SourceError::Http {
            kind,
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        let bytes = response.bytes().map_err(http_err)?;

        parse_document(kind, bytes.to_vec())
    }
}

/// Reads documents from a local directory laid out like the upstream `v1` tree
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSource { dir: dir.into() }
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl RecordSource for DirSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch(&self, kind: RecordKind) -> Result<Vec<Value>, SourceError> {
        let path = self.path_for(kind);
        debug!(%kind, path = %path.display(), "reading document");

        let bytes = std::fs::read(&path).map_err(|source| SourceError::Io {
            kind,
            path: path.clone(),
            source,
        })?;

        parse_document(kind, bytes)
    }
}

/// Documents held in memory, e.g. embedded fixtures
#[derive(Debug, Default)]
pub struct MemorySource {
    label: String,
    documents: HashMap<RecordKind, Value>,
}

impl MemorySource {
    pub fn new(label: impl Into<String>) -> Self {
        MemorySource {
            label: label.into(),
            documents: HashMap::new(),
        }
    }

    pub fn with_document(mut self, kind: RecordKind, document: Value) -> Self {
        self.documents.insert(kind, document);
        self
    }
}

impl RecordSource for MemorySource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self, kind: RecordKind) -> Result<Vec<Value>, SourceError> {
        let document = self
            .documents
            .get(&kind)
            .cloned()
            .ok_or(SourceError::Missing { kind })?;
        Ok(records_of(kind, document)?)
    }
}

/// Build the source selected by `config`
pub fn from_config(config: &SourceConfig) -> Box<dyn RecordSource> {
    match config {
        SourceConfig::Remote { base_url } => Box::new(HttpSource::new(base_url.clone())),
        SourceConfig::Directory { path } => Box::new(DirSource::new(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;

    #[test]
    fn test_parse_document_array() {
        let bytes = br#"[{"code": 0, "name": "Ericsson AB"}, {"code": 1, "name": "Nokia"}]"#.to_vec();
        let records = parse_document(RecordKind::CompanyIds, bytes).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], "Nokia");
    }

    #[test]
    fn test_parse_document_invalid_json() {
        let err = parse_document(RecordKind::ServiceUuids, b"[{\"uuid\": ".to_vec()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { kind: RecordKind::ServiceUuids, .. }));
    }

    #[test]
    fn test_parse_document_not_array() {
        let err = parse_document(RecordKind::GapAppearance, br#"{"category": 1}"#.to_vec()).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Schema(SchemaError::NotAnArray { kind: RecordKind::GapAppearance })
        ));
    }

    #[test]
    fn test_http_urls() {
        let source = HttpSource::new("https://example.com/v1/");
        assert_eq!(
            source.url_for(RecordKind::GapAppearance),
            "https://example.com/v1/gap_appearance.json"
        );
        assert_eq!(source.describe(), "https://example.com/v1");
    }

    #[test]
    fn test_dir_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch(RecordKind::DescriptorUuids).unwrap_err();
        assert!(matches!(err, SourceError::Io { kind: RecordKind::DescriptorUuids, .. }));
        assert!(err.to_string().contains("descriptor_uuids.json"));
    }

    #[test]
    fn test_dir_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("company_ids.json"),
            r#"[{"code": 76, "name": "Apple, Inc."}]"#,
        )
        .unwrap();

        let records = DirSource::new(dir.path()).fetch(RecordKind::CompanyIds).unwrap();
        assert_eq!(records, vec![json!({"code": 76, "name": "Apple, Inc."})]);
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new("fixture")
            .with_document(RecordKind::CompanyIds, json!([{"code": 2, "name": "Intel Corp."}]));
        assert_eq!(source.fetch(RecordKind::CompanyIds).unwrap().len(), 1);
        assert!(matches!(
            source.fetch(RecordKind::ServiceUuids),
            Err(SourceError::Missing { kind: RecordKind::ServiceUuids })
        ));
    }

    #[test]
    fn test_from_config_directory() {
        let source = from_config(&SourceConfig::Directory { path: PathBuf::from("data/v1") });
        assert_eq!(source.describe(), "data/v1");
    }
}
