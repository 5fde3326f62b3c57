//! Full header generation: source -> normalize -> emit -> assemble

use crate::emit::{emit, render_document, Header, TableBlock};
use crate::normalize::normalize;
use crate::source::RecordSource;
use crate::types::RecordKind;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Timestamp format for the header line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A fully rendered header file
#[derive(Debug, Clone)]
pub struct Artifact {
    pub text: String,

    /// Emitted tables in document order
    pub tables: Vec<TableBlock>,
}

impl Artifact {
    /// Declared length of the table named `table_name`
    pub fn count(&self, table_name: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.table_name() == table_name)
            .map(|t| t.count())
    }
}

/// Render every kind of `source` into one header.
///
/// Each kind is fetched and normalized completely before it is emitted. The
/// first failure aborts the run and nothing is returned.
pub fn generate(source: &dyn RecordSource, timestamp: &str) -> Result<Artifact> {
    let mut tables = Vec::with_capacity(RecordKind::ALL.len());

    for kind in RecordKind::ALL {
        let records = source
            .fetch(kind)
            .with_context(|| format!("Failed to fetch {}", kind.file_name()))?;
        let fetched = records.len();

        let table = normalize(kind, &records)
            .with_context(|| format!("Failed to normalize {}", kind.file_name()))?;
        let block = emit(&table);

        info!(%kind, records = fetched, rows = block.count(), "emitted table");
        tables.push(block);
    }

    let header = Header::new(source.describe(), timestamp);
    let text = render_document(&header, &tables);

    Ok(Artifact { text, tables })
}

/// Replace `path` with `contents` via a sibling temporary file
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = std::fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {:?}", temp_path))?;

    if let Err(err) = finalize(file, &temp_path, path, contents) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(err);
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

fn finalize(mut file: std::fs::File, temp_path: &Path, path: &Path, contents: &str) -> Result<()> {
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write temp file: {:?}", temp_path))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file: {:?}", temp_path))?;
    drop(file);

    std::fs::rename(temp_path, path)
        .with_context(|| format!("Failed to move output into place: {:?}", path))
}
