//! # bt-assigned-numbers - Bluetooth assigned numbers as C tables
//!
//! Converts the Bluetooth SIG assigned-number databases (service,
//! characteristic and descriptor UUIDs, company identifiers and GAP
//! appearance values) into a C header of statically initialized arrays.
//!
//! ## Modules
//!
//! - **normalize**: turn raw JSON records into canonical rows
//! - **emit**: render rows as length-prefixed C array initializers
//! - **source**: obtain the raw documents (HTTP, directory or memory)
//! - **pipeline**: run every kind end to end and write the result
//!
//! ## Quick Start
//!
//! ```rust
//! use bt_assigned_numbers::{generate, MemorySource, RecordKind};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let source = MemorySource::new("inline")
//!     .with_document(RecordKind::ServiceUuids, json!([
//!         {"name": "Battery", "identifier": "org.bluetooth.service.battery_service", "uuid": "180F"}
//!     ]))
//!     .with_document(RecordKind::CharacteristicUuids, json!([]))
//!     .with_document(RecordKind::DescriptorUuids, json!([]))
//!     .with_document(RecordKind::CompanyIds, json!([{"code": 89, "name": "Nordic Semiconductor ASA"}]))
//!     .with_document(RecordKind::GapAppearance, json!([{"category": 0, "name": "Unknown"}]));
//!
//! let artifact = generate(&source, "2024-01-01 00:00:00")?;
//! assert!(artifact.text.contains("const int service_uuids_len = 1;"));
//! assert!(artifact.text.contains("\"0000180f-0000-1000-8000-00805f9b34fb\""));
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

pub mod emit;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod types;

// Re-export commonly used types for convenience
pub use emit::{emit_table, Field, Header, TableBlock, TableRow};
pub use error::{SchemaError, SourceError};
pub use normalize::{normalize, Table};
pub use pipeline::{current_timestamp, generate, write_atomic, Artifact};
pub use source::{DirSource, HttpSource, MemorySource, RecordSource};
pub use types::{
    AppearanceRecord, CompanyRecord, GeneratorConfig, OutputTarget, RecordKind, SourceConfig, UuidRecord,
};

/// Main entry point: generate according to `config` and write the result
pub fn run(config: &GeneratorConfig) -> Result<Artifact> {
    let source = source::from_config(&config.source);
    let timestamp = config.timestamp.clone().unwrap_or_else(current_timestamp);

    let artifact = generate(source.as_ref(), &timestamp)?;

    match &config.output {
        OutputTarget::File(path) => write_atomic(path, &artifact.text)?,
        OutputTarget::Stdout => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(artifact.text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_from_directory_to_file() {
        let input = tempfile::tempdir().unwrap();
        for kind in RecordKind::ALL {
            std::fs::write(input.path().join(kind.file_name()), "[]").unwrap();
        }
        let output = input.path().join("bt_assigned_numbers.h");

        let config = GeneratorConfig {
            source: SourceConfig::Directory { path: input.path().to_path_buf() },
            output: OutputTarget::File(output.clone()),
            timestamp: Some("pinned".to_string()),
        };

        let artifact = run(&config).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, artifact.text);
        assert!(written.contains("\n   pinned\n"));
        assert_eq!(artifact.tables.len(), 5);
    }
}
