//! Normalization of raw assigned-number records
//!
//! Each upstream document has its own record shape. This module turns them
//! into the canonical fixed-field records the emitter renders:
//!
//! - UUID kinds: short-form UUIDs are expanded onto the Bluetooth base UUID
//! - company identifiers: copied as 16-bit codes and names
//! - GAP appearance: nested subcategories are flattened into one row each
//!
//! String fields are kept verbatim; literal escaping belongs to the emitter.

pub mod appearance;
pub mod uuid;

pub use appearance::flatten_appearance;
pub use uuid::{expand_uuid, is_canonical, BASE_UUID_SUFFIX};

use crate::error::SchemaError;
use crate::types::{AppearanceRecord, CompanyRecord, RecordKind, UuidRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RawUuid {
    uuid: String,
    name: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
struct RawCompany {
    code: u16,
    name: String,
}

/// All normalized rows of one kind
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    Uuids {
        kind: RecordKind,
        rows: Vec<UuidRecord>,
    },
    Companies(Vec<CompanyRecord>),
    Appearance(Vec<AppearanceRecord>),
}

impl Table {
    pub fn kind(&self) -> RecordKind {
        match self {
            Table::Uuids { kind, .. } => *kind,
            Table::Companies(_) => RecordKind::CompanyIds,
            Table::Appearance(_) => RecordKind::GapAppearance,
        }
    }

    /// Number of rows that will be emitted
    pub fn len(&self) -> usize {
        match self {
            Table::Uuids { rows, .. } => rows.len(),
            Table::Companies(rows) => rows.len(),
            Table::Appearance(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize one UUID record (service, characteristic or descriptor)
pub fn normalize_uuid(kind: RecordKind, index: usize, value: &Value) -> Result<UuidRecord, SchemaError> {
    let raw = RawUuid::deserialize(value)
        .map_err(|source| SchemaError::InvalidRecord { kind, index, source })?;

    let uuid = expand_uuid(&raw.uuid);
    if !is_canonical(&uuid) {
        warn!(%kind, index, uuid = %raw.uuid, "uuid is not in canonical 128-bit form, emitting as-is");
    }

    Ok(UuidRecord {
        uuid,
        name: raw.name,
        identifier: raw.identifier,
    })
}

/// Normalize one company identifier record
pub fn normalize_company(index: usize, value: &Value) -> Result<CompanyRecord, SchemaError> {
    let raw = RawCompany::deserialize(value).map_err(|source| SchemaError::InvalidRecord {
        kind: RecordKind::CompanyIds,
        index,
        source,
    })?;

    Ok(CompanyRecord {
        code: raw.code,
        name: raw.name,
    })
}

/// Normalize a whole document of `kind`
pub fn normalize(kind: RecordKind, records: &[Value]) -> Result<Table, SchemaError> {
    let table = match kind {
        RecordKind::ServiceUuids | RecordKind::CharacteristicUuids | RecordKind::DescriptorUuids => {
            let rows = records
                .iter()
                .enumerate()
                .map(|(index, value)| normalize_uuid(kind, index, value))
                .collect::<Result<Vec<_>, _>>()?;
            Table::Uuids { kind, rows }
        }
        RecordKind::CompanyIds => {
            let rows = records
                .iter()
                .enumerate()
                .map(|(index, value)| normalize_company(index, value))
                .collect::<Result<Vec<_>, _>>()?;
            Table::Companies(rows)
        }
        RecordKind::GapAppearance => Table::Appearance(flatten_appearance(records)?),
    };

    Ok(table)
}

/// Unwrap a parsed document into its record list
pub fn records_of(kind: RecordKind, document: Value) -> Result<Vec<Value>, SchemaError> {
    match document {
        Value::Array(records) => Ok(records),
        _ => Err(SchemaError::NotAnArray { kind }),
    }
}
