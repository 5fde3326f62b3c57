use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The five assigned-number databases, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    ServiceUuids,
    CharacteristicUuids,
    DescriptorUuids,
    CompanyIds,
    GapAppearance,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::ServiceUuids,
        RecordKind::CharacteristicUuids,
        RecordKind::DescriptorUuids,
        RecordKind::CompanyIds,
        RecordKind::GapAppearance,
    ];

    /// Name of the upstream JSON document
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::ServiceUuids => "service_uuids.json",
            RecordKind::CharacteristicUuids => "characteristic_uuids.json",
            RecordKind::DescriptorUuids => "descriptor_uuids.json",
            RecordKind::CompanyIds => "company_ids.json",
            RecordKind::GapAppearance => "gap_appearance.json",
        }
    }

    /// Identifier of the emitted array (and its `_len` constant)
    pub fn table_name(self) -> &'static str {
        match self {
            RecordKind::ServiceUuids => "service_uuids",
            RecordKind::CharacteristicUuids => "characteristic_uuids",
            RecordKind::DescriptorUuids => "descriptor_uuids",
            RecordKind::CompanyIds => "company_identifier",
            RecordKind::GapAppearance => "gap_appearance",
        }
    }

    /// C type of the emitted array elements
    pub fn type_name(self) -> &'static str {
        match self {
            RecordKind::ServiceUuids
            | RecordKind::CharacteristicUuids
            | RecordKind::DescriptorUuids => "Uuid",
            RecordKind::CompanyIds => "CompanyIds",
            RecordKind::GapAppearance => "GapAppearance",
        }
    }

    pub fn is_uuid(self) -> bool {
        matches!(
            self,
            RecordKind::ServiceUuids | RecordKind::CharacteristicUuids | RecordKind::DescriptorUuids
        )
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A service, characteristic or descriptor UUID with its names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidRecord {
    /// Always the 36 character lower-case form for well-formed input
    pub uuid: String,
    pub name: String,
    pub identifier: String,
}

/// A Bluetooth SIG company identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub code: u16,
    pub name: String,
}

/// One flattened GAP appearance row.
///
/// Categories without subcategories produce a single row with `value == 0`
/// and an empty `sub_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRecord {
    pub category: u16,
    pub category_name: String,
    pub value: u8,
    pub sub_name: String,
}

impl AppearanceRecord {
    pub fn new(category: u16, category_name: &str, value: u8, sub_name: &str) -> Self {
        AppearanceRecord {
            category,
            category_name: category_name.to_string(),
            value,
            sub_name: sub_name.to_string(),
        }
    }
}

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/NordicSemiconductor/bluetooth-numbers-database/master/v1";

pub const DEFAULT_OUTPUT: &str = "bt_assigned_numbers.h";

/// Where the raw JSON documents come from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Remote { base_url: String },
    Directory { path: PathBuf },
}

/// Where the rendered header goes
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Configuration for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source: SourceConfig,

    pub output: OutputTarget,

    /// Fixed timestamp for the header; the current local time when `None`
    pub timestamp: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            source: SourceConfig::Remote {
                base_url: String::from(DEFAULT_BASE_URL),
            },
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT)),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_and_names() {
        let tables: Vec<&str> = RecordKind::ALL.iter().map(|k| k.table_name()).collect();
        assert_eq!(
            tables,
            vec![
                "service_uuids",
                "characteristic_uuids",
                "descriptor_uuids",
                "company_identifier",
                "gap_appearance"
            ]
        );
        assert_eq!(RecordKind::CompanyIds.file_name(), "company_ids.json");
        assert_eq!(RecordKind::DescriptorUuids.type_name(), "Uuid");
        assert!(!RecordKind::GapAppearance.is_uuid());
    }

    #[test]
    fn test_default_config_matches_upstream() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.source,
            SourceConfig::Remote {
                base_url: DEFAULT_BASE_URL.to_string()
            }
        );
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("bt_assigned_numbers.h")));
        assert!(config.timestamp.is_none());
    }
}
