//! GAP appearance flattening
//!
//! The upstream document nests subcategories inside each category. The emitted
//! table is flat, so every subcategory becomes its own row carrying a copy of
//! its parent's category number and name.

use crate::error::SchemaError;
use crate::types::{AppearanceRecord, RecordKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawCategory {
    category: u16,
    name: String,
    #[serde(default)]
    subcategory: Option<Vec<RawSubcategory>>,
}

#[derive(Debug, Deserialize)]
struct RawSubcategory {
    value: u8,
    name: String,
}

/// Flatten a raw category list into appearance rows, in input order
pub fn flatten_appearance(categories: &[Value]) -> Result<Vec<AppearanceRecord>, SchemaError> {
    let mut rows = Vec::new();

    for (index, value) in categories.iter().enumerate() {
        let raw = RawCategory::deserialize(value).map_err(|source| SchemaError::InvalidRecord {
            kind: RecordKind::GapAppearance,
            index,
            source,
        })?;

        match raw.subcategory {
            None => {
                rows.push(AppearanceRecord::new(raw.category, &raw.name, 0, ""));
            }
            Some(subs) => {
                if subs.is_empty() {
                    warn!(
                        category = raw.category,
                        name = %raw.name,
                        "appearance category has an empty subcategory list and yields no rows"
                    );
                }
                for sub in subs {
                    rows.push(AppearanceRecord::new(raw.category, &raw.name, sub.value, &sub.name));
                }
            }
        }
    }

    debug!(categories = categories.len(), rows = rows.len(), "flattened appearance categories");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_array(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap()
    }

    #[test]
    fn test_flatten_mixed_categories() {
        let input = as_array(json!([
            {"category": 1, "name": "A"},
            {"category": 2, "name": "B", "subcategory": [
                {"value": 1, "name": "X"},
                {"value": 2, "name": "Y"}
            ]}
        ]));

        let rows = flatten_appearance(&input).unwrap();

        assert_eq!(
            rows,
            vec![
                AppearanceRecord::new(1, "A", 0, ""),
                AppearanceRecord::new(2, "B", 1, "X"),
                AppearanceRecord::new(2, "B", 2, "Y"),
            ]
        );
    }

    #[test]
    fn test_null_subcategory_counts_as_absent() {
        let input = as_array(json!([{"category": 5, "name": "Tag", "subcategory": null}]));
        let rows = flatten_appearance(&input).unwrap();
        assert_eq!(rows, vec![AppearanceRecord::new(5, "Tag", 0, "")]);
    }

    #[test]
    fn test_empty_subcategory_list_yields_nothing() {
        let input = as_array(json!([
            {"category": 3, "name": "Empty", "subcategory": []},
            {"category": 4, "name": "Solo"}
        ]));
        let rows = flatten_appearance(&input).unwrap();
        assert_eq!(rows, vec![AppearanceRecord::new(4, "Solo", 0, "")]);
    }

    #[test]
    fn test_subcategory_without_value_is_rejected() {
        let input = as_array(json!([
            {"category": 1, "name": "A"},
            {"category": 2, "name": "B", "subcategory": [{"name": "X"}]}
        ]));

        let err = flatten_appearance(&input).unwrap_err();
        match err {
            SchemaError::InvalidRecord { kind, index, .. } => {
                assert_eq!(kind, RecordKind::GapAppearance);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err_message(&input).contains("value"));
    }

    #[test]
    fn test_subcategory_value_out_of_range() {
        let input = as_array(json!([
            {"category": 1, "name": "A", "subcategory": [{"value": 300, "name": "X"}]}
        ]));
        assert!(flatten_appearance(&input).is_err());
    }

    fn err_message(input: &[Value]) -> String {
        flatten_appearance(input).unwrap_err().to_string()
    }
}
