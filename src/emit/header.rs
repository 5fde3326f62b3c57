//! Header comment, struct declarations and document assembly

use super::TableBlock;

const GENERATOR: &str = "bt-numbers-to-c";

/// Fixed struct declarations matching the field order of each row type
pub const DECLARATIONS: &str = r#"#include <stdint.h>

typedef const struct _uuids_t_ Uuid;
const struct _uuids_t_
{
    const char* uuid;
    const char* name;
    const char* identifier;
};

typedef const struct _company_ids_t_ CompanyIds;
const struct _company_ids_t_
{
    const uint16_t code;
    const char* name;
};

typedef const struct _gap_appearance_t_ GapAppearance;
const struct _gap_appearance_t_
{
    const uint16_t category;
    const char* name;
    const uint8_t value;
    const char* sub_name;
};
"#;

/// Provenance and generation time printed at the top of the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub provenance: String,
    pub timestamp: String,
}

impl Header {
    pub fn new(provenance: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Header {
            provenance: provenance.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "/* Bluetooth SIG Assigned Numbers

   Bluetooth SIG Assigned Numbers for
     - Service UUIDs
     - Characteristic UUIDs
     - Descriptor UUIDs
     - Company IDs
     - GAP Appearance

   Converted from {}
   into a C header file with {} {}.

   {}

   Based on bt_assigned_numbers_to_c.py, (C) Erik Lins 2024, (https://github.com/eriklins)

   MIT License
*/
",
            self.provenance,
            GENERATOR,
            env!("CARGO_PKG_VERSION"),
            self.timestamp
        )
    }
}

/// Concatenate header, declarations and table blocks, in that order
pub fn render_document(header: &Header, blocks: &[TableBlock]) -> String {
    let mut out = header.render();
    out.push('\n');
    out.push_str(DECLARATIONS);
    out.push('\n');
    for block in blocks {
        out.push_str(block.text());
        out.push('\n');
    }
    out
}
