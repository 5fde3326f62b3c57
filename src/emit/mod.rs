//! Emission of normalized tables as C array initializers
//!
//! Every table, whatever its row shape, is rendered by the same
//! [`emit_table`] routine:
//!
//! ```text
//! const int {table}_len = {count};
//! {Type} {table}[{count}] = {
//!     {row_0},
//!     ...
//!     {row_n-1}
//! };
//! ```
//!
//! Rows describe themselves through [`TableRow`], so the emitter never looks
//! at the nested structure the rows were flattened from.

pub mod header;
pub mod literal;

pub use header::{render_document, Header, DECLARATIONS};
pub use literal::{escape, render_entry, Field};

use crate::normalize::Table;
use crate::types::{AppearanceRecord, CompanyRecord, UuidRecord};

const INDENT: &str = "    ";

/// A row type with a fixed field order matching its C struct declaration
pub trait TableRow {
    fn fields(&self) -> Vec<Field<'_>>;
}

impl TableRow for UuidRecord {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Str(&self.uuid),
            Field::Str(&self.name),
            Field::Str(&self.identifier),
        ]
    }
}

impl TableRow for CompanyRecord {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::Uint(u64::from(self.code)), Field::Str(&self.name)]
    }
}

impl TableRow for AppearanceRecord {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::Uint(u64::from(self.category)),
            Field::Str(&self.category_name),
            Field::Uint(u64::from(self.value)),
            Field::Str(&self.sub_name),
        ]
    }
}

/// A rendered length constant plus array definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    table_name: String,
    count: usize,
    text: String,
}

impl TableBlock {
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The value written into `{table}_len`
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Render `rows` as the `{table_name}` array of `{type_name}`
pub fn emit_table<R: TableRow>(table_name: &str, type_name: &str, rows: &[R]) -> TableBlock {
    let count = rows.len();
    let mut text = String::new();

    text.push_str(&format!("const int {}_len = {};\n", table_name, count));
    text.push_str(&format!("{} {}[{}] = {{\n", type_name, table_name, count));

    for (index, row) in rows.iter().enumerate() {
        let is_last = index + 1 == count;
        text.push_str(INDENT);
        text.push_str(&render_entry(&row.fields()));
        if !is_last {
            text.push(',');
        }
        text.push('\n');
    }

    text.push_str("};\n");

    TableBlock {
        table_name: table_name.to_string(),
        count,
        text,
    }
}

/// Render a normalized table under its kind's table and type names
pub fn emit(table: &Table) -> TableBlock {
    let kind = table.kind();
    match table {
        Table::Uuids { rows, .. } => emit_table(kind.table_name(), kind.type_name(), rows),
        Table::Companies(rows) => emit_table(kind.table_name(), kind.type_name(), rows),
        Table::Appearance(rows) => emit_table(kind.table_name(), kind.type_name(), rows),
    }
}
