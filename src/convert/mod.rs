//! Turns loaded datasets into JSON values.
//!
//! The pipeline runs in three stages: [`build_columns`] reads the type row
//! into a column schema, [`SheetConverter`] serializes the data rows of one
//! sheet, and [`assemble`] combines every eligible sheet into the final
//! document.

pub mod document;
pub mod kind;
pub mod row;
pub mod schema;
pub mod sheet;

pub use document::assemble;
pub use kind::ValueKind;
pub use row::{cell_text, parse_embedded_json, serialize_row};
pub use schema::{build_columns, ColumnDescriptor};
pub use sheet::SheetConverter;
