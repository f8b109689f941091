//! # sheet2json
//!
//! Converts Excel and OpenDocument spreadsheets into JSON configuration
//! files, with optional Rust struct definitions to match the output.
//!
//! ## Features
//!
//! - **Multi-format support**: Read Excel files (`.xls`, `.xlsx`, `.xlsm`, `.xlsb`, `.xla`, `.xlam`)
//!   and OpenDocument spreadsheet files (`.ods`)
//! - **Declared column types**: A type row under the header maps each column to
//!   string, integer, float, bool, or date kinds, with zero-equivalent defaults
//!   for missing cells
//! - **Array or dictionary output**: Rows become a JSON array, or an object
//!   keyed by each row's first column
//! - **Embedded JSON**: Cells holding JSON arrays or objects convert to nested
//!   values instead of strings
//! - **Typed code generation**: serde-ready `struct` definitions per sheet, so
//!   the exported JSON loads straight into Rust programs
//! - **Text encodings**: Output in any WHATWG encoding label or Windows code
//!   page, with optional UTF-8 byte order mark
//!
//! ## Pipeline
//!
//! [`Spreadsheet::open`] loads a workbook into [`Dataset`]s, [`assemble`]
//! converts the eligible ones into a single JSON value, and [`JsonExporter`]
//! renders and persists the document.
pub mod codegen;
pub mod convert;
pub mod error;
pub mod export;
pub mod helpers;
pub mod options;
pub mod spreadsheet;

pub use codegen::RustDefineGenerator;
pub use convert::{assemble, build_columns, parse_embedded_json, serialize_row};
pub use convert::{ColumnDescriptor, SheetConverter, ValueKind};
pub use error::Sheet2JsonError;
pub use export::JsonExporter;
pub use helpers::datefmt::DateStyle;
pub use helpers::encoding::{EncodingError, TextEncoding};
pub use options::ConvertOptions;
pub use spreadsheet::{Dataset, Spreadsheet, SpreadsheetError};
