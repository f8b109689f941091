//! # Spreadsheet Loading Module
//!
//! Reads the supported spreadsheet formats — Excel (.xlsx, .xlsm, .xlam,
//! .xlsb, .xls, .xla) and OpenDocument (.ods) — and materializes every sheet
//! into a [`Dataset`]: the header row becomes the column names and the
//! remaining rows become the data grid, with row 0 reserved for the type
//! declarations the conversion layer consumes.
use crate::spreadsheet::SpreadsheetError::InvalidFileFormat;
use calamine::{
    open_workbook, Data, Ods, OdsError, Range, Reader, Xls, XlsError, Xlsb, XlsbError, Xlsx,
    XlsxError,
};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Custom error types for spreadsheet operations.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Error in Excel 2007+ format (.xlsx, .xlsm, .xlam)
    #[error("Invalid xlsx file format: {0}")]
    InvalidXlsxFileFormat(#[from] XlsxError),

    /// Error in Excel Binary format (.xlsb)
    #[error("Invalid xlsb file format: {0}")]
    InvalidXlsbFileFormat(#[from] XlsbError),

    /// Error in legacy Excel format (.xls, .xla)
    #[error("Invalid xls file format: {0}")]
    InvalidXlsFileFormat(#[from] XlsError),

    /// Error in OpenDocument format (.ods)
    #[error("Invalid ods file format: {0}")]
    InvalidOdsFileFormat(#[from] OdsError),

    /// Unsupported or unrecognized file format
    #[error("Cannot detect file format for '{name}'")]
    InvalidFileFormat { name: String },
}

/// Type alias for buffered file reader
pub type FileReader = BufReader<File>;

/// Wrapper enum for different spreadsheet format readers.
///
/// Provides a unified interface over the formats supported by the calamine
/// library, abstracting away the differences between readers.
pub enum Spreadsheet {
    /// Excel 2007+ format reader (.xlsx, .xlsm, .xlam)
    Xlsx(Xlsx<FileReader>),
    /// Excel Binary format reader (.xlsb)
    Xlsb(Xlsb<FileReader>),
    /// Legacy Excel format reader (.xls, .xla)
    Xls(Xls<FileReader>),
    /// OpenDocument format reader (.ods)
    Ods(Ods<FileReader>),
}

/// One sheet materialized as a header plus a row grid.
///
/// `columns` holds the header-row cell texts in source order (blank header
/// cells yield empty strings). `rows` holds every row after the header, each
/// padded to the full column width; by convention row 0 carries the
/// type declarations.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// Sheet name
    pub name: String,
    /// Header-row cell texts in source order
    pub columns: Vec<String>,
    /// All rows after the header row
    pub rows: Vec<Vec<Data>>,
}

impl Dataset {
    /// Builds a dataset from a calamine cell range.
    ///
    /// The first row of the used range is consumed into column names; an
    /// empty range yields a dataset with no columns and no rows.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let columns = rows
            .next()
            .map(|row| row.iter().map(header_text).collect())
            .unwrap_or_default();
        Self {
            name: name.to_owned(),
            columns,
            rows: rows.map(|row| row.to_vec()).collect(),
        }
    }
}

/// Textual form of a header cell; blank and error cells become empty names.
fn header_text(value: &Data) -> String {
    match value {
        Data::Bool(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::String(value) => value.to_owned(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => datetime.to_string(),
            None => value.as_f64().to_string(),
        },
        Data::DateTimeIso(value) => value.to_owned(),
        Data::DurationIso(value) => value.to_owned(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

impl Spreadsheet {
    /// Opens a spreadsheet file and returns the appropriate reader.
    ///
    /// The format is detected from the file extension:
    /// - `.xlsx`, `.xlsm`, `.xlam` - Excel 2007+ format
    /// - `.xlsb` - Excel Binary format
    /// - `.xls`, `.xla` - Legacy Excel format
    /// - `.ods` - OpenDocument format
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized or the file
    /// cannot be opened or parsed.
    pub fn open<P>(path: P) -> Result<Spreadsheet, SpreadsheetError>
    where
        P: AsRef<Path>,
    {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("xlsx") | Some("xlsm") | Some("xlam") => Ok(Self::Xlsx(open_workbook(path)?)),
            Some("xlsb") => Ok(Self::Xlsb(open_workbook(path)?)),
            Some("xls") | Some("xla") => Ok(Self::Xls(open_workbook(path)?)),
            Some("ods") => Ok(Self::Ods(open_workbook(path)?)),
            _ => Err(InvalidFileFormat {
                name: path.as_ref().to_string_lossy().to_string(),
            }),
        }
    }

    /// Returns the names of all sheets in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Self::Xlsx(xlsx) => xlsx.sheet_names(),
            Self::Xlsb(xlsb) => xlsb.sheet_names(),
            Self::Xls(xls) => xls.sheet_names(),
            Self::Ods(ods) => ods.sheet_names(),
        }
    }

    /// Reads one sheet into a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet does not exist or its data cannot
    /// be read.
    pub fn read_dataset(&mut self, sheet_name: &str) -> Result<Dataset, SpreadsheetError> {
        let range = match self {
            Self::Xlsx(xlsx) => xlsx.worksheet_range(sheet_name)?,
            Self::Xlsb(xlsb) => xlsb.worksheet_range(sheet_name)?,
            Self::Xls(xls) => xls.worksheet_range(sheet_name)?,
            Self::Ods(ods) => ods.worksheet_range(sheet_name)?,
        };
        Ok(Dataset::from_range(sheet_name, &range))
    }

    /// Reads every sheet of the workbook into datasets, in workbook order.
    pub fn load_datasets(&mut self) -> Result<Vec<Dataset>, SpreadsheetError> {
        let mut datasets = Vec::new();
        for sheet_name in self.sheet_names() {
            datasets.push(self.read_dataset(&sheet_name)?);
        }
        Ok(datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_from_range_splits_header_and_rows() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("id".to_owned()));
        range.set_value((0, 1), Data::String("name".to_owned()));
        range.set_value((1, 0), Data::String("int".to_owned()));
        range.set_value((1, 1), Data::String("string".to_owned()));
        range.set_value((2, 0), Data::Float(1.0));
        range.set_value((2, 1), Data::String("Alice".to_owned()));

        let dataset = Dataset::from_range("items", &range);
        assert_eq!(dataset.name, "items");
        assert_eq!(dataset.columns, vec!["id", "name"]);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[0][0], Data::String("int".to_owned()));
        assert_eq!(dataset.rows[1][1], Data::String("Alice".to_owned()));
    }

    #[test]
    fn dataset_from_empty_range_is_degenerate() {
        let range: Range<Data> = Range::empty();
        let dataset = Dataset::from_range("empty", &range);
        assert!(dataset.columns.is_empty());
        assert!(dataset.rows.is_empty());
    }

    #[test]
    fn blank_header_cells_become_empty_names() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("id".to_owned()));
        range.set_value((0, 2), Data::Float(7.0));
        range.set_value((1, 0), Data::String("int".to_owned()));

        let dataset = Dataset::from_range("items", &range);
        assert_eq!(dataset.columns, vec!["id", "", "7"]);
    }

    #[test]
    fn open_rejects_unknown_extensions() {
        assert!(matches!(
            Spreadsheet::open("items.csv"),
            Err(InvalidFileFormat { .. })
        ));
    }
}
