use thiserror::Error;

/// Main error type for the sheet2json library.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum Sheet2JsonError {
    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    // Spreadsheet module errors
    #[error("{0}")]
    SpreadsheetError(#[from] crate::spreadsheet::SpreadsheetError),

    // Helper module errors
    #[error("{0}")]
    EncodingError(#[from] crate::helpers::encoding::EncodingError),
}
