use crate::convert::assemble;
use crate::error::Sheet2JsonError;
use crate::helpers::encoding::TextEncoding;
use crate::options::ConvertOptions;
use crate::spreadsheet::Dataset;
use std::fs;
use std::path::Path;

/// Serializes converted datasets into pretty-printed JSON text.
///
/// The conversion happens once, in [`JsonExporter::new`]; the exporter then
/// holds the finished text so it can be inspected or written out any number
/// of times.
pub struct JsonExporter {
    json: String,
}

impl JsonExporter {
    /// Converts the datasets and renders the document as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be rendered as JSON text.
    pub fn new(datasets: &[Dataset], options: &ConvertOptions) -> Result<Self, Sheet2JsonError> {
        let document = assemble(datasets, options);
        let json = serde_json::to_string_pretty(&document)?;
        Ok(Self { json })
    }

    /// The rendered JSON text.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Writes the JSON text to `path` in the requested encoding.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or written.
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        encoding: &TextEncoding,
    ) -> Result<(), Sheet2JsonError> {
        fs::write(path, encoding.encode(&self.json))?;
        Ok(())
    }
}
