use crate::helpers::datefmt::DateStyle;

/// Settings shared by every stage of a conversion run.
///
/// Built once by the caller and handed immutably to the schema builder, the
/// row serializer, and the document assembler.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// 0-based index of the first data row within a dataset. Row 0 holds the
    /// type declarations, so the conventional three-row layout (field names,
    /// types, one comment row) puts the first data row at index 2.
    pub first_data_row: usize,

    /// Lowercase field names at schema-build time.
    pub lowercase_fields: bool,

    /// Emit each sheet as an array of records instead of an ID-keyed object.
    pub export_array: bool,

    /// Rendering style for date/time cells and date column defaults.
    pub dates: DateStyle,

    /// Wrap the document in a sheet-name object even when only one sheet
    /// is eligible.
    pub force_sheet_name: bool,

    /// Sheets and columns whose name starts with this prefix are skipped.
    /// An empty prefix excludes nothing.
    pub exclude_prefix: String,

    /// Parse cell text that looks like a JSON array or object into a
    /// nested value.
    pub cell_json: bool,

    /// Render every field value as a string.
    pub all_string: bool,

    /// Number of trailing columns dropped from every sheet; the conventional
    /// layout reserves the last column for editor comments.
    pub skip_trailing_columns: usize,
}

impl ConvertOptions {
    /// Checks if a sheet or column name falls under the exclusion prefix.
    pub fn is_excluded(&self, name: &str) -> bool {
        !self.exclude_prefix.is_empty() && name.starts_with(&self.exclude_prefix)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            first_data_row: 1,
            lowercase_fields: false,
            export_array: false,
            dates: DateStyle::default(),
            force_sheet_name: false,
            exclude_prefix: String::new(),
            cell_json: false,
            all_string: false,
            skip_trailing_columns: 1,
        }
    }
}
