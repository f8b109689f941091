use crate::convert::row::{cell_text, serialize_row};
use crate::convert::schema::{build_columns, ColumnDescriptor};
use crate::options::ConvertOptions;
use crate::spreadsheet::Dataset;
use calamine::Data;
use serde_json::{Map, Value};

/// Converts one dataset into its JSON value under the active options.
pub struct SheetConverter<'a> {
    dataset: &'a Dataset,
    options: &'a ConvertOptions,
    columns: Vec<ColumnDescriptor>,
}

impl<'a> SheetConverter<'a> {
    /// Builds the column schema once; every row reuses it.
    pub fn new(dataset: &'a Dataset, options: &'a ConvertOptions) -> Self {
        let columns = build_columns(dataset, options);
        Self {
            dataset,
            options,
            columns,
        }
    }

    /// Serializes the dataset as an array of records or an ID-keyed object.
    pub fn serialize(&self) -> Value {
        if self.options.export_array {
            self.to_array()
        } else {
            self.to_dictionary()
        }
    }

    fn data_rows(&self) -> impl Iterator<Item = (usize, &Vec<Data>)> {
        self.dataset
            .rows
            .iter()
            .enumerate()
            .skip(self.options.first_data_row)
    }

    fn to_array(&self) -> Value {
        let records = self
            .data_rows()
            .map(|(_, row)| Value::Object(serialize_row(row, &self.columns, self.options)))
            .collect();
        Value::Array(records)
    }

    /// Keys come from the first source column's raw text; blank IDs are
    /// synthesized as `row_<index>` and duplicate IDs overwrite in place.
    fn to_dictionary(&self) -> Value {
        let mut sheet = Map::new();
        for (index, row) in self.data_rows() {
            let id = row
                .first()
                .map(|cell| cell_text(cell, &self.options.dates))
                .unwrap_or_default();
            let id = if id.is_empty() {
                format!("row_{index}")
            } else {
                id
            };
            sheet.insert(
                id,
                Value::Object(serialize_row(row, &self.columns, self.options)),
            );
        }
        Value::Object(sheet)
    }
}
