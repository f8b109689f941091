use crate::convert::kind::ValueKind;
use crate::options::ConvertOptions;
use crate::spreadsheet::Dataset;
use calamine::Data;
use serde_json::Value;

/// Schema of one output field, resolved from a source column.
#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    /// Final field name, lowercased or synthesized per the options
    pub name: String,
    /// Declared value kind from the type row
    pub kind: ValueKind,
    /// Value substituted for missing cells
    pub default_value: Value,
    /// Index of the source column within the dataset
    pub source_index: usize,
}

/// Builds the column schema for one dataset.
///
/// Walks the header once, in source order: the configured number of trailing
/// columns is dropped, excluded headers are skipped, the type row (row 0)
/// names each column's kind, and blank names come out as `col_<index>`.
/// Duplicate names are kept; the row serializer resolves them by last write.
pub fn build_columns(dataset: &Dataset, options: &ConvertOptions) -> Vec<ColumnDescriptor> {
    let type_row = dataset.rows.first();
    let column_count = dataset
        .columns
        .len()
        .saturating_sub(options.skip_trailing_columns);

    let mut columns = Vec::with_capacity(column_count);
    for (index, header) in dataset.columns.iter().take(column_count).enumerate() {
        // The exclusion prefix matches the header as written, before any
        // name normalization.
        if options.is_excluded(header) {
            continue;
        }

        let kind = match type_row.and_then(|row| row.get(index)) {
            Some(Data::String(token)) => ValueKind::resolve(token),
            _ => ValueKind::String,
        };

        let mut name = if options.lowercase_fields {
            header.to_lowercase()
        } else {
            header.clone()
        };
        if name.is_empty() {
            name = format!("col_{index}");
        }

        columns.push(ColumnDescriptor {
            name,
            kind,
            default_value: kind.default_value(&options.dates),
            source_index: index,
        });
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(columns: &[&str], type_row: &[&str]) -> Dataset {
        Dataset {
            name: "items".to_owned(),
            columns: columns.iter().map(|name| name.to_string()).collect(),
            rows: vec![type_row
                .iter()
                .map(|token| Data::String(token.to_string()))
                .collect()],
        }
    }

    #[test]
    fn drops_the_trailing_column() {
        let dataset = dataset(
            &["id", "name", "note"],
            &["int", "string", "string"],
        );
        let columns = build_columns(&dataset, &ConvertOptions::default());

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[0].kind, ValueKind::Int32);
        assert_eq!(columns[1].name, "name");
    }

    #[test]
    fn trailing_drop_can_be_disabled() {
        let dataset = dataset(&["id", "name"], &["int", "string"]);
        let options = ConvertOptions {
            skip_trailing_columns: 0,
            ..ConvertOptions::default()
        };
        let columns = build_columns(&dataset, &options);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn skips_excluded_headers_before_normalization() {
        let dataset = dataset(
            &["id", "#Comment", "score", "note"],
            &["int", "string", "double", "string"],
        );
        let options = ConvertOptions {
            exclude_prefix: "#".to_owned(),
            lowercase_fields: true,
            ..ConvertOptions::default()
        };
        let columns = build_columns(&dataset, &options);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[1].name, "score");
        assert_eq!(columns[1].source_index, 2);
    }

    #[test]
    fn lowercases_names_when_asked() {
        let dataset = dataset(&["ItemID", "Name", "note"], &["int", "string", "string"]);
        let options = ConvertOptions {
            lowercase_fields: true,
            ..ConvertOptions::default()
        };
        let columns = build_columns(&dataset, &options);
        assert_eq!(columns[0].name, "itemid");
        assert_eq!(columns[1].name, "name");
    }

    #[test]
    fn synthesizes_names_for_blank_headers() {
        let dataset = dataset(&["id", "", "note"], &["int", "string", "string"]);
        let columns = build_columns(&dataset, &ConvertOptions::default());
        assert_eq!(columns[1].name, "col_1");
        assert_eq!(columns[1].source_index, 1);
    }

    #[test]
    fn non_textual_type_cells_default_to_string() {
        let mut dataset = dataset(&["id", "flag", "note"], &["int", "string", "string"]);
        dataset.rows[0][1] = Data::Float(3.0);
        let columns = build_columns(&dataset, &ConvertOptions::default());
        assert_eq!(columns[1].kind, ValueKind::String);
    }

    #[test]
    fn missing_type_row_yields_all_string_schema() {
        let mut dataset = dataset(&["id", "note"], &[]);
        dataset.rows.clear();
        let columns = build_columns(&dataset, &ConvertOptions::default());
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].kind, ValueKind::String);
        assert_eq!(columns[0].default_value, json!(""));
    }

    #[test]
    fn defaults_follow_the_declared_kind() {
        let dataset = dataset(
            &["id", "score", "seen", "when", "note"],
            &["int", "double", "bool", "date", "string"],
        );
        let columns = build_columns(&dataset, &ConvertOptions::default());
        assert_eq!(columns[0].default_value, json!(0));
        assert_eq!(columns[1].default_value, json!(0.0));
        assert_eq!(columns[2].default_value, json!(false));
        assert_eq!(columns[3].default_value, json!("0001/01/01"));
    }
}
