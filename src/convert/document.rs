use crate::convert::sheet::SheetConverter;
use crate::options::ConvertOptions;
use crate::spreadsheet::Dataset;
use serde_json::{Map, Value};

/// Assembles the final document from every eligible dataset.
///
/// Exactly one eligible sheet stays unwrapped unless wrapping is forced;
/// otherwise the document maps sheet names to converted values in workbook
/// order. No eligible sheets yield an empty object.
pub fn assemble(datasets: &[Dataset], options: &ConvertOptions) -> Value {
    let eligible: Vec<&Dataset> = datasets
        .iter()
        .filter(|dataset| is_eligible(dataset, options))
        .collect();

    if eligible.len() == 1 && !options.force_sheet_name {
        SheetConverter::new(eligible[0], options).serialize()
    } else {
        let mut document = Map::new();
        for dataset in eligible {
            document.insert(
                dataset.name.clone(),
                SheetConverter::new(dataset, options).serialize(),
            );
        }
        Value::Object(document)
    }
}

/// A dataset takes part in the document when its name is not excluded and it
/// has at least one column and one row. The type row counts, so a sheet with
/// nothing under its header still converts (to an empty array or object).
pub(crate) fn is_eligible(dataset: &Dataset, options: &ConvertOptions) -> bool {
    !options.is_excluded(&dataset.name) && !dataset.columns.is_empty() && !dataset.rows.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;
    use serde_json::json;

    fn dataset(name: &str, rows: &[(f64, &str)]) -> Dataset {
        let mut grid = vec![vec![
            Data::String("int".to_owned()),
            Data::String("string".to_owned()),
            Data::String("string".to_owned()),
        ]];
        for (id, text) in rows {
            grid.push(vec![
                Data::Float(*id),
                Data::String(text.to_string()),
                Data::Empty,
            ]);
        }
        Dataset {
            name: name.to_owned(),
            columns: vec!["id".to_owned(), "name".to_owned(), "note".to_owned()],
            rows: grid,
        }
    }

    fn array_options() -> ConvertOptions {
        ConvertOptions {
            export_array: true,
            ..ConvertOptions::default()
        }
    }

    #[test]
    fn single_sheet_stays_unwrapped() {
        let datasets = vec![dataset("items", &[(1.0, "Alice")])];
        let value = assemble(&datasets, &array_options());
        assert_eq!(value, json!([{"id": 1, "name": "Alice"}]));
    }

    #[test]
    fn single_sheet_wraps_when_forced() {
        let datasets = vec![dataset("items", &[(1.0, "Alice")])];
        let options = ConvertOptions {
            force_sheet_name: true,
            ..array_options()
        };
        let value = assemble(&datasets, &options);
        assert_eq!(value, json!({"items": [{"id": 1, "name": "Alice"}]}));
    }

    #[test]
    fn multiple_sheets_wrap_in_workbook_order() {
        let datasets = vec![
            dataset("weapons", &[(1.0, "Sword")]),
            dataset("armors", &[(2.0, "Shield")]),
        ];
        let value = assemble(&datasets, &array_options());

        let names: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["weapons", "armors"]);
        assert_eq!(value["armors"][0]["name"], json!("Shield"));
    }

    #[test]
    fn excluded_and_degenerate_sheets_are_filtered() {
        let empty = Dataset {
            name: "empty".to_owned(),
            columns: Vec::new(),
            rows: Vec::new(),
        };
        let datasets = vec![
            dataset("#draft", &[(1.0, "Hidden")]),
            empty,
            dataset("items", &[(1.0, "Alice")]),
        ];
        let options = ConvertOptions {
            exclude_prefix: "#".to_owned(),
            ..array_options()
        };

        // Only one sheet survives the filter, so it stays unwrapped.
        let value = assemble(&datasets, &options);
        assert_eq!(value, json!([{"id": 1, "name": "Alice"}]));
    }

    #[test]
    fn no_eligible_sheets_yield_an_empty_object() {
        let datasets = vec![Dataset {
            name: "empty".to_owned(),
            columns: Vec::new(),
            rows: Vec::new(),
        }];
        assert_eq!(assemble(&datasets, &array_options()), json!({}));
        assert_eq!(assemble(&[], &ConvertOptions::default()), json!({}));
    }

    #[test]
    fn header_only_sheet_is_not_eligible() {
        let header_only = Dataset {
            name: "items".to_owned(),
            columns: vec!["id".to_owned()],
            rows: Vec::new(),
        };
        assert!(!is_eligible(&header_only, &ConvertOptions::default()));
        assert_eq!(assemble(&[header_only], &array_options()), json!({}));
    }
}
