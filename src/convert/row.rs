use crate::convert::schema::ColumnDescriptor;
use crate::helpers::datefmt::DateStyle;
use crate::options::ConvertOptions;
use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// Serializes one data row into an ordered JSON record.
///
/// Fields follow schema order. A duplicated field name keeps its first
/// position and takes the last value written to it.
pub fn serialize_row(
    row: &[Data],
    columns: &[ColumnDescriptor],
    options: &ConvertOptions,
) -> Map<String, Value> {
    let mut record = Map::new();
    for column in columns {
        let value = coerce_cell(
            row.get(column.source_index).unwrap_or(&Data::Empty),
            column,
            options,
        );
        record.insert(column.name.clone(), value);
    }
    record
}

/// Coerces a raw cell into the JSON value stored under its field.
///
/// In order: embedded JSON is parsed when enabled, missing cells take the
/// column default, integral floats lose their fractional representation,
/// date cells render through the date style, and the all-string option
/// turns whatever remains into text.
fn coerce_cell(cell: &Data, column: &ColumnDescriptor, options: &ConvertOptions) -> Value {
    let value = cell_value(cell, column, options);
    if options.all_string && !value.is_string() {
        Value::String(value_text(&value))
    } else {
        value
    }
}

fn cell_value(cell: &Data, column: &ColumnDescriptor, options: &ConvertOptions) -> Value {
    if options.cell_json {
        if let Data::String(text) = cell {
            if let Some(value) = parse_embedded_json(text) {
                return value;
            }
        }
    }
    match cell {
        Data::Empty | Data::Error(_) => column.default_value.clone(),
        Data::Int(value) => Value::from(*value),
        Data::Float(value) => float_value(*value),
        Data::Bool(value) => Value::Bool(*value),
        Data::String(value) => Value::String(value.clone()),
        Data::DateTime(value) => Value::String(match value.as_datetime() {
            Some(datetime) => options.dates.format(&datetime),
            None => value.as_f64().to_string(),
        }),
        Data::DateTimeIso(value) => Value::String(match parse_iso_datetime(value) {
            Some(datetime) => options.dates.format(&datetime),
            None => value.clone(),
        }),
        Data::DurationIso(value) => Value::String(value.clone()),
    }
}

/// Attempts to parse cell text as an embedded JSON array or object.
///
/// Returns None unless the trimmed text starts with `[` or `{` and parses
/// cleanly; malformed candidates keep their raw textual value.
pub fn parse_embedded_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        serde_json::from_str(trimmed).ok()
    } else {
        None
    }
}

/// Raw textual form of a cell, used for dictionary record IDs.
pub fn cell_text(cell: &Data, dates: &DateStyle) -> String {
    match cell {
        Data::Bool(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::String(value) => value.clone(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => dates.format(&datetime),
            None => value.as_f64().to_string(),
        },
        Data::DateTimeIso(value) => value.clone(),
        Data::DurationIso(value) => value.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Floats with a zero fractional part normalize to integers, whatever the
/// declared kind; values outside the i64 range keep their float shape.
fn float_value(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// String representation used by the all-string option: numbers and booleans
/// through their natural display, nested values as compact JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                value.to_string()
            } else if let Some(value) = number.as_u64() {
                value.to_string()
            } else if let Some(value) = number.as_f64() {
                value.to_string()
            } else {
                number.to_string()
            }
        }
        nested => nested.to_string(),
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
