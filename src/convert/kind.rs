use crate::helpers::datefmt::DateStyle;
use serde_json::Value;

/// Field value kinds understood by the type-declaration row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Text values
    String,
    /// 32-bit signed integers
    Int32,
    /// 32-bit unsigned integers
    UInt32,
    /// 64-bit signed integers
    Int64,
    /// 64-bit unsigned integers
    UInt64,
    /// Single-precision floating point numbers
    Float32,
    /// Double-precision floating point numbers
    Float64,
    /// Boolean values (true/false)
    Bool,
    /// Date and time values
    DateTime,
}

impl ValueKind {
    /// Resolves a type-row token to a value kind (case-insensitive).
    /// Unknown tokens resolve to String so a stray annotation never
    /// aborts a conversion.
    pub fn resolve(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "int" => Self::Int32,
            "uint" => Self::UInt32,
            "long" => Self::Int64,
            "ulong" => Self::UInt64,
            "float" => Self::Float32,
            "double" => Self::Float64,
            "bool" => Self::Bool,
            "date" | "datetime" => Self::DateTime,
            _ => Self::String,
        }
    }

    /// Zero-equivalent value substituted for missing cells: the empty string
    /// for text, 0 for numbers, false for booleans, and the minimum date
    /// rendered through the active style for date columns.
    pub fn default_value(&self, dates: &DateStyle) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Int32 | Self::Int64 => Value::from(0i64),
            Self::UInt32 | Self::UInt64 => Value::from(0u64),
            Self::Float32 | Self::Float64 => Value::from(0.0f64),
            Self::Bool => Value::Bool(false),
            Self::DateTime => Value::String(dates.min_value()),
        }
    }

    /// Rust type emitted for the kind by the definition generator.
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::String | Self::DateTime => "String",
            Self::Int32 => "i32",
            Self::UInt32 => "u32",
            Self::Int64 => "i64",
            Self::UInt64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Bool => "bool",
        }
    }
}
