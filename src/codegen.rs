use crate::convert::document::is_eligible;
use crate::convert::schema::build_columns;
use crate::error::Sheet2JsonError;
use crate::helpers::encoding::TextEncoding;
use crate::options::ConvertOptions;
use crate::spreadsheet::Dataset;
use std::fs;
use std::path::Path;

/// Reserved words that cannot be used as field identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "priv", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "try", "type", "unsafe", "use", "where", "while", "yield",
];

/// Generates Rust struct definitions matching the converted JSON layout.
///
/// Each eligible sheet becomes one `pub struct` whose fields follow the
/// column schema, so the emitted source deserializes the exported JSON
/// with serde. Sheets and columns the converter drops are dropped here too.
pub struct RustDefineGenerator {
    source: String,
}

impl RustDefineGenerator {
    /// Renders struct definitions for every eligible dataset. `origin` names
    /// the source workbook in the generated header comment.
    pub fn new(origin: &str, datasets: &[Dataset], options: &ConvertOptions) -> Self {
        let mut source = String::new();
        source.push_str(&format!("// Generated by sheet2json from {origin}.\n"));
        source.push_str("// One struct per sheet; fields follow the sheet's header and type rows.\n");
        source.push_str("// Do not edit by hand.\n");
        source.push_str("#![allow(non_snake_case)]\n\n");
        source.push_str("use serde::{Deserialize, Serialize};\n");

        for dataset in datasets.iter().filter(|dataset| is_eligible(dataset, options)) {
            source.push('\n');
            Self::render_struct(&mut source, dataset, options);
        }

        Self { source }
    }

    fn render_struct(source: &mut String, dataset: &Dataset, options: &ConvertOptions) {
        source.push_str("#[derive(Clone, Debug, Deserialize, Serialize)]\n");
        source.push_str(&format!("pub struct {} {{\n", struct_name(&dataset.name)));
        for column in build_columns(dataset, options) {
            let field = field_name(&column.name);
            if field != column.name {
                source.push_str(&format!(
                    "    #[serde(rename = \"{}\")]\n",
                    escape_literal(&column.name)
                ));
            }
            source.push_str(&format!("    pub {field}: {},\n", column.kind.rust_type()));
        }
        source.push_str("}\n");
    }

    /// The generated Rust source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Writes the generated source to `path` in the requested encoding.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or written.
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        encoding: &TextEncoding,
    ) -> Result<(), Sheet2JsonError> {
        fs::write(path, encoding.encode(&self.source))?;
        Ok(())
    }
}

/// Camel-cases a sheet name into a type name, upper-casing the letter after
/// every dropped separator. Names that come out empty or digit-first gain a
/// `Sheet` prefix.
fn struct_name(name: &str) -> String {
    let mut result = String::new();
    let mut upper_next = true;
    for character in name.chars() {
        if character.is_alphanumeric() {
            if upper_next {
                result.extend(character.to_uppercase());
                upper_next = false;
            } else {
                result.push(character);
            }
        } else {
            upper_next = true;
        }
    }
    if result.is_empty() || result.starts_with(|character: char| character.is_numeric()) {
        result.insert_str(0, "Sheet");
    }
    result
}

/// Sanitizes a column name into a field identifier. Invalid characters become
/// underscores and keywords gain a trailing underscore; the serde rename
/// attribute preserves the JSON spelling whenever the two differ.
fn field_name(name: &str) -> String {
    let mut result = String::new();
    for character in name.chars() {
        if character.is_alphanumeric() || character == '_' {
            result.push(character);
        } else {
            result.push('_');
        }
    }
    if result.is_empty() || result.starts_with(|character: char| character.is_numeric()) {
        result.insert(0, '_');
    }
    if KEYWORDS.contains(&result.as_str()) {
        result.push('_');
    }
    result
}

fn escape_literal(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
