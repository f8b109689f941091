//! sheet2json CLI - Convert spreadsheet workbooks to JSON configuration files
//!
//! Reads one workbook (or every workbook matching a glob pattern), converts
//! the eligible sheets to JSON, and optionally emits Rust struct definitions
//! matching the exported layout.

use anyhow::{bail, Context, Result};
use clap::Parser;
use sheet2json::{
    ConvertOptions, DateStyle, JsonExporter, RustDefineGenerator, Spreadsheet, TextEncoding,
};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sheet2json")]
#[command(about = "Convert Excel and OpenDocument spreadsheets to JSON")]
#[command(version)]
struct Cli {
    /// Input workbook path, or a glob pattern matching several workbooks
    input: String,

    /// Output JSON file (defaults to the input path with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write Rust struct definitions for the converted sheets to this file
    #[arg(long)]
    code: Option<PathBuf>,

    /// Header row count; data starts on the next row (row 1 names the
    /// columns, row 2 declares their types)
    #[arg(long, default_value = "3")]
    header: usize,

    /// Output text encoding: utf8-nobom, utf8-bom, a WHATWG label, or a
    /// Windows code page number
    #[arg(long, default_value = "utf8-nobom")]
    encoding: String,

    /// Lower-case every exported field name
    #[arg(long)]
    lowcase: bool,

    /// Export each sheet as an array of records instead of an object keyed
    /// by the first column
    #[arg(short = 'a', long)]
    array: bool,

    /// Date format for datetime cells
    #[arg(long, default_value = "yyyy/MM/dd")]
    date_format: String,

    /// Key the document by sheet name even when only one sheet converts
    #[arg(long)]
    force_sheet_name: bool,

    /// Skip sheets and columns whose names start with this prefix
    #[arg(long, default_value = "")]
    exclude_prefix: String,

    /// Parse string cells that look like JSON arrays or objects
    #[arg(long)]
    cell_json: bool,

    /// Render every exported value as a string
    #[arg(long)]
    all_string: bool,

    /// Number of trailing columns to ignore on every sheet
    #[arg(long, default_value = "1")]
    ignore_trailing: usize,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.header == 0 {
        bail!("Header row count must be at least 1");
    }
    let encoding = TextEncoding::resolve(&cli.encoding)?;
    let options = ConvertOptions {
        first_data_row: cli.header - 1,
        lowercase_fields: cli.lowcase,
        export_array: cli.array,
        dates: DateStyle::new(&cli.date_format),
        force_sheet_name: cli.force_sheet_name,
        exclude_prefix: cli.exclude_prefix.clone(),
        cell_json: cli.cell_json,
        all_string: cli.all_string,
        skip_trailing_columns: cli.ignore_trailing,
    };

    let inputs = collect_inputs(&cli.input)?;
    if inputs.len() > 1 && (cli.output.is_some() || cli.code.is_some()) {
        bail!(
            "--output and --code take a single input file, but {} files match '{}'",
            inputs.len(),
            cli.input
        );
    }

    for input in &inputs {
        convert_file(input, cli, &options, &encoding)
            .with_context(|| format!("Failed to convert {}", input.display()))?;
    }
    Ok(())
}

/// Expands the input argument into concrete files. A path that exists is
/// taken as-is; anything else is treated as a glob pattern.
fn collect_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(pattern);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut inputs = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            inputs.push(path);
        }
    }
    if inputs.is_empty() {
        bail!("No input files match '{pattern}'");
    }
    Ok(inputs)
}

fn convert_file(
    input: &Path,
    cli: &Cli,
    options: &ConvertOptions,
    encoding: &TextEncoding,
) -> Result<()> {
    let started = Instant::now();
    let file_name = input
        .file_name()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();

    let mut timer = Instant::now();
    let mut spreadsheet = Spreadsheet::open(input)?;
    let datasets = spreadsheet.load_datasets()?;
    println!(
        "    load spreadsheet elapsed: {} ms",
        timer.elapsed().as_millis()
    );

    timer = Instant::now();
    let exporter = JsonExporter::new(&datasets, options)?;
    println!(
        "    convert to json elapsed: {} ms",
        timer.elapsed().as_millis()
    );

    timer = Instant::now();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("json"));
    exporter.save_to_file(&output, encoding)?;
    println!("    save json elapsed: {} ms", timer.elapsed().as_millis());

    if let Some(code) = &cli.code {
        timer = Instant::now();
        let generator = RustDefineGenerator::new(&file_name, &datasets, options);
        generator.save_to_file(code, encoding)?;
        println!(
            "    generate code elapsed: {} ms",
            timer.elapsed().as_millis()
        );
    }

    println!(
        "[{file_name}] conversion complete in {} ms",
        started.elapsed().as_millis()
    );
    Ok(())
}
