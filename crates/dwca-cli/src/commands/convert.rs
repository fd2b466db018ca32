//! Convert command - assemble a Darwin Core Archive from source files.

use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use dwca::{Archive, FileRuleTable, Table, TableParameters, TermTable};

/// Settings gathered from the command line.
pub struct ConvertOptions {
    pub output: PathBuf,
    pub encoding: String,
    pub title: Option<String>,
    pub creator: Option<String>,
    pub tabs: bool,
}

pub fn run(files: Vec<PathBuf>, options: ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input files exist before any work starts
    for file in &files {
        if !file.exists() {
            return Err(format!("File not found: {}", file.display()).into());
        }
    }

    let defaults = TableParameters {
        encoding: Some(options.encoding),
        fields_terminated_by: Some(if options.tabs { "\t" } else { "," }.to_string()),
        lines_terminated_by: Some(line_separator().to_string()),
        fields_enclosed_by: Some("\"".to_string()),
        ignore_header_lines: Some(1),
        ..TableParameters::default()
    };
    debug!(?defaults, "default parameters");

    let rules = FileRuleTable::bundled();
    let mut tables = files.into_iter().map(|f| Table::new(f, &defaults, rules));
    let core = tables
        .next()
        .ok_or("at least one source file is required")?;
    let mut archive = tables.fold(Archive::new(core), Archive::with_extension);

    if let Some(title) = options.title {
        archive.set_metadata("title", title);
    }
    if let Some(creator) = options.creator {
        archive.set_metadata("creator", creator);
    }

    println!(
        "{} {}",
        "Writing".cyan().bold(),
        options.output.display().to_string().white()
    );
    archive.write(&options.output, TermTable::bundled())?;

    let tables = 1 + archive.extensions().len();
    println!(
        "{} {} table(s) archived under {}",
        "Done".green().bold(),
        tables.to_string().white().bold(),
        options.output.display().to_string().white()
    );

    Ok(())
}

/// Record terminator for newly-declared tables, matching the platform.
fn line_separator() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}
