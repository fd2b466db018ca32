//! One source data file and its header-to-term mapping.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DwcaError, Result};
use crate::params::TableParameters;
use crate::vocab::{FileRuleTable, TermTable};

/// A single source table destined for the archive.
///
/// Construction resolves the effective [`TableParameters`] from the rule
/// table and never opens the file; [`map_fields`](Table::map_fields) reads
/// the header row on demand.
#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    filename: String,
    params: TableParameters,
    fields: Option<Vec<String>>,
}

impl Table {
    /// Create a table for a source file, resolving its parameters from the
    /// filename rules layered over the supplied defaults.
    pub fn new(path: impl Into<PathBuf>, defaults: &TableParameters, rules: &FileRuleTable) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let params = rules.resolve(&filename, defaults);
        Self {
            path,
            filename,
            params,
            fields: None,
        }
    }

    /// Full path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare filename, as used for rule matching and in the archive.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Resolved formatting parameters.
    pub fn params(&self) -> &TableParameters {
        &self.params
    }

    /// The mapped field terms, or `None` before [`map_fields`](Table::map_fields) runs.
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    /// Read the header row and map every column onto its term.
    ///
    /// The header is always the first physical row of the file;
    /// `ignore_header_lines` only tells downstream consumers how many rows
    /// to skip and plays no part here. Recomputes identically when called
    /// again on an unchanged file.
    pub fn map_fields(&mut self, terms: &TermTable) -> Result<()> {
        let bytes = fs::read(&self.path).map_err(|e| DwcaError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let label = self.params.encoding.as_deref().unwrap_or("UTF-8");
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .ok_or_else(|| DwcaError::Config(format!("unknown encoding label '{label}'")))?;
        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            return Err(DwcaError::Decode {
                path: self.path.clone(),
                encoding: label.to_string(),
            });
        }

        let mut reader = self.params.csv_reader(text.as_bytes());
        let header = match reader.records().next() {
            Some(record) => record?,
            None => {
                return Err(DwcaError::Io {
                    path: self.path.clone(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "no header row"),
                });
            }
        };

        let fields: Vec<String> = header
            .iter()
            .map(|h| terms.lookup(h).to_string())
            .collect();
        debug!(filename = %self.filename, ?fields, "mapped header fields");
        self.fields = Some(fields);
        Ok(())
    }
}
