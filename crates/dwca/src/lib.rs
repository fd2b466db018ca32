//! dwca: build Darwin Core Archives from delimited tabular data.
//!
//! A Darwin Core Archive is a directory holding a core data table, any
//! number of extension tables, a `meta.xml` descriptor mapping column
//! positions onto controlled-vocabulary terms and an `eml.xml` metadata
//! document. This crate takes plain CSV/TSV files and assembles that
//! directory: per-file formatting parameters resolve through a bundled
//! filename-rule table, raw column headers map onto Darwin Core term URIs,
//! and the join field shared between core and extensions is inferred from
//! the mapped headers.
//!
//! # Example
//!
//! ```no_run
//! use dwca::{Archive, FileRuleTable, Table, TableParameters, TermTable};
//!
//! let defaults = TableParameters {
//!     encoding: Some("UTF-8".into()),
//!     fields_terminated_by: Some(",".into()),
//!     lines_terminated_by: Some("\n".into()),
//!     fields_enclosed_by: Some("\"".into()),
//!     ignore_header_lines: Some(1),
//!     ..TableParameters::default()
//! };
//! let rules = FileRuleTable::bundled();
//!
//! let core = Table::new("event.csv", &defaults, rules);
//! let occurrences = Table::new("occurrence.csv", &defaults, rules);
//!
//! let mut archive = Archive::new(core).with_extension(occurrences);
//! archive.write("./dwca", TermTable::bundled()).unwrap();
//! ```

pub mod archive;
pub mod descriptor;
pub mod error;
pub mod params;
pub mod table;
pub mod vocab;

pub use archive::Archive;
pub use error::{DwcaError, Result};
pub use params::TableParameters;
pub use table::Table;
pub use vocab::{FileRule, FileRuleTable, TermTable};
