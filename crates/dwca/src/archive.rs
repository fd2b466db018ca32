//! Archive assembly: index inference, file copies and descriptor output.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::descriptor;
use crate::error::{DwcaError, Result};
use crate::table::Table;
use crate::vocab::TermTable;

/// A Darwin Core Archive under construction: one core table, zero or more
/// extension tables and a free-form metadata map.
///
/// The extension order given at construction is the order the descriptor
/// lists them in. The index field is computed once per [`write`](Archive::write)
/// call.
#[derive(Debug)]
pub struct Archive {
    core: Table,
    extensions: Vec<Table>,
    metadata: HashMap<String, String>,
    index: Option<String>,
}

impl Archive {
    /// Create an archive around its core table.
    pub fn new(core: Table) -> Self {
        Self {
            core,
            extensions: Vec::new(),
            metadata: HashMap::new(),
            index: None,
        }
    }

    /// Append an extension table, preserving declaration order.
    pub fn with_extension(mut self, extension: Table) -> Self {
        self.extensions.push(extension);
        self
    }

    /// The core table.
    pub fn core(&self) -> &Table {
        &self.core
    }

    /// The extension tables, in declaration order.
    pub fn extensions(&self) -> &[Table] {
        &self.extensions
    }

    /// Set a metadata entry (e.g. `title`, `creator`) used by the EML document.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// The index field chosen by the last [`write`](Archive::write), if any.
    pub fn index_field(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Find the shared join field: the intersection of the core's field
    /// terms with every extension's field terms, tie-broken by the core's
    /// original column order. `None` when no common field exists or when
    /// fields have not been mapped yet.
    pub fn find_index_field(&self) -> Option<String> {
        let core_fields = self.core.fields()?;
        let mut shared: HashSet<&str> = core_fields.iter().map(String::as_str).collect();
        for extension in &self.extensions {
            let fields = extension.fields()?;
            shared.retain(|f| fields.iter().any(|candidate| candidate == f));
        }
        core_fields
            .iter()
            .find(|f| shared.contains(f.as_str()))
            .cloned()
    }

    /// Assemble the archive under `dest`.
    ///
    /// Maps every table's fields, infers the index field, copies the data
    /// files and renders `meta.xml` and `eml.xml`. Any failure aborts
    /// immediately; files already copied remain on disk.
    pub fn write(&mut self, dest: impl AsRef<Path>, terms: &TermTable) -> Result<()> {
        let dest = dest.as_ref();
        fs::create_dir_all(dest).map_err(|e| DwcaError::Output {
            path: dest.to_path_buf(),
            source: e,
        })?;

        self.core.map_fields(terms)?;
        for extension in &mut self.extensions {
            extension.map_fields(terms)?;
        }

        self.index = self.find_index_field();
        debug!(index = ?self.index, "resolved index field");

        self.copy_table_file(dest, &self.core)?;
        for extension in &self.extensions {
            self.copy_table_file(dest, extension)?;
        }

        descriptor::write_meta(dest, &self.core, &self.extensions, self.index.as_deref())?;
        descriptor::write_eml(dest, &self.metadata)?;
        info!(dest = %dest.display(), "archive written");
        Ok(())
    }

    /// Copy one table's data file into the destination directory, skipping
    /// the copy when source and destination are the same file.
    fn copy_table_file(&self, dest: &Path, table: &Table) -> Result<()> {
        let target = dest.join(table.filename());
        if same_file(table.path(), &target) {
            debug!(filename = table.filename(), "source already in place, not copying");
            return Ok(());
        }
        debug!(filename = table.filename(), target = %target.display(), "copying");
        fs::copy(table.path(), &target).map_err(|e| DwcaError::Output {
            path: target.clone(),
            source: e,
        })?;
        Ok(())
    }
}

/// True when both paths name the same existing file. Paths that do not
/// both resolve compare textually, so a not-yet-written target never
/// matches its source.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
