//! Filename-pattern-driven parameter overrides.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{DwcaError, Result};
use crate::params::TableParameters;

/// The file-rule resource shipped with the crate.
const BUNDLED_RULES: &str = include_str!("files.csv");

static BUNDLED: Lazy<FileRuleTable> =
    Lazy::new(|| FileRuleTable::from_csv(BUNDLED_RULES).expect("bundled files.csv is well-formed"));

/// One rule: a filename pattern and the partial parameters it contributes.
#[derive(Debug, Clone)]
pub struct FileRule {
    pattern: Regex,
    params: TableParameters,
}

impl FileRule {
    /// Compile a rule. The pattern is anchored so that it must match the
    /// whole filename, not a substring.
    pub fn new(pattern: &str, params: TableParameters) -> Result<Self> {
        let pattern = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self { pattern, params })
    }

    /// True when the rule applies to the given bare filename.
    pub fn matches(&self, filename: &str) -> bool {
        self.pattern.is_match(filename)
    }
}

/// Ordered list of filename rules.
///
/// Rules are evaluated in table order. Every matching rule merges its
/// parameters onto the result accumulated so far, with the rule's own
/// values taking precedence, and the whole accumulation resting on the
/// caller-supplied defaults. Immutable after load.
#[derive(Debug, Clone)]
pub struct FileRuleTable {
    rules: Vec<FileRule>,
}

impl FileRuleTable {
    /// Parse a rule table from CSV text with columns
    /// `pattern,rowType,encoding,fieldsTerminatedBy,linesTerminatedBy,fieldsEnclosedBy,ignoreHeaderLines`.
    /// The first row is the resource's own header and is skipped.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut rules = Vec::new();
        for record in reader.records() {
            let record = record?;
            let pattern = record
                .get(0)
                .ok_or_else(|| DwcaError::Config("rule table row missing pattern column".into()))?;
            let params = TableParameters {
                row_type: normalise(record.get(1)),
                encoding: normalise(record.get(2)),
                fields_terminated_by: normalise(record.get(3)),
                lines_terminated_by: normalise(record.get(4)),
                fields_enclosed_by: normalise(record.get(5)),
                ignore_header_lines: parse_count(record.get(6), pattern)?,
            };
            rules.push(FileRule::new(pattern, params)?);
        }
        Ok(Self { rules })
    }

    /// The table bundled with the crate, loaded on first use.
    pub fn bundled() -> &'static FileRuleTable {
        &BUNDLED
    }

    /// Resolve the effective parameters for a bare filename.
    ///
    /// A filename matching no rule resolves to exactly `defaults`.
    pub fn resolve(&self, filename: &str, defaults: &TableParameters) -> TableParameters {
        let mut params = defaults.clone();
        for rule in self.rules.iter().filter(|r| r.matches(filename)) {
            params = rule.params.merge(&params);
        }
        debug!(filename, ?params, "resolved table parameters");
        params
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Normalise a raw rule value: trim, treat empty as absent, and turn the
/// literal two-character escapes `\t`, `\n` and `\r` into the control
/// characters they denote.
fn normalise(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(
        value
            .replace("\\t", "\t")
            .replace("\\n", "\n")
            .replace("\\r", "\r"),
    )
}

fn parse_count(value: Option<&str>, pattern: &str) -> Result<Option<u32>> {
    match normalise(value) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            DwcaError::Config(format!(
                "rule '{pattern}' has non-numeric ignoreHeaderLines value '{raw}'"
            ))
        }),
    }
}
