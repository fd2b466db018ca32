//! Per-table formatting parameters and their merge rules.

use std::io::Read;

use serde::{Deserialize, Serialize};

/// Formatting parameters for one source table.
///
/// Every field is optional until resolution: rule-table entries carry only
/// the fields they override, and [`merge`](TableParameters::merge) layers
/// partial sets on top of each other. Instances are never mutated after
/// construction; merging always produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableParameters {
    /// Controlled-vocabulary URI identifying the row class (Event, Occurrence, ...).
    pub row_type: Option<String>,
    /// Text encoding label, e.g. "UTF-8".
    pub encoding: Option<String>,
    /// Field delimiter.
    pub fields_terminated_by: Option<String>,
    /// Record terminator.
    pub lines_terminated_by: Option<String>,
    /// Quote character wrapping field values.
    pub fields_enclosed_by: Option<String>,
    /// Number of header rows downstream consumers should skip.
    pub ignore_header_lines: Option<u32>,
}

impl TableParameters {
    /// Merge `self` onto `other`, field by field.
    ///
    /// Left-biased: for each field, `self`'s value wins when present,
    /// otherwise `other`'s value is used.
    pub fn merge(&self, other: &TableParameters) -> TableParameters {
        TableParameters {
            row_type: self.row_type.clone().or_else(|| other.row_type.clone()),
            encoding: self.encoding.clone().or_else(|| other.encoding.clone()),
            fields_terminated_by: self
                .fields_terminated_by
                .clone()
                .or_else(|| other.fields_terminated_by.clone()),
            lines_terminated_by: self
                .lines_terminated_by
                .clone()
                .or_else(|| other.lines_terminated_by.clone()),
            fields_enclosed_by: self
                .fields_enclosed_by
                .clone()
                .or_else(|| other.fields_enclosed_by.clone()),
            ignore_header_lines: self.ignore_header_lines.or(other.ignore_header_lines),
        }
    }

    /// Delimiter byte for the csv reader. The csv crate takes a single
    /// byte, so a multi-character delimiter contributes its first byte.
    pub fn delimiter_byte(&self) -> u8 {
        self.fields_terminated_by
            .as_deref()
            .and_then(|s| s.bytes().next())
            .unwrap_or(b',')
    }

    /// Quote byte for the csv reader.
    pub fn quote_byte(&self) -> u8 {
        self.fields_enclosed_by
            .as_deref()
            .and_then(|s| s.bytes().next())
            .unwrap_or(b'"')
    }

    /// Build a csv reader over `input` configured from these parameters.
    /// Quotes escape by doubling, matching how the source files are written.
    pub fn csv_reader<R: Read>(&self, input: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter_byte())
            .quote(self.quote_byte())
            .double_quote(true)
            .has_headers(false)
            .flexible(true)
            .from_reader(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        row_type: Option<&str>,
        encoding: Option<&str>,
        fields: Option<&str>,
        lines: Option<&str>,
        quote: Option<&str>,
        skip: Option<u32>,
    ) -> TableParameters {
        TableParameters {
            row_type: row_type.map(String::from),
            encoding: encoding.map(String::from),
            fields_terminated_by: fields.map(String::from),
            lines_terminated_by: lines.map(String::from),
            fields_enclosed_by: quote.map(String::from),
            ignore_header_lines: skip,
        }
    }

    #[test]
    fn merge_fills_absent_fields_from_other() {
        let one = params(None, Some("UTF-8"), Some(","), None, Some("|"), None);
        let two = params(
            Some("http://rs.tdwg.org/dwc/terms/Event"),
            None,
            None,
            Some("\n"),
            None,
            Some(5),
        );
        let merged = one.merge(&two);
        assert_eq!(
            merged.row_type.as_deref(),
            Some("http://rs.tdwg.org/dwc/terms/Event")
        );
        assert_eq!(merged.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(merged.fields_terminated_by.as_deref(), Some(","));
        assert_eq!(merged.lines_terminated_by.as_deref(), Some("\n"));
        assert_eq!(merged.fields_enclosed_by.as_deref(), Some("|"));
        assert_eq!(merged.ignore_header_lines, Some(5));
    }

    #[test]
    fn merge_is_left_biased() {
        let one = params(
            Some("http://rs.tdwg.org/dwc/terms/Occurrence"),
            Some("UTF-8"),
            Some(","),
            Some("\r\n"),
            Some("|"),
            None,
        );
        let two = params(
            Some("http://rs.tdwg.org/dwc/terms/Event"),
            Some("ASCII"),
            Some("|"),
            Some("\n"),
            Some("\""),
            Some(5),
        );
        let merged = one.merge(&two);
        assert_eq!(
            merged.row_type.as_deref(),
            Some("http://rs.tdwg.org/dwc/terms/Occurrence")
        );
        assert_eq!(merged.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(merged.fields_terminated_by.as_deref(), Some(","));
        assert_eq!(merged.lines_terminated_by.as_deref(), Some("\r\n"));
        assert_eq!(merged.fields_enclosed_by.as_deref(), Some("|"));
        assert_eq!(merged.ignore_header_lines, Some(5));
    }

    #[test]
    fn merge_is_not_symmetric() {
        let one = params(
            Some("http://rs.tdwg.org/dwc/terms/Occurrence"),
            Some("UTF-8"),
            Some(","),
            Some("\r\n"),
            Some("|"),
            None,
        );
        let two = params(
            Some("http://rs.tdwg.org/dwc/terms/Event"),
            Some("ASCII"),
            Some("|"),
            Some("\n"),
            Some("\""),
            Some(5),
        );
        let merged = two.merge(&one);
        assert_eq!(
            merged.row_type.as_deref(),
            Some("http://rs.tdwg.org/dwc/terms/Event")
        );
        assert_eq!(merged.encoding.as_deref(), Some("ASCII"));
        assert_eq!(merged.fields_terminated_by.as_deref(), Some("|"));
        assert_eq!(merged.lines_terminated_by.as_deref(), Some("\n"));
        assert_eq!(merged.fields_enclosed_by.as_deref(), Some("\""));
        assert_eq!(merged.ignore_header_lines, Some(5));
    }

    #[test]
    fn merge_of_empty_sets_is_empty() {
        let merged = TableParameters::default().merge(&TableParameters::default());
        assert_eq!(merged, TableParameters::default());
    }

    #[test]
    fn delimiter_and_quote_default_to_csv_conventions() {
        let empty = TableParameters::default();
        assert_eq!(empty.delimiter_byte(), b',');
        assert_eq!(empty.quote_byte(), b'"');

        let tabs = params(None, None, Some("\t"), None, Some("'"), None);
        assert_eq!(tabs.delimiter_byte(), b'\t');
        assert_eq!(tabs.quote_byte(), b'\'');
    }
}
