//! Header-to-term lookup table.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{DwcaError, Result};

/// The term-mapping resource shipped with the crate.
const BUNDLED_TERMS: &str = include_str!("terms.csv");

static BUNDLED: Lazy<TermTable> =
    Lazy::new(|| TermTable::from_csv(BUNDLED_TERMS).expect("bundled terms.csv is well-formed"));

/// Maps raw column headers onto controlled-vocabulary term URIs.
///
/// Loaded once and never mutated afterwards, so a single instance can be
/// shared freely. Unrecognised headers pass through unchanged rather than
/// being rejected; the archive descriptor simply carries them verbatim.
#[derive(Debug, Clone)]
pub struct TermTable {
    terms: IndexMap<String, String>,
}

impl TermTable {
    /// Parse a term table from two-column CSV text (`header,term`).
    /// The first row is the resource's own header and is skipped.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut terms = IndexMap::new();
        for record in reader.records() {
            let record = record?;
            let header = record
                .get(0)
                .ok_or_else(|| DwcaError::Config("term table row missing header column".into()))?;
            let term = record
                .get(1)
                .ok_or_else(|| DwcaError::Config("term table row missing term column".into()))?;
            terms.insert(header.to_string(), term.to_string());
        }
        Ok(Self { terms })
    }

    /// The table bundled with the crate, loaded on first use.
    pub fn bundled() -> &'static TermTable {
        &BUNDLED
    }

    /// Map a raw header onto its term, or return the header unchanged
    /// when it is not a known key.
    pub fn lookup<'a>(&'a self, header: &'a str) -> &'a str {
        self.terms.get(header).map_or(header, String::as_str)
    }

    /// Number of known headers.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the table maps nothing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_maps_known_headers() {
        let terms = TermTable::bundled();
        assert_eq!(
            terms.lookup("eventID"),
            "http://rs.tdwg.org/dwc/terms/eventID"
        );
        assert_eq!(
            terms.lookup("parentEventID"),
            "http://rs.tdwg.org/dwc/terms/parentEventID"
        );
        assert_eq!(
            terms.lookup("references"),
            "http://purl.org/dc/terms/references"
        );
    }

    #[test]
    fn unknown_headers_pass_through() {
        let terms = TermTable::bundled();
        assert_eq!(terms.lookup("eventType"), "eventType");
        assert_eq!(terms.lookup(""), "");
    }

    #[test]
    fn custom_table_can_be_injected() {
        let terms = TermTable::from_csv("header,term\nfoo,urn:example:foo\n").unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms.lookup("foo"), "urn:example:foo");
        assert_eq!(terms.lookup("bar"), "bar");
    }
}
