//! `eml.xml` rendering.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use quick_xml::escape::escape;
use tracing::debug;

use crate::error::{DwcaError, Result};

const DEFAULT_TITLE: &str = "Title goes here";
const DEFAULT_CREATOR: &str = "Creator name";

/// Write `eml.xml` into the destination directory.
///
/// The document is a fixed EML 2.1.1-compatible template; only the title,
/// creator, publication date and date stamp vary, the first two drawn from
/// the archive metadata map.
pub fn write_eml(dest: &Path, metadata: &HashMap<String, String>) -> Result<()> {
    let path = dest.join("eml.xml");
    debug!(path = %path.display(), "writing eml.xml");

    let title = metadata.get("title").map_or(DEFAULT_TITLE, String::as_str);
    let creator = metadata
        .get("creator")
        .map_or(DEFAULT_CREATOR, String::as_str);
    let now = Local::now();
    let document = render(
        &escape(title),
        &escape(creator),
        &now.format("%Y-%m-%d").to_string(),
        &now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    );

    fs::write(&path, document).map_err(|e| DwcaError::Output { path, source: e })
}

fn render(title: &str, creator: &str, pubdate: &str, timestamp: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<eml:eml xmlns:d="eml://ecoinformatics.org/dataset-2.1.0" xmlns:eml="eml://ecoinformatics.org/eml-2.1.1" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:dc="http://purl.org/dc/terms/" xsi:schemaLocation="eml://ecoinformatics.org/eml-2.1.1 http://rs.gbif.org/schema/eml-gbif-profile/1.1/eml-gbif-profile.xsd" system="ALA-Registry" scope="system" xml:lang="en">
  <dataset>
    <title xmlns:lang="en">{title}</title>
    <creator>
      <organizationName>{creator}</organizationName>
    </creator>
    <pubDate>{pubdate}</pubDate>
    <abstract>
      <para>Abstract</para>
    </abstract>
  </dataset>
  <additionalMetadata>
    <metadata>
      <gbif>
        <dateStamp>{timestamp}</dateStamp>
        <hierarchyLevel>dataset</hierarchyLevel>
      </gbif>
    </metadata>
  </additionalMetadata>
</eml:eml>
"#
    )
}
