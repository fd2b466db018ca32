//! `meta.xml` rendering.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::{DwcaError, Result};
use crate::table::Table;

/// Darwin Core text namespace.
const DWC_TEXT_NS: &str = "http://rs.tdwg.org/dwc/text/";

/// Write `meta.xml` into the destination directory: one `<core>` block,
/// one `<extension>` block per extension in order, and an `<id>`/`<coreid>`
/// element only when an index field was found.
pub fn write_meta(
    dest: &Path,
    core: &Table,
    extensions: &[Table],
    index: Option<&str>,
) -> Result<()> {
    let path = dest.join("meta.xml");
    debug!(path = %path.display(), "writing meta.xml");
    let file = File::create(&path).map_err(|e| DwcaError::Output {
        path: path.clone(),
        source: e,
    })?;

    let mut writer = MetaWriter::new(BufWriter::new(file));
    writer
        .render(core, extensions, index)
        .and_then(|()| writer.into_inner().flush())
        .map_err(|e| DwcaError::Output {
            path: path.clone(),
            source: e,
        })
}

/// Structured writer over the descriptor's element sequence.
struct MetaWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> MetaWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            xml: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    fn render(&mut self, core: &Table, extensions: &[Table], index: Option<&str>) -> io::Result<()> {
        let mut root = BytesStart::new("archive");
        root.push_attribute(("xmlns", DWC_TEXT_NS));
        root.push_attribute(("metadata", "eml.xml"));
        self.event(Event::Start(root))?;

        let stamp = format!(
            " Generated on {} ",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        self.event(Event::Comment(BytesText::new(&stamp)))?;

        self.table(core, "core", "id", index)?;
        for extension in extensions {
            self.table(extension, "extension", "coreid", index)?;
        }

        self.event(Event::End(BytesEnd::new("archive")))
    }

    /// One `<core>` or `<extension>` block.
    fn table(&mut self, table: &Table, element: &str, id_element: &str, index: Option<&str>) -> io::Result<()> {
        let params = table.params();
        let fields = table.fields().unwrap_or_default();

        let row_type = params.row_type.clone().unwrap_or_default();
        let encoding = params.encoding.clone().unwrap_or_default();
        let fields_terminated = attr_translate(params.fields_terminated_by.as_deref());
        let lines_terminated = attr_translate(params.lines_terminated_by.as_deref());
        let fields_enclosed = attr_translate(params.fields_enclosed_by.as_deref());
        let skip = params.ignore_header_lines.unwrap_or(0).to_string();

        let mut open = BytesStart::new(element);
        open.push_attribute(("rowType", row_type.as_str()));
        open.push_attribute(("encoding", encoding.as_str()));
        open.push_attribute(("fieldsTerminatedBy", fields_terminated.as_str()));
        open.push_attribute(("linesTerminatedBy", lines_terminated.as_str()));
        open.push_attribute(("fieldsEnclosedBy", fields_enclosed.as_str()));
        open.push_attribute(("ignoreHeaderLines", skip.as_str()));
        self.event(Event::Start(open))?;

        self.event(Event::Start(BytesStart::new("files")))?;
        self.event(Event::Start(BytesStart::new("location")))?;
        self.event(Event::Text(BytesText::new(table.filename())))?;
        self.event(Event::End(BytesEnd::new("location")))?;
        self.event(Event::End(BytesEnd::new("files")))?;

        // The id element names the position of the index field in this
        // table's own column order; omitted entirely when no index exists.
        if let Some(position) = index.and_then(|idx| fields.iter().position(|f| f == idx)) {
            let mut id = BytesStart::new(id_element);
            let position = position.to_string();
            id.push_attribute(("index", position.as_str()));
            self.event(Event::Empty(id))?;
        }

        for (position, term) in fields.iter().enumerate() {
            let mut field = BytesStart::new("field");
            let position = position.to_string();
            field.push_attribute(("index", position.as_str()));
            field.push_attribute(("term", term.as_str()));
            self.event(Event::Empty(field))?;
        }

        self.event(Event::End(BytesEnd::new(element)))
    }

    fn event(&mut self, event: Event<'_>) -> io::Result<()> {
        self.xml.write_event(event).map_err(io::Error::other)
    }

    fn into_inner(self) -> W {
        self.xml.into_inner()
    }
}

/// Translate the DwCA delimiter convention: tabs, newlines and carriage
/// returns render as the literal two-character sequences `\t`, `\n` and
/// `\r`. Quote characters are left to the XML attribute escaper, which
/// turns them into `&quot;`.
fn attr_translate(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
