//! Serializes an element tree with `quick-xml`.

use std::fmt::Display;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::OutputStyle;
use crate::error::{ReportError, ReportResult};

use super::node::XmlElement;

fn xml_error(error: impl Display) -> ReportError {
    ReportError::XmlWrite {
        message: error.to_string(),
    }
}

/// Writes `root` as a UTF-8 document with an XML declaration.
///
/// `Pretty` indents one tab per level; `Compact` writes no whitespace
/// between elements.
pub fn write_document<W: Write>(root: &XmlElement, sink: W, style: OutputStyle) -> ReportResult<()> {
    let mut xml = match style {
        OutputStyle::Pretty => Writer::new_with_indent(sink, b'\t', 1),
        OutputStyle::Compact => Writer::new(sink),
    };
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    write_element(&mut xml, root)?;
    if style == OutputStyle::Pretty {
        xml.get_mut().write_all(b"\n").map_err(xml_error)?;
    }
    xml.into_inner().flush().map_err(xml_error)
}

fn write_element<W: Write>(xml: &mut Writer<W>, element: &XmlElement) -> ReportResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return xml.write_event(Event::Empty(start)).map_err(xml_error);
    }

    xml.write_event(Event::Start(start)).map_err(xml_error)?;
    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        xml.write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
    }
    for child in &element.children {
        write_element(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml_error)
}

/// Renders `root` to a string.
pub fn to_xml_string(root: &XmlElement, style: OutputStyle) -> ReportResult<String> {
    let mut buffer = Vec::new();
    write_document(root, &mut buffer, style)?;
    String::from_utf8(buffer).map_err(xml_error)
}

/// Writes `root` to `dir/file_name` through a temporary file in `dir`.
///
/// The temporary file is removed if anything fails before it is renamed
/// into place.
pub fn write_to_file(
    root: &XmlElement,
    dir: &Path,
    file_name: &str,
    style: OutputStyle,
) -> ReportResult<PathBuf> {
    let target = dir.join(file_name);
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ReportError::io(dir, e))?;
    debug!(temp = %temp.path().display(), "Writing report to temporary file");

    write_document(root, BufWriter::new(temp.as_file_mut()), style)?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ReportError::io(temp.path(), e))?;
    temp.persist(&target)
        .map_err(|e| ReportError::io(&target, e.error))?;
    Ok(target)
}
