// EssaySort - core/export.rs
//
// Export of the rendered view as HTML markup, and of the categorized
// collection as JSON or CSV.
// Core layer: writes to any Write trait object.

use crate::core::document::{Document, NodeId};
use crate::core::model::{CategorizedCollection, CategoryDescriptor};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serialise `node` and its subtree to HTML.
///
/// Output is deterministic: the class list comes first, then the other
/// attributes in name order.
pub fn to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    let tag = doc.tag(node);
    out.push('<');
    out.push_str(tag);

    let classes = doc.classes(node);
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&classes.join(" ")));
        out.push('"');
    }
    for (name, value) in doc.attributes(node) {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        return;
    }

    out.push_str(&escape_text(doc.text(node)));
    for child in doc.children(node) {
        write_node(doc, *child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Write a complete HTML document for the subtree rooted at `node`.
pub fn export_html<W: Write>(
    doc: &Document,
    node: NodeId,
    mut writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    let io_err = |e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };
    writer.write_all(b"<!DOCTYPE html>\n").map_err(io_err)?;
    writer
        .write_all(to_html(doc, node).as_bytes())
        .map_err(io_err)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Export the collection as a JSON object keyed by category.
///
/// Returns the number of items written.
pub fn export_json<W: Write>(
    collection: &CategorizedCollection,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, collection).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(collection.total())
}

/// Export the collection as CSV, one row per item, categories in
/// descriptor order.
///
/// Writes: category, title, text, href
pub fn export_csv<W: Write>(
    collection: &CategorizedCollection,
    categories: &[CategoryDescriptor],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["category", "title", "text", "href"])
        .map_err(csv_err)?;

    let mut count = 0;
    for descriptor in categories {
        for item in collection.items(descriptor.key) {
            csv_writer
                .write_record([
                    descriptor.key.as_str(),
                    descriptor.title,
                    item.text(),
                    item.href(),
                ])
                .map_err(csv_err)?;
            count += 1;
        }
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}
