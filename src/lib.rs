//! # xmlemit
//!
//! Schema-driven XML report emission for Rust.
//!
//! This library renders structured report elements into a customizable
//! XML-like text format. Instead of a fixed schema, the output shape is
//! defined by per-kind tag templates carrying `??Property` placeholder
//! tokens and a reserved `??value` payload token. Templates come from an
//! external, user-editable schema file of `name=template` lines, with
//! built-in defaults for anything the file omits.
//!
//! ## Quick Start
//!
//! ```
//! use xmlemit::{emit_to_string, ContentItem, EmitOptions};
//!
//! fn main() -> xmlemit::Result<()> {
//!     let report = ContentItem::report();
//!     let items = vec![
//!         ContentItem::label("Quarterly Summary"),
//!         ContentItem::data("42").with_property("Name", "Total"),
//!     ];
//!
//!     let xml = emit_to_string(&report, &items, &EmitOptions::default())?;
//!     assert!(xml.contains("<data name=\"Total\">42</data>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Customizable output**: every tag is a template loaded from a
//!   schema file, overriding hard-coded defaults slot by slot
//! - **Safe text encoding**: reserved characters become entities, illegal
//!   XML characters are dropped, high codepoints become numeric
//!   references, and space runs can be protected with `&nbsp;`
//! - **Forgiving configuration**: malformed schema lines and unreadable
//!   files fall back to defaults instead of failing the render
//! - **Image payloads**: binary content is base64-encoded into the value
//!   placeholder; a failed fetch renders as an empty value

pub mod error;
pub mod escape;
pub mod model;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use error::{Error, Result};
pub use escape::escape_xml;
pub use model::{properties_for, ContentItem, ContentKind, ContentSource, Payload};
pub use render::{
    references_property, replace_all_ignore_case, report_name_from_path, EmitOptions, TagRenderer,
    XmlEmitter, VALUE_TOKEN,
};
pub use schema::{Slot, TagTemplates};

use std::io::Write;

/// Emit a report and its content elements to a writer.
///
/// Writes the start tag, the rendered report-open tag, one line per
/// element and the end tag, in that order.
pub fn emit_to_writer<W: Write>(
    report: &dyn ContentSource,
    items: &[ContentItem],
    options: &EmitOptions,
    writer: W,
) -> Result<W> {
    let mut emitter = XmlEmitter::new(writer, options);
    emitter.start(report)?;
    for item in items {
        emitter.item(item)?;
    }
    emitter.finish()
}

/// Emit a report and its content elements to a string.
///
/// # Example
///
/// ```
/// use xmlemit::{emit_to_string, ContentItem, EmitOptions};
///
/// let xml = emit_to_string(
///     &ContentItem::report(),
///     &[ContentItem::text("hello")],
///     &EmitOptions::default(),
/// ).unwrap();
/// assert!(xml.starts_with("<?xml"));
/// ```
pub fn emit_to_string(
    report: &dyn ContentSource,
    items: &[ContentItem],
    options: &EmitOptions,
) -> Result<String> {
    let buf = emit_to_writer(report, items, options, Vec::new())?;
    // Every written fragment came from a &str, so this never loses data.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Builder for configuring and running an emission.
///
/// # Example
///
/// ```no_run
/// use xmlemit::{ContentItem, XmlEmit};
///
/// let xml = XmlEmit::new()
///     .with_schema_file("report.xmlemitter")
///     .collapse_whitespace(false)
///     .emit_to_string(&ContentItem::report(), &[])?;
/// # Ok::<(), xmlemit::Error>(())
/// ```
pub struct XmlEmit {
    options: EmitOptions,
}

impl XmlEmit {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: EmitOptions::default(),
        }
    }

    /// Set the schema file overriding the built-in templates.
    pub fn with_schema_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_schema_file(path);
        self
    }

    /// Enable or disable whitespace-run protection during escaping.
    pub fn collapse_whitespace(mut self, collapse: bool) -> Self {
        self.options = self.options.with_collapse_whitespace(collapse);
        self
    }

    /// Start an emitter session on a writer.
    pub fn emitter<W: Write>(&self, writer: W) -> XmlEmitter<W> {
        XmlEmitter::new(writer, &self.options)
    }

    /// Emit a full report to a string.
    pub fn emit_to_string(
        &self,
        report: &dyn ContentSource,
        items: &[ContentItem],
    ) -> Result<String> {
        emit_to_string(report, items, &self.options)
    }
}

impl Default for XmlEmit {
    fn default() -> Self {
        Self::new()
    }
}
