//! Emitter session writing rendered tags to an output sink.

use std::io::Write;

use crate::error::Result;
use crate::model::{ContentKind, ContentSource};
use crate::schema::{Slot, TagTemplates};

use super::{EmitOptions, TagRenderer};

/// Resolve a report's `Name` property from its design-file path.
///
/// Best-effort: the original emitter looked for a literal `C:` drive
/// marker and took everything from there to the end, yielding an empty
/// name on any other path shape. The quirk is kept isolated here so it
/// can be fixed or parameterized without touching the renderer.
pub fn report_name_from_path(path: &str) -> &str {
    match path.rfind("C:") {
        Some(pos) => &path[pos..],
        None => "",
    }
}

/// One XML emission session.
///
/// Loads the tag templates once at construction and treats them as
/// read-only for the session's lifetime. Output protocol: the start tag,
/// a line break, the rendered report-open tag, then one rendered line per
/// content element, and finally the end tag with no trailing newline
/// beyond what the template embeds.
///
/// # Example
///
/// ```no_run
/// use xmlemit::{ContentItem, EmitOptions, XmlEmitter};
///
/// fn main() -> xmlemit::Result<()> {
///     let file = std::fs::File::create("report.xml")?;
///     let mut emitter = XmlEmitter::new(file, &EmitOptions::default());
///     emitter.start(&ContentItem::report())?;
///     emitter.item(&ContentItem::label("Hello"))?;
///     emitter.finish()?;
///     Ok(())
/// }
/// ```
pub struct XmlEmitter<W: Write> {
    writer: W,
    templates: TagTemplates,
    renderer: TagRenderer,
}

impl<W: Write> XmlEmitter<W> {
    /// Create an emitter session, loading the schema file named by the
    /// options (or the built-in defaults).
    pub fn new(writer: W, options: &EmitOptions) -> Self {
        let templates = match &options.schema_file {
            Some(path) => TagTemplates::load(path),
            None => TagTemplates::default(),
        };
        Self::with_templates(writer, templates, options)
    }

    /// Create an emitter session with an already-built template set.
    pub fn with_templates(writer: W, templates: TagTemplates, options: &EmitOptions) -> Self {
        log::debug!("starting XML emitter session");
        Self {
            writer,
            templates,
            renderer: TagRenderer::new(options.collapse_whitespace),
        }
    }

    /// The template set in use for this session.
    pub fn templates(&self) -> &TagTemplates {
        &self.templates
    }

    /// Write the start tag and the rendered report-open tag.
    pub fn start(&mut self, report: &dyn ContentSource) -> Result<()> {
        writeln!(self.writer, "{}", self.templates.get(Slot::Start))?;
        let tag = self
            .renderer
            .render(self.templates.get(Slot::Report), report)?;
        writeln!(self.writer, "{tag}")?;
        Ok(())
    }

    /// Render one content element and write it as a single line.
    pub fn item(&mut self, item: &dyn ContentSource) -> Result<()> {
        let slot = match item.kind() {
            ContentKind::Report => Slot::Report,
            ContentKind::Label => Slot::Label,
            ContentKind::Text => Slot::Text,
            ContentKind::Data => Slot::Data,
            ContentKind::Image => Slot::Image,
        };
        let tag = self.renderer.render(self.templates.get(slot), item)?;
        writeln!(self.writer, "{tag}")?;
        Ok(())
    }

    /// Write the end tag, flush, and return the writer.
    pub fn finish(mut self) -> Result<W> {
        write!(self.writer, "{}", self.templates.get(Slot::End))?;
        self.writer.flush()?;
        log::debug!("XML emitter session finished");
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentItem;

    fn emit_default(items: &[ContentItem]) -> String {
        let mut emitter = XmlEmitter::new(Vec::new(), &EmitOptions::default());
        emitter.start(&ContentItem::report()).unwrap();
        for item in items {
            emitter.item(item).unwrap();
        }
        let buf = emitter.finish().unwrap();
        String::from_utf8(buf).expect("emitted output is UTF-8")
    }

    #[test]
    fn test_output_protocol() {
        let out = emit_default(&[ContentItem::label("Hello")]);
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <report>\n\
             <label>Hello</label>\n\
             </report>"
        );
    }

    #[test]
    fn test_no_trailing_newline_after_end_tag() {
        let out = emit_default(&[]);
        assert!(out.ends_with("</report>"));
    }

    #[test]
    fn test_custom_templates() {
        let mut templates = TagTemplates::default();
        templates.set(Slot::Label, "<lbl v=\"??value\"/>");
        templates.set(Slot::End, "</r>");

        let mut emitter =
            XmlEmitter::with_templates(Vec::new(), templates, &EmitOptions::default());
        emitter.start(&ContentItem::report()).unwrap();
        emitter.item(&ContentItem::label("x")).unwrap();
        let out = String::from_utf8(emitter.finish().unwrap()).unwrap();

        assert!(out.contains("<lbl v=\"x\"/>"));
        assert!(out.ends_with("</r>"));
    }

    #[test]
    fn test_report_name_from_path() {
        assert_eq!(
            report_name_from_path("C:\\reports\\sales.rptdesign"),
            "C:\\reports\\sales.rptdesign"
        );
        assert_eq!(
            report_name_from_path("file:/C:/reports/sales.rptdesign"),
            "C:/reports/sales.rptdesign"
        );
        assert_eq!(report_name_from_path("/home/user/sales.rptdesign"), "");
    }
}
