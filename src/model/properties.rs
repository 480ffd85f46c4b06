//! Per-kind property tables.
//!
//! Each content kind recognizes a fixed, ordered list of property names.
//! The tag renderer scans these lists in declaration order when deciding
//! which `??Name` tokens a template references, so a name absent from its
//! kind's table can never be substituted.

use super::ContentKind;

/// Properties recognized by image templates.
pub const IMAGE_PROPERTIES: &[&str] = &[
    "Bookmark",
    "Height",
    "Hyperlink",
    "ImageMap",
    "InlineStyle",
    "MIMEType",
    "Name",
    "Style",
    "TOC",
    "URI",
    "Width",
    "X",
    "Y",
];

/// Properties recognized by data templates.
pub const DATA_PROPERTIES: &[&str] = &[
    "Bookmark",
    "Height",
    "Hyperlink",
    "InlineStyle",
    "Name",
    "Style",
    "TOC",
    "Width",
    "X",
    "Y",
    "LabelText",
    "LabelKey",
];

/// Properties recognized by label templates.
pub const LABEL_PROPERTIES: &[&str] = &[
    "Bookmark",
    "Height",
    "Hyperlink",
    "InlineStyle",
    "Name",
    "TOC",
    "Width",
    "X",
    "Y",
    "LabelText",
    "LabelKey",
];

/// Properties recognized by text templates.
pub const TEXT_PROPERTIES: &[&str] = &[
    "Bookmark",
    "Height",
    "Hyperlink",
    "InlineStyle",
    "Name",
    "Style",
    "TOC",
    "Width",
    "X",
    "Y",
];

/// Properties recognized by the report-open template.
pub const REPORT_PROPERTIES: &[&str] = &["TotalPages", "TOCTree", "Name"];

/// Get the ordered property list for a content kind.
pub fn properties_for(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Report => REPORT_PROPERTIES,
        ContentKind::Label => LABEL_PROPERTIES,
        ContentKind::Text => TEXT_PROPERTIES,
        ContentKind::Data => DATA_PROPERTIES,
        ContentKind::Image => IMAGE_PROPERTIES,
    }
}
