//! Template token substitution.
//!
//! Templates are literal output tags carrying `??Name` placeholder tokens
//! and one reserved `??value` token. The renderer scans the element's
//! property table in declaration order, substitutes every occurrence of
//! each referenced token case-insensitively, and resolves `??value` last
//! so a property token can never pre-empt the payload.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::escape::escape_xml;
use crate::model::{properties_for, ContentSource, Payload};

/// Reserved token resolved from the element's payload, never looked up as
/// a named property.
pub const VALUE_TOKEN: &str = "??value";

/// Prefix introducing a property token inside a template.
const TOKEN_PREFIX: &str = "??";

/// Replace every occurrence of `pattern` in `haystack`, matching
/// ASCII-case-insensitively.
///
/// Unmatched trailing text is appended verbatim. An empty pattern is a
/// caller contract violation and fails with [`Error::EmptyPattern`]
/// rather than silently doing nothing.
pub fn replace_all_ignore_case(
    haystack: &str,
    pattern: &str,
    replacement: &str,
) -> Result<String> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }

    // ASCII lowercasing preserves byte offsets, so indices found in the
    // lowered copies are valid boundaries in the originals.
    let hay_lower = haystack.to_ascii_lowercase();
    let pat_lower = pattern.to_ascii_lowercase();

    let mut result = String::with_capacity(haystack.len());
    let mut start = 0;
    while let Some(found) = hay_lower[start..].find(&pat_lower) {
        let pos = start + found;
        result.push_str(&haystack[start..pos]);
        result.push_str(replacement);
        start = pos + pattern.len();
    }
    result.push_str(&haystack[start..]);
    Ok(result)
}

/// Check whether a template references a property.
///
/// A property counts as referenced when its bare name appears anywhere in
/// the template text, case-insensitively, at a position greater than
/// zero. This is deliberately permissive: a template author only has to
/// type the name somewhere after the first character.
pub fn references_property(template: &str, name: &str) -> bool {
    template
        .to_ascii_lowercase()
        .find(&name.to_ascii_lowercase())
        .is_some_and(|pos| pos > 0)
}

/// Renders one content item through a slot template.
#[derive(Debug, Clone)]
pub struct TagRenderer {
    collapse_whitespace: bool,
}

impl TagRenderer {
    /// Create a renderer. `collapse_whitespace` is forwarded to the
    /// escaper for every text value.
    pub fn new(collapse_whitespace: bool) -> Self {
        Self {
            collapse_whitespace,
        }
    }

    /// Substitute an item's properties and payload into a template.
    ///
    /// Properties are resolved in their table's declaration order; a
    /// property whose token does not appear in the template never
    /// triggers an accessor call, and an unset property substitutes as an
    /// empty string. The `??value` token is resolved last from the
    /// payload: escaped literal text, base64 for image bytes, or empty
    /// for a failed binary fetch.
    pub fn render(&self, template: &str, item: &dyn ContentSource) -> Result<String> {
        let mut tag = template.to_string();

        for name in properties_for(item.kind()) {
            if !references_property(&tag, name) {
                continue;
            }
            let value = item.property(name).unwrap_or_default();
            let value = escape_xml(&value, self.collapse_whitespace);
            let token = format!("{TOKEN_PREFIX}{name}");
            tag = replace_all_ignore_case(&tag, &token, &value)?;
        }

        let payload = self.payload_text(item.payload());
        replace_all_ignore_case(&tag, VALUE_TOKEN, &payload)
    }

    fn payload_text(&self, payload: &Payload) -> String {
        match payload {
            Payload::Text(text) => escape_xml(text, self.collapse_whitespace).into_owned(),
            Payload::Binary(Some(bytes)) => BASE64.encode(bytes),
            Payload::Binary(None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentItem, ContentKind};
    use std::cell::RefCell;

    #[test]
    fn test_replace_all_occurrences() {
        let out = replace_all_ignore_case("??Name and ??NAME", "??name", "X").unwrap();
        assert_eq!(out, "X and X");
    }

    #[test]
    fn test_replace_preserves_unmatched_tail() {
        let out = replace_all_ignore_case("<a>??x</a>", "??x", "1").unwrap();
        assert_eq!(out, "<a>1</a>");
    }

    #[test]
    fn test_replace_no_match_returns_input() {
        let out = replace_all_ignore_case("<label>", "??name", "X").unwrap();
        assert_eq!(out, "<label>");
    }

    #[test]
    fn test_empty_pattern_fails_fast() {
        let err = replace_all_ignore_case("anything", "", "X").unwrap_err();
        assert!(matches!(err, Error::EmptyPattern));
    }

    #[test]
    fn test_references_property_needs_position_above_zero() {
        assert!(references_property("<label>??Name</label>", "Name"));
        assert!(references_property("x??NAME", "name"));
        // A match at position zero does not count.
        assert!(!references_property("Name=??value", "Name"));
        assert!(!references_property("<label>", "Name"));
    }

    #[test]
    fn test_render_data_template() {
        let renderer = TagRenderer::new(true);
        let item = ContentItem::data("42").with_property("Name", "Total");
        let out = renderer
            .render("<data name=\"??Name\">??value</data>", &item)
            .unwrap();
        assert_eq!(out, "<data name=\"Total\">42</data>");
    }

    #[test]
    fn test_render_null_image_payload() {
        let renderer = TagRenderer::new(true);
        let item = ContentItem::image(None);
        let out = renderer.render("<image>??value</image>", &item).unwrap();
        assert_eq!(out, "<image></image>");
    }

    #[test]
    fn test_render_image_payload_base64() {
        let renderer = TagRenderer::new(true);
        let item = ContentItem::image(Some(b"abc".to_vec()));
        let out = renderer.render("<image>??value</image>", &item).unwrap();
        assert_eq!(out, "<image>YWJj</image>");
    }

    #[test]
    fn test_unset_property_substitutes_empty() {
        let renderer = TagRenderer::new(true);
        let item = ContentItem::label("hi");
        let out = renderer
            .render("<label id=\"??Bookmark\">??value</label>", &item)
            .unwrap();
        assert_eq!(out, "<label id=\"\">hi</label>");
    }

    #[test]
    fn test_payload_text_is_escaped() {
        let renderer = TagRenderer::new(false);
        let item = ContentItem::text("a<b & c");
        let out = renderer.render("<text>??value</text>", &item).unwrap();
        assert_eq!(out, "<text>a&lt;b &amp; c</text>");
    }

    #[test]
    fn test_value_token_resolved_last() {
        // A template naming both a property and ??value must not let the
        // property substitution touch the payload placeholder.
        let renderer = TagRenderer::new(true);
        let item = ContentItem::data("payload").with_property("Name", "n1");
        let out = renderer
            .render("<d n=\"??Name\">??value</d>", &item)
            .unwrap();
        assert_eq!(out, "<d n=\"n1\">payload</d>");
    }

    /// Stub source that counts accessor calls per property name.
    struct CountingSource {
        kind: ContentKind,
        calls: RefCell<Vec<String>>,
    }

    impl CountingSource {
        fn new(kind: ContentKind) -> Self {
            Self {
                kind,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContentSource for CountingSource {
        fn kind(&self) -> ContentKind {
            self.kind
        }

        fn property(&self, name: &str) -> Option<String> {
            self.calls.borrow_mut().push(name.to_string());
            Some("v".to_string())
        }

        fn payload(&self) -> &Payload {
            const EMPTY: &Payload = &Payload::Binary(None);
            EMPTY
        }
    }

    #[test]
    fn test_unreferenced_property_never_hits_accessor() {
        let renderer = TagRenderer::new(true);
        let source = CountingSource::new(ContentKind::Label);

        renderer
            .render("<label toc=\"??TOC\">??value</label>", &source)
            .unwrap();

        let calls = source.calls.borrow();
        assert_eq!(calls.as_slice(), ["TOC"]);
    }

    #[test]
    fn test_plain_template_triggers_no_accessor_calls() {
        let renderer = TagRenderer::new(true);
        let source = CountingSource::new(ContentKind::Label);

        renderer.render("<label>??value</label>", &source).unwrap();
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_scan_matches_bare_name_without_token() {
        // The scan is a substring test on the bare name: the lone "x" in
        // the default text template is enough to query the X property,
        // even though no ??X token exists to substitute.
        let renderer = TagRenderer::new(true);
        let source = CountingSource::new(ContentKind::Text);

        let out = renderer.render("<text>??value</text>", &source).unwrap();
        assert_eq!(out, "<text></text>");
        assert_eq!(source.calls.borrow().as_slice(), ["X"]);
    }
}
