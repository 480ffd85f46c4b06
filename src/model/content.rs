//! Content item types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of a renderable report element.
///
/// The kind selects both the template slot used to render the element and
/// the property table the renderer scans for `??Name` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// The report root element.
    Report,
    /// A static label.
    Label,
    /// A text element.
    Text,
    /// A data-bound value.
    Data,
    /// An image with binary content.
    Image,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Report => write!(f, "report"),
            ContentKind::Label => write!(f, "label"),
            ContentKind::Text => write!(f, "text"),
            ContentKind::Data => write!(f, "data"),
            ContentKind::Image => write!(f, "image"),
        }
    }
}

/// Payload of a content item, substituted for the `??value` token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Payload {
    /// Literal text (labels, text elements, data values).
    Text(String),
    /// Binary content, base64-encoded on emission. `None` represents a
    /// payload whose fetch failed; it renders as an empty string.
    Binary(Option<Vec<u8>>),
}

impl Payload {
    /// An empty text payload.
    pub fn empty() -> Self {
        Payload::Text(String::new())
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::empty()
    }
}

/// Source of property values and payload for one renderable element.
///
/// This is the seam between the tag renderer and the host's content
/// objects: the renderer only ever reads through this trait, and tests
/// can substitute call-counting stubs to observe accessor traffic.
pub trait ContentSource {
    /// The element's content kind.
    fn kind(&self) -> ContentKind;

    /// Look up a named property value.
    ///
    /// Names are matched case-insensitively. `None` means the property is
    /// unset; the renderer normalizes it to an empty string.
    fn property(&self, name: &str) -> Option<String>;

    /// The element's payload.
    fn payload(&self) -> &Payload;
}

/// A renderable report element: kind tag, named properties and a payload.
///
/// # Example
///
/// ```
/// use xmlemit::ContentItem;
///
/// let item = ContentItem::data("42")
///     .with_property("Name", "Total")
///     .with_property("Bookmark", "bk-7");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    kind: ContentKind,

    /// Property values keyed by lowercased name.
    properties: HashMap<String, String>,

    payload: Payload,
}

impl ContentItem {
    /// Create a content item of the given kind.
    pub fn new(kind: ContentKind, payload: Payload) -> Self {
        Self {
            kind,
            properties: HashMap::new(),
            payload,
        }
    }

    /// Create the report root element.
    pub fn report() -> Self {
        Self::new(ContentKind::Report, Payload::empty())
    }

    /// Create a label element.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ContentKind::Label, Payload::Text(text.into()))
    }

    /// Create a text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ContentKind::Text, Payload::Text(text.into()))
    }

    /// Create a data element.
    pub fn data(value: impl Into<String>) -> Self {
        Self::new(ContentKind::Data, Payload::Text(value.into()))
    }

    /// Create an image element. Pass `None` when the image bytes could not
    /// be fetched; the value placeholder then renders empty.
    pub fn image(bytes: Option<Vec<u8>>) -> Self {
        Self::new(ContentKind::Image, Payload::Binary(bytes))
    }

    /// Set a property value (builder style).
    pub fn with_property(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Set a property value.
    pub fn set_property(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.properties
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Number of properties set on this item.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl ContentSource for ContentItem {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(&name.to_ascii_lowercase()).cloned()
    }

    fn payload(&self) -> &Payload {
        &self.payload
    }
}
