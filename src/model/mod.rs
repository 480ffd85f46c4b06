//! Content model for renderable report elements.
//!
//! This module defines the intermediate representation handed to the tag
//! renderer: a content item is a kind tag plus a set of named properties
//! and a payload. The per-kind property tables drive template-token
//! scanning and bound which properties a template may reference.

mod content;
mod properties;

pub use content::{ContentItem, ContentKind, ContentSource, Payload};
pub use properties::{
    properties_for, DATA_PROPERTIES, IMAGE_PROPERTIES, LABEL_PROPERTIES, REPORT_PROPERTIES,
    TEXT_PROPERTIES,
};
