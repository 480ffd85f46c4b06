//! Template slot names and built-in defaults.

use std::fmt;

/// One of the seven named template positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The XML declaration emitted first.
    Start,
    /// The report-open tag.
    Report,
    /// Template for label elements.
    Label,
    /// Template for text elements.
    Text,
    /// Template for data elements.
    Data,
    /// Template for image elements.
    Image,
    /// The closing tag emitted last.
    End,
}

impl Slot {
    /// All slots, in emission-relevant order.
    pub const ALL: [Slot; 7] = [
        Slot::Start,
        Slot::Report,
        Slot::Label,
        Slot::Text,
        Slot::Data,
        Slot::Image,
        Slot::End,
    ];

    /// Match a schema-file key against the slot names, case-insensitively.
    pub fn from_key(key: &str) -> Option<Slot> {
        let slot = match key.to_ascii_lowercase().as_str() {
            "start" => Slot::Start,
            "report" => Slot::Report,
            "label" => Slot::Label,
            "text" => Slot::Text,
            "data" => Slot::Data,
            "image" => Slot::Image,
            "end" => Slot::End,
            _ => return None,
        };
        Some(slot)
    }

    /// The slot's schema-file key.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Start => "start",
            Slot::Report => "report",
            Slot::Label => "label",
            Slot::Text => "text",
            Slot::Data => "data",
            Slot::Image => "image",
            Slot::End => "end",
        }
    }

    /// The built-in template used when the schema file omits this slot.
    pub fn default_template(&self) -> &'static str {
        match self {
            Slot::Start => "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            Slot::Report => "<report>",
            Slot::Label => "<label>??value</label>",
            Slot::Text => "<text>??value</text>",
            Slot::Data => "<data name=\"??Name\">??value</data>",
            Slot::Image => "<image>??value</image>",
            Slot::End => "</report>",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
