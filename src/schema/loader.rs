//! Line-oriented schema-file loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::Slot;

/// The seven output-tag templates for one render session.
///
/// Built once per report render, read-only thereafter. Defaults come from
/// [`Slot::default_template`]; a schema file overrides individual slots.
///
/// # Example
///
/// ```
/// use xmlemit::{Slot, TagTemplates};
///
/// let templates = TagTemplates::default();
/// assert_eq!(templates.get(Slot::Label), "<label>??value</label>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTemplates {
    templates: [String; 7],
}

impl Default for TagTemplates {
    fn default() -> Self {
        Self {
            templates: Slot::ALL.map(|slot| slot.default_template().to_string()),
        }
    }
}

impl TagTemplates {
    /// Load templates from a schema file.
    ///
    /// An empty path returns the defaults without touching the
    /// filesystem. A missing or unreadable file is logged and also falls
    /// back to the defaults; whatever lines were read before an I/O
    /// failure are kept. Loading never fails the render.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Self::default();
        }

        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file)),
            Err(e) => {
                log::warn!(
                    "cannot open schema file {}: {}; using default templates",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load templates from any buffered reader of schema lines.
    ///
    /// Each line is split at its first `=`. Lines without a separator, or
    /// with the separator in first position, are skipped silently so
    /// blank lines and comments pass through. Unknown keys are ignored
    /// for forward compatibility. Matched slots take the text after the
    /// separator verbatim, untrimmed and unvalidated.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut templates = Self::default();

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("error reading schema file: {e}; keeping templates loaded so far");
                    break;
                }
            };

            let Some(pos) = line.find('=') else { continue };
            if pos == 0 {
                continue;
            }

            let key = &line[..pos];
            if let Some(slot) = Slot::from_key(key) {
                templates.set(slot, &line[pos + 1..]);
            }
        }

        templates
    }

    /// Get the template for a slot.
    pub fn get(&self, slot: Slot) -> &str {
        &self.templates[slot.index()]
    }

    /// Overwrite the template for a slot.
    pub fn set(&mut self, slot: Slot, template: impl Into<String>) {
        self.templates[slot.index()] = template.into();
    }
}
