//! Emission options.

use std::path::PathBuf;

/// Options for an emitter session.
///
/// # Example
///
/// ```
/// use xmlemit::EmitOptions;
///
/// let options = EmitOptions::new()
///     .with_schema_file("report.xmlemitter")
///     .with_collapse_whitespace(false);
/// assert!(!options.collapse_whitespace);
/// ```
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Path to the schema file overriding the built-in tag templates.
    /// `None` (or an empty path) uses the defaults.
    pub schema_file: Option<PathBuf>,

    /// Protect space runs with non-breaking-space entities while escaping.
    pub collapse_whitespace: bool,
}

impl EmitOptions {
    /// Create new emit options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema file path.
    pub fn with_schema_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_file = Some(path.into());
        self
    }

    /// Enable or disable whitespace-run protection.
    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            schema_file: None,
            collapse_whitespace: true,
        }
    }
}
