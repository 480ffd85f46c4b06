//! Schema-file loading and tag template storage.
//!
//! A schema file is a plain-text resource of `Name=Template` lines that
//! overrides the built-in output-tag templates, one per slot. The loader
//! is deliberately forgiving: malformed lines and unknown keys are
//! skipped, and an unreadable file falls back to the defaults so a render
//! never aborts over configuration.

mod loader;
mod slot;

pub use loader::TagTemplates;
pub use slot::Slot;
