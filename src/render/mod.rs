//! Rendering module: template substitution and the emitter session.

mod emitter;
mod options;
mod template;

pub use emitter::{report_name_from_path, XmlEmitter};
pub use options::EmitOptions;
pub use template::{references_property, replace_all_ignore_case, TagRenderer, VALUE_TOKEN};
