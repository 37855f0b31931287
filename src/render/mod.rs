//! Rendering module for converting semantic trees to debug output.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{HighlightStyle, RenderOptions, DEFAULT_CHAR_DISPLAY_LIMIT};
pub use text::{to_text, truncate_summary};
