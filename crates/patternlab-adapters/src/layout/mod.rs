//! Layout source adapters.

mod builtin;
mod toml_file;

pub use builtin::{BuiltinLayout, demo_layout};
pub use toml_file::{LayoutFileError, TomlLayoutFile, parse_layout, render_layout};
