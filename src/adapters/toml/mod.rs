//! TOML project configuration
//!
//! - [`parser`] - Discover and deserialize .methodprune.toml files

pub mod parser;

pub use parser::{
    PROJECT_FILE_NAME, PresetEntry, ProjectFile, SettingsEntry, find_project_file, load_file,
    parse_project_file,
};
