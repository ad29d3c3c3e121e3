//! TOML parser for .methodprune.toml files
//!
//! Handles discovering and deserializing project configuration files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::LookbackStrategy;

/// File name looked up from the working directory upward
pub const PROJECT_FILE_NAME: &str = ".methodprune.toml";

/// A .methodprune.toml file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    /// Settings applied to every run
    #[serde(default)]
    pub defaults: SettingsEntry,

    /// Named method lists
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetEntry>,
}

/// Optional locator and driver settings
///
/// Every field is optional so entries can be layered over each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsEntry {
    /// Doc-comment lookback strategy
    pub lookback: Option<LookbackStrategy>,

    /// Maximum number of lines the lookback inspects
    pub lookback_depth: Option<usize>,

    /// Access modifiers accepted before the method name
    pub modifiers: Option<Vec<String>>,

    /// Remove one blank line after each removed method
    pub trim_blank: Option<bool>,

    /// Exit successfully even when some methods are missing
    pub allow_missing: Option<bool>,
}

/// A `[[preset]]` entry in .methodprune.toml
#[derive(Debug, Clone, Deserialize)]
pub struct PresetEntry {
    /// Name used with `--preset`
    pub name: String,

    /// Optional human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Methods to remove, in order
    #[serde(default)]
    pub methods: Vec<String>,

    /// Settings overriding `[defaults]`
    #[serde(flatten)]
    pub settings: SettingsEntry,

    /// Keys matching no known field, rejected after parsing
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

/// Find the nearest .methodprune.toml from `from` up to the repo root
#[must_use]
pub fn find_project_file(from: &Path) -> Option<PathBuf> {
    let mut current = from.to_path_buf();

    // Normalize: if it's a file, start from parent
    if current.is_file() {
        current = current.parent().unwrap_or(from).to_path_buf();
    }

    loop {
        let candidate = current.join(PROJECT_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at repo root (.git) or filesystem root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Parse .methodprune.toml content
///
/// # Errors
///
/// Returns an error if the content is not valid for the file schema.
pub fn parse_project_file(content: &str) -> anyhow::Result<ProjectFile> {
    let file: ProjectFile = toml::from_str(content)?;

    // `deny_unknown_fields` does not reach through `flatten`
    for preset in &file.presets {
        if let Some(key) = preset.unknown.keys().next() {
            anyhow::bail!("unknown field `{key}` in preset `{}`", preset.name);
        }
    }

    Ok(file)
}

/// Load a .methodprune.toml file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<ProjectFile> {
    let content = fs::read_to_string(path)?;
    parse_project_file(&content)
}
