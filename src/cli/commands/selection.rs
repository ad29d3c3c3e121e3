//! Turn selection flags into resolved settings and a method list

use std::fs;
use std::path::Path;

use anyhow::Context;
use methodprune::adapters::toml::SettingsEntry;
use methodprune::config::{self, ConfigError, Selection};
use methodprune::core::models::LookbackStrategy;

use crate::cli::app::SelectionArgs;

/// Settings given explicitly on the command line
fn overrides(args: &SelectionArgs) -> Result<SettingsEntry, ConfigError> {
    let lookback = args
        .lookback
        .as_deref()
        .map(str::parse::<LookbackStrategy>)
        .transpose()
        .map_err(ConfigError::InvalidLookback)?;

    let trim_blank = if args.trim_blank {
        Some(true)
    } else if args.keep_blank {
        Some(false)
    } else {
        None
    };

    Ok(SettingsEntry {
        lookback,
        lookback_depth: args.lookback_depth,
        modifiers: (!args.modifiers.is_empty()).then(|| args.modifiers.clone()),
        trim_blank,
        allow_missing: args.allow_missing.then_some(true),
    })
}

/// Resolve the selection for a run
///
/// `names` are appended after the preset, methods file and `--method` flags.
pub fn resolve(
    args: &SelectionArgs,
    names: &[String],
    config_path: Option<&Path>,
) -> anyhow::Result<Selection> {
    let cwd = std::env::current_dir()?;
    let (catalog, _) = config::load_catalog(config_path, &cwd)?;

    let mut extra = Vec::new();
    if let Some(path) = &args.methods_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read methods file {}", path.display()))?;
        extra.extend(config::parse_methods_file(&content));
    }
    extra.extend(args.methods.iter().cloned());
    extra.extend(names.iter().cloned());

    Ok(catalog.resolve(args.preset.as_deref(), &overrides(args)?, &extra)?)
}
