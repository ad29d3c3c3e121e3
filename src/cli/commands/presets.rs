//! List and inspect presets

use std::path::Path;

use methodprune::config::{self, ConfigError};
use methodprune::output::{OutputMode, PresetInfo, PresetListResult};

/// List presets, or show the one named `name`
pub fn presets(
    name: Option<&str>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (catalog, project_file) = config::load_catalog(config_path, &cwd)?;
    if let Some(path) = &project_file {
        log::debug!("presets from {}", path.display());
    }

    let base = catalog.base_settings();
    let presets = match name {
        Some(name) => {
            let preset = catalog
                .find(name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
            vec![PresetInfo::new(preset, &base)]
        },
        None => catalog.presets().iter().map(|p| PresetInfo::new(p, &base)).collect(),
    };

    PresetListResult {
        presets,
        detailed: name.is_some(),
    }
    .render(mode);

    Ok(())
}
