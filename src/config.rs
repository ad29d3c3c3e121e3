//! Run configuration: presets, layered settings and method lists
//!
//! Settings are layered from lowest to highest precedence:
//! built-in defaults, `[defaults]` of the project file, the selected preset,
//! then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use crate::adapters::toml::{PresetEntry, ProjectFile, SettingsEntry, find_project_file, load_file};
use crate::core::models::LookbackStrategy;
use crate::core::services::{MethodLocator, PruneOptions, Pruner};

/// Suffix appended to the input path when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".cleaned";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No preset with this name exists
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Invalid lookback strategy name
    #[error("{0}")]
    InvalidLookback(String),

    /// A modifier is not a plain keyword
    #[error("invalid access modifier: {0:?}")]
    InvalidModifier(String),

    /// The modifier list is empty
    #[error("at least one access modifier is required")]
    NoModifiers,

    /// A method name is empty or contains whitespace
    #[error("invalid method name: {0:?}")]
    InvalidMethodName(String),

    /// Nothing to remove was requested
    #[error("no methods given; use --method, --methods-file or --preset")]
    NoMethods,

    /// Output path would overwrite the input
    #[error("output path must differ from the input: {}", .0.display())]
    SameInputOutput(PathBuf),
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneSettings {
    /// Doc-comment lookback strategy
    pub lookback: LookbackStrategy,
    /// Lines inspected by the lookback
    pub lookback_depth: usize,
    /// Access modifiers accepted before the method name
    pub modifiers: Vec<String>,
    /// Remove one blank line after each removed method
    pub trim_blank: bool,
    /// Exit successfully even when some methods are missing
    pub allow_missing: bool,
    /// Whether some layer set the depth explicitly
    depth_pinned: bool,
}

impl Default for PruneSettings {
    fn default() -> Self {
        let lookback = LookbackStrategy::default();
        Self {
            lookback,
            lookback_depth: lookback.default_depth(),
            modifiers: vec!["private".to_string(), "public".to_string()],
            trim_blank: false,
            allow_missing: false,
            depth_pinned: false,
        }
    }
}

impl PruneSettings {
    /// Layer `entry` over these settings
    ///
    /// Changing the strategy moves the depth to the strategy's own default,
    /// unless this or an earlier layer set the depth explicitly.
    pub fn apply(&mut self, entry: &SettingsEntry) {
        if let Some(lookback) = entry.lookback {
            self.lookback = lookback;
            if !self.depth_pinned {
                self.lookback_depth = lookback.default_depth();
            }
        }
        if let Some(depth) = entry.lookback_depth {
            self.lookback_depth = depth;
            self.depth_pinned = true;
        }
        if let Some(modifiers) = &entry.modifiers {
            self.modifiers.clone_from(modifiers);
        }
        if let Some(trim) = entry.trim_blank {
            self.trim_blank = trim;
        }
        if let Some(allow) = entry.allow_missing {
            self.allow_missing = allow;
        }
    }

    /// Check the modifier list
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modifiers.is_empty() {
            return Err(ConfigError::NoModifiers);
        }
        if let Some(bad) = self.modifiers.iter().find(|m| !is_keyword(m)) {
            return Err(ConfigError::InvalidModifier(bad.clone()));
        }
        Ok(())
    }

    /// Build the locator described by these settings
    #[must_use]
    pub fn locator(&self) -> MethodLocator {
        MethodLocator::new(self.modifiers.clone(), self.lookback, self.lookback_depth)
    }

    /// Build the pruner described by these settings
    #[must_use]
    pub fn pruner(&self) -> Pruner {
        Pruner::new(
            self.locator(),
            PruneOptions {
                trim_trailing_blank: self.trim_blank,
            },
        )
    }
}

fn is_keyword(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Where a preset was defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSource {
    /// Shipped with the binary
    Builtin,
    /// Read from a .methodprune.toml file
    Project,
}

impl std::fmt::Display for PresetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Project => write!(f, "project"),
        }
    }
}

/// A named method list with its own settings
#[derive(Debug, Clone)]
pub struct Preset {
    /// Name used with `--preset`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Methods to remove, in order
    pub methods: Vec<String>,
    /// Settings layered over the defaults when this preset is used
    pub settings: SettingsEntry,
    /// Where this preset came from
    pub source: PresetSource,
}

impl Preset {
    fn from_entry(entry: PresetEntry) -> Self {
        Self {
            name: entry.name,
            description: entry.description.unwrap_or_default(),
            methods: entry.methods,
            settings: entry.settings,
            source: PresetSource::Project,
        }
    }
}

/// UI methods moved out of the combat scene in the first cleanup pass
const COMBAT_UI_PHASE1: &[&str] = &[
    "createCombatUI",
    "createPlayerUI",
    "createEnemyUI",
    "createHandUI",
    "createPlayedHandUI",
    "createActionButtons",
    "updateActionButtons",
    "createTurnUI",
    "createPokerHandInfoButton",
    "addSampleCard",
    "createRelicsUI",
    "updateRelicsUI",
    "createRelicInventory",
    "createRelicInventoryToggle",
    "updateRelicInventory",
    "showRelicTooltip",
    "hideRelicTooltip",
    "showRelicDetailModal",
    "createButton",
    "updateHandDisplay",
    "createCardSprite",
    "updatePlayerUI",
    "updateEnemyUI",
    "updateTurnUI",
    "createActionResultUI",
    "createDeckSprite",
    "createDiscardSprite",
    "createDeckView",
    "createDiscardView",
    "createDamagePreview",
    "updateDamagePreview",
    "createDDADebugOverlay",
    "toggleDDADebug",
    "updateDDADebugOverlay",
    "getTierColor",
    "createEnemyInfoButton",
];

/// UI methods moved out of the combat scene in the second cleanup pass
const COMBAT_UI_PHASE2: &[&str] = &[
    "createCombatUI",
    "createPlayerUI",
    "createEnemyUI",
    "createHandUI",
    "createActionButtons",
    "updateActionButtons",
    "createHandIndicator",
    "updateHandDisplay",
    "updateHandIndicator",
    "createCardSprite",
    "updatePlayerUI",
    "updateEnemyUI",
    "createPlayerShadow",
    "createEnemyShadow",
    "updatePlayerStatusEffects",
    "updateEnemyStatusEffects",
    "createStatusEffects",
    "updatePlayedHandDisplay",
    "createPokerHandInfoButton",
    "showPokerHandReference",
    "hidePokerHandReference",
];

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Presets shipped with the binary
#[must_use]
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "combat-ui-phase1".to_string(),
            description: "Combat scene UI methods, first pass (private only, short lookback, trims blank)"
                .to_string(),
            methods: to_strings(COMBAT_UI_PHASE1),
            settings: SettingsEntry {
                lookback: Some(LookbackStrategy::Bounded),
                lookback_depth: None,
                modifiers: Some(vec!["private".to_string()]),
                trim_blank: Some(true),
                allow_missing: None,
            },
            source: PresetSource::Builtin,
        },
        Preset {
            name: "combat-ui-phase2".to_string(),
            description: "Combat scene UI methods, second pass (private or public, doc-block lookback)"
                .to_string(),
            methods: to_strings(COMBAT_UI_PHASE2),
            settings: SettingsEntry {
                lookback: Some(LookbackStrategy::DocBlock),
                lookback_depth: None,
                modifiers: Some(vec!["private".to_string(), "public".to_string()]),
                trim_blank: Some(false),
                allow_missing: None,
            },
            source: PresetSource::Builtin,
        },
    ]
}

/// Everything a run needs besides paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Resolved settings
    pub settings: PruneSettings,
    /// Methods to remove, deduplicated, in request order
    pub methods: Vec<String>,
}

/// Available presets and project defaults
#[derive(Debug, Clone)]
pub struct Catalog {
    defaults: SettingsEntry,
    presets: Vec<Preset>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog holding only the built-in presets
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            defaults: SettingsEntry::default(),
            presets: builtin_presets(),
        }
    }

    /// Catalog with a project file layered over the built-ins
    ///
    /// Project presets shadow built-in presets of the same name.
    #[must_use]
    pub fn with_project(file: ProjectFile) -> Self {
        let mut catalog = Self::builtin();
        catalog.defaults = file.defaults;
        for entry in file.presets {
            let preset = Preset::from_entry(entry);
            catalog.presets.retain(|p| p.name != preset.name);
            catalog.presets.push(preset);
        }
        catalog
    }

    /// Built-in defaults with the project `[defaults]` applied
    #[must_use]
    pub fn base_settings(&self) -> PruneSettings {
        let mut settings = PruneSettings::default();
        settings.apply(&self.defaults);
        settings
    }

    /// All presets, built-ins first
    #[must_use]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a preset by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Resolve settings and the method list for one run
    ///
    /// Methods come from the preset first, then `extra` in order.
    pub fn resolve(
        &self,
        preset: Option<&str>,
        overrides: &SettingsEntry,
        extra: &[String],
    ) -> Result<Selection, ConfigError> {
        let mut settings = self.base_settings();

        let mut requested = Vec::new();
        if let Some(name) = preset {
            let preset = self.find(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
            settings.apply(&preset.settings);
            requested.extend(preset.methods.iter().cloned());
        }
        settings.apply(overrides);
        settings.validate()?;

        requested.extend(extra.iter().cloned());
        let methods = dedup_methods(&requested)?;
        if methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }

        Ok(Selection { settings, methods })
    }
}

/// Build the catalog from an explicit config file or the nearest project file
///
/// Returns the catalog and the project file it was read from, if any.
///
/// # Errors
///
/// Returns an error if the explicit file is missing or any file fails to parse.
pub fn load_catalog(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<(Catalog, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_file(cwd),
    };

    match path {
        Some(path) => {
            let file = load_file(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            log::debug!("using project config {}", path.display());
            Ok((Catalog::with_project(file), Some(path)))
        },
        None => Ok((Catalog::builtin(), None)),
    }
}

/// Trim, validate and deduplicate names, keeping the first occurrence
pub fn dedup_methods(names: &[String]) -> Result<Vec<String>, ConfigError> {
    let mut methods: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim().to_string();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidMethodName(name));
        }
        if !methods.contains(&name) {
            methods.push(name);
        }
    }
    Ok(methods)
}

/// Parse a methods file: one name per line, `#` comments and blanks ignored
#[must_use]
pub fn parse_methods_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Output path used when none is given: `<input>.cleaned`
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(DEFAULT_OUTPUT_SUFFIX);
    PathBuf::from(path)
}

/// Reject an output path that points at the input file
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<(), ConfigError> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        return Err(ConfigError::SameInputOutput(output.to_path_buf()));
    }
    Ok(())
}
