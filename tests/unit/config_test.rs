//! Tests for presets, layered settings and method lists

use std::path::{Path, PathBuf};

use methodprune::adapters::toml::{SettingsEntry, parse_project_file};
use methodprune::config::{
    Catalog, ConfigError, PresetSource, PruneSettings, builtin_presets, dedup_methods,
    default_output_path, ensure_distinct, load_catalog, parse_methods_file,
};
use methodprune::core::models::LookbackStrategy;

use crate::common::TestDir;

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Defaults and presets
// =============================================================================

#[test]
fn test_default_settings() {
    let settings = PruneSettings::default();
    assert_eq!(settings.lookback, LookbackStrategy::DocBlock);
    assert_eq!(settings.lookback_depth, 20);
    assert_eq!(settings.modifiers, strings(&["private", "public"]));
    assert!(!settings.trim_blank);
    assert!(!settings.allow_missing);
}

#[test]
fn test_builtin_presets_reproduce_both_passes() {
    let presets = builtin_presets();
    let phase1 = &presets[0];
    let phase2 = &presets[1];

    assert_eq!(phase1.name, "combat-ui-phase1");
    assert_eq!(phase1.settings.lookback, Some(LookbackStrategy::Bounded));
    assert_eq!(phase1.settings.modifiers, Some(strings(&["private"])));
    assert_eq!(phase1.settings.trim_blank, Some(true));
    assert!(phase1.methods.contains(&"getTierColor".to_string()));

    assert_eq!(phase2.name, "combat-ui-phase2");
    assert_eq!(phase2.settings.lookback, Some(LookbackStrategy::DocBlock));
    assert_eq!(phase2.settings.trim_blank, Some(false));
    assert_eq!(phase2.methods.first().map(String::as_str), Some("createCombatUI"));
    assert_eq!(phase2.methods.last().map(String::as_str), Some("hidePokerHandReference"));
    assert!(presets.iter().all(|p| p.source == PresetSource::Builtin));
}

#[test]
fn test_resolve_preset() {
    let selection = Catalog::builtin()
        .resolve(Some("combat-ui-phase1"), &SettingsEntry::default(), &[])
        .unwrap();

    assert_eq!(selection.settings.lookback, LookbackStrategy::Bounded);
    assert_eq!(selection.settings.lookback_depth, 3);
    assert_eq!(selection.settings.modifiers, strings(&["private"]));
    assert!(selection.settings.trim_blank);
    assert_eq!(selection.methods.len(), 36);
}

#[test]
fn test_cli_overrides_beat_preset() {
    let overrides = SettingsEntry {
        trim_blank: Some(false),
        lookback_depth: Some(5),
        ..SettingsEntry::default()
    };
    let selection = Catalog::builtin()
        .resolve(Some("combat-ui-phase1"), &overrides, &[])
        .unwrap();

    assert!(!selection.settings.trim_blank);
    assert_eq!(selection.settings.lookback_depth, 5);
    assert_eq!(selection.settings.lookback, LookbackStrategy::Bounded);
}

#[test]
fn test_extra_methods_follow_preset_and_dedupe() {
    let selection = Catalog::builtin()
        .resolve(
            Some("combat-ui-phase2"),
            &SettingsEntry::default(),
            &strings(&["createCombatUI", "extraMethod"]),
        )
        .unwrap();

    assert_eq!(selection.methods.len(), 22);
    assert_eq!(selection.methods.last().map(String::as_str), Some("extraMethod"));
}

#[test]
fn test_unknown_preset() {
    let err = Catalog::builtin()
        .resolve(Some("nope"), &SettingsEntry::default(), &[])
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "nope"));
}

#[test]
fn test_no_methods_is_an_error() {
    let err = Catalog::builtin().resolve(None, &SettingsEntry::default(), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::NoMethods));
}

#[test]
fn test_invalid_modifier_rejected() {
    let overrides = SettingsEntry {
        modifiers: Some(strings(&["private|public"])),
        ..SettingsEntry::default()
    };
    let err = Catalog::builtin().resolve(None, &overrides, &strings(&["a"])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidModifier(_)));
}

#[test]
fn test_empty_modifier_list_rejected() {
    let overrides = SettingsEntry {
        modifiers: Some(Vec::new()),
        ..SettingsEntry::default()
    };
    let err = Catalog::builtin().resolve(None, &overrides, &strings(&["a"])).unwrap_err();
    assert!(matches!(err, ConfigError::NoModifiers));
}

#[test]
fn test_dedup_methods_rejects_whitespace() {
    assert!(matches!(
        dedup_methods(&strings(&["two words"])),
        Err(ConfigError::InvalidMethodName(_))
    ));
    assert!(matches!(dedup_methods(&strings(&["  "])), Err(ConfigError::InvalidMethodName(_))));
    assert_eq!(dedup_methods(&strings(&[" a ", "b", "a"])).unwrap(), strings(&["a", "b"]));
}

// =============================================================================
// Project files
// =============================================================================

const PROJECT_TOML: &str = r#"
[defaults]
trim_blank = true
allow_missing = true

[[preset]]
name = "scene-cleanup"
description = "Drop moved helpers"
methods = ["helperA", "helperB"]
lookback = "bounded"
modifiers = ["private", "protected"]

[[preset]]
name = "combat-ui-phase2"
methods = ["onlyThis"]
"#;

#[test]
fn test_project_defaults_apply() {
    let catalog = Catalog::with_project(parse_project_file(PROJECT_TOML).unwrap());
    let selection = catalog.resolve(None, &SettingsEntry::default(), &strings(&["x"])).unwrap();

    assert!(selection.settings.trim_blank);
    assert!(selection.settings.allow_missing);
    assert_eq!(selection.settings.lookback, LookbackStrategy::DocBlock);
}

#[test]
fn test_project_preset_settings() {
    let catalog = Catalog::with_project(parse_project_file(PROJECT_TOML).unwrap());
    let selection = catalog
        .resolve(Some("scene-cleanup"), &SettingsEntry::default(), &[])
        .unwrap();

    assert_eq!(selection.methods, strings(&["helperA", "helperB"]));
    assert_eq!(selection.settings.lookback, LookbackStrategy::Bounded);
    assert_eq!(selection.settings.lookback_depth, 3);
    assert_eq!(selection.settings.modifiers, strings(&["private", "protected"]));
    assert!(selection.settings.trim_blank);
}

#[test]
fn test_default_depth_survives_preset_lookback() {
    let file = parse_project_file("[defaults]\nlookback_depth = 6\n").unwrap();
    let selection = Catalog::with_project(file)
        .resolve(Some("combat-ui-phase1"), &SettingsEntry::default(), &[])
        .unwrap();

    assert_eq!(selection.settings.lookback, LookbackStrategy::Bounded);
    assert_eq!(selection.settings.lookback_depth, 6);
}

#[test]
fn test_cli_lookback_without_depth_uses_strategy_default() {
    let overrides = SettingsEntry {
        lookback: Some(LookbackStrategy::DocBlock),
        ..SettingsEntry::default()
    };
    let selection = Catalog::builtin()
        .resolve(Some("combat-ui-phase1"), &overrides, &[])
        .unwrap();

    assert_eq!(selection.settings.lookback_depth, 20);
}

#[test]
fn test_project_preset_shadows_builtin() {
    let catalog = Catalog::with_project(parse_project_file(PROJECT_TOML).unwrap());
    let preset = catalog.find("combat-ui-phase2").unwrap();

    assert_eq!(preset.methods, strings(&["onlyThis"]));
    assert_eq!(preset.source, PresetSource::Project);
    assert_eq!(catalog.presets().iter().filter(|p| p.name == "combat-ui-phase2").count(), 1);
    assert!(catalog.find("combat-ui-phase1").is_some());
}

#[test]
fn test_load_catalog_discovers_project_file() {
    let dir = TestDir::new();
    dir.add_file(".methodprune.toml", PROJECT_TOML);
    let nested = dir.path().join("src/scenes");
    std::fs::create_dir_all(&nested).unwrap();

    let (catalog, path) = load_catalog(None, &nested).unwrap();
    assert_eq!(path, Some(dir.path().join(".methodprune.toml")));
    assert!(catalog.find("scene-cleanup").is_some());
}

#[test]
fn test_load_catalog_without_project_file() {
    let dir = TestDir::new();
    let (catalog, path) = load_catalog(None, dir.path()).unwrap();
    assert!(path.is_none());
    assert_eq!(catalog.presets().len(), 2);
}

#[test]
fn test_load_catalog_explicit_missing_file() {
    let dir = TestDir::new();
    let missing = dir.path().join("nope.toml");
    assert!(load_catalog(Some(&missing), dir.path()).is_err());
}

// =============================================================================
// Methods files and paths
// =============================================================================

#[test]
fn test_parse_methods_file() {
    let content = "# moved to CombatUI\ncreateCombatUI\n\n  createPlayerUI  # trailing comment\n";
    assert_eq!(parse_methods_file(content), strings(&["createCombatUI", "createPlayerUI"]));
}

#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("src/game/scenes/Combat.ts")),
        PathBuf::from("src/game/scenes/Combat.ts.cleaned")
    );
}

#[test]
fn test_ensure_distinct() {
    let dir = TestDir::new();
    let input = dir.add_file("Combat.ts", "x\n");

    assert!(ensure_distinct(&input, &dir.path().join("Combat.ts.new")).is_ok());
    assert!(matches!(
        ensure_distinct(&input, &dir.path().join("./Combat.ts")),
        Err(ConfigError::SameInputOutput(_))
    ));
}
