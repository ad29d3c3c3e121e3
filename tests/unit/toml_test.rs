//! Tests for .methodprune.toml parsing and discovery

use methodprune::adapters::toml::{PROJECT_FILE_NAME, find_project_file, load_file, parse_project_file};
use methodprune::core::models::LookbackStrategy;

use crate::common::TestDir;

#[test]
fn test_parse_empty_file() {
    let file = parse_project_file("# nothing yet\n").unwrap();
    assert!(file.presets.is_empty());
    assert_eq!(file.defaults.lookback, None);
}

#[test]
fn test_parse_defaults() {
    let file = parse_project_file(
        r#"
[defaults]
lookback = "doc-block"
lookback_depth = 12
modifiers = ["private"]
trim_blank = false
"#,
    )
    .unwrap();

    assert_eq!(file.defaults.lookback, Some(LookbackStrategy::DocBlock));
    assert_eq!(file.defaults.lookback_depth, Some(12));
    assert_eq!(file.defaults.modifiers, Some(vec!["private".to_string()]));
    assert_eq!(file.defaults.trim_blank, Some(false));
    assert_eq!(file.defaults.allow_missing, None);
}

#[test]
fn test_parse_preset_with_overrides() {
    let file = parse_project_file(
        r#"
[[preset]]
name = "p"
methods = ["a", "b"]
trim_blank = true
"#,
    )
    .unwrap();

    let preset = &file.presets[0];
    assert_eq!(preset.name, "p");
    assert_eq!(preset.description, None);
    assert_eq!(preset.methods, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(preset.settings.trim_blank, Some(true));
    assert_eq!(preset.settings.lookback, None);
}

#[test]
fn test_parse_rejects_bad_lookback() {
    assert!(parse_project_file("[defaults]\nlookback = \"sideways\"\n").is_err());
}

#[test]
fn test_parse_rejects_misspelled_default() {
    let err = parse_project_file("[defaults]\ntrim_blnk = true\n").unwrap_err();
    assert!(err.to_string().contains("trim_blnk"));
}

#[test]
fn test_parse_rejects_misspelled_preset_setting() {
    let err = parse_project_file(
        r#"
[[preset]]
name = "p"
methods = ["a"]
lookbak = "bounded"
"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unknown field `lookbak` in preset `p`");
}

#[test]
fn test_parse_preset_has_no_unknown_keys() {
    let file = parse_project_file(
        "[[preset]]\nname = \"p\"\nmethods = [\"a\"]\nlookback = \"bounded\"\nmodifiers = [\"private\"]\n",
    )
    .unwrap();
    assert!(file.presets[0].unknown.is_empty());
    assert_eq!(file.presets[0].settings.lookback, Some(LookbackStrategy::Bounded));
}

#[test]
fn test_parse_rejects_unknown_section() {
    assert!(parse_project_file("[project]\nprefix = \"X\"\n").is_err());
}

#[test]
fn test_find_project_file_stops_at_repo_root() {
    let outer = TestDir::new();
    // File above the repository root must not be picked up
    outer.add_file(PROJECT_FILE_NAME, "");
    let repo = outer.path().join("repo");
    std::fs::create_dir_all(repo.join(".git")).unwrap();
    std::fs::create_dir_all(repo.join("src")).unwrap();

    assert_eq!(find_project_file(&repo.join("src")), None);
}

#[test]
fn test_find_project_file_from_file_path() {
    let dir = TestDir::new();
    dir.add_file(PROJECT_FILE_NAME, "");
    let source = dir.add_file("src/Combat.ts", "x\n");

    assert_eq!(find_project_file(&source), Some(dir.path().join(PROJECT_FILE_NAME)));
}

#[test]
fn test_load_file_missing() {
    let dir = TestDir::new();
    assert!(load_file(&dir.path().join(PROJECT_FILE_NAME)).is_err());
}
