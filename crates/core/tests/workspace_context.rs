use std::fs;

use rigsmith_core::workspace::{load_build, RigConfig, WorkspaceContext, WorkspaceLayout};
use tempfile::tempdir;

#[test]
fn layout_places_config_under_meta_dir() {
    let layout = WorkspaceLayout::new("/rigs/home");
    assert!(layout.config_path.ends_with(".rigsmith/config.json"));
    assert!(layout.builds_dir.ends_with("builds"));
    assert!(layout.report_path("report-abc").ends_with("reports/report-abc.json"));
    assert_eq!(layout.resolve("parts/catalog.yaml"), layout.root.join("parts/catalog.yaml"));
    assert_eq!(layout.relative_string(&layout.reports_dir), "reports");
}

#[test]
fn context_loads_config_and_defaults_to_builtin_registry() {
    let temp = tempdir().expect("tempdir");
    let layout = WorkspaceLayout::new(temp.path());
    fs::create_dir_all(&layout.meta_dir).expect("meta dir");

    let mut config = RigConfig::new("HomeRig");
    config.default_preset = Some("gaming".to_string());
    fs::write(&layout.config_path, serde_json::to_string_pretty(&config).expect("json"))
        .expect("write config");

    let ctx = WorkspaceContext::from_root(temp.path()).expect("context");
    assert_eq!(ctx.config.name, "HomeRig");
    assert_eq!(ctx.config.config_version, RigConfig::CURRENT_VERSION);
    assert!(ctx.catalog().expect("catalog lookup").is_none());
    assert!(ctx.registry().expect("registry").preset("gaming").is_some());
}

#[test]
fn context_fails_without_config() {
    let temp = tempdir().expect("tempdir");
    assert!(WorkspaceContext::from_root(temp.path()).is_err());
}

#[test]
fn build_files_load_by_extension() {
    let temp = tempdir().expect("tempdir");
    let json = temp.path().join("build.json");
    fs::write(&json, r#"{"storage": []}"#).expect("write json");
    assert!(load_build(&json).expect("json build").is_empty());

    let yaml = temp.path().join("build.yml");
    fs::write(&yaml, "storage: []\n").expect("write yaml");
    assert!(load_build(&yaml).expect("yaml build").is_empty());

    let broken = temp.path().join("broken.json");
    fs::write(&broken, "{not json").expect("write broken");
    let err = load_build(&broken).expect_err("parse error");
    assert!(format!("{err:#}").contains("Failed to parse build JSON"));
}
