use std::fs;

use rigsmith_core::catalog::{Catalog, CatalogError};
use rigsmith_core::model::ComponentCategory;
use rigsmith_core::registry::{PresetFocus, Registry, RegistryError, TargetKind};
use tempfile::tempdir;

#[test]
fn builtin_presets_have_balanced_weights() {
    let registry = Registry::builtin();
    registry.validate().expect("builtin registry is valid");
    assert!(registry.preset("gaming").is_some());
    assert!(registry.preset("GAMING").is_some());
    assert_eq!(registry.focus_for(Some("esports")), PresetFocus::Gaming);
    assert_eq!(registry.weights_for(None), (0.5, 0.5));
}

#[test]
fn require_target_rejects_unknown_ids() {
    let registry = Registry::builtin();
    let target = registry.require_target("4k-60").expect("known target");
    assert!(matches!(target.kind, TargetKind::Display { width: 3840, .. }));
    let err = registry.require_target("8k-240").expect_err("unknown target");
    assert!(matches!(err, RegistryError::UnknownTarget(id) if id == "8k-240"));
}

#[test]
fn custom_preset_names_infer_their_focus() {
    assert_eq!(PresetFocus::for_preset(Some("my-streaming-rig")), PresetFocus::Creator);
    assert_eq!(PresetFocus::for_preset(Some("budget-box")), PresetFocus::Budget);
    assert_eq!(PresetFocus::for_preset(None), PresetFocus::General);
}

#[test]
fn registry_loads_from_yaml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("registry.yaml");
    fs::write(
        &path,
        r#"
presets:
  - id: sim-racing
    label: Sim racing
    focus: gaming
    cpu_weight: 0.4
    gpu_weight: 0.6
    recommended_cpu_tier: 6
    recommended_gpu_tier: 7
targets:
  - id: triple-1440p
    label: Triple 1440p
    kind: display
    width: 7680
    height: 1440
    refresh_hz: 120
    min_cpu_tier: 7
    min_gpu_tier: 9
    min_ram_gb: 32
"#,
    )
    .expect("write registry");

    let registry = Registry::from_path(&path).expect("load registry");
    assert_eq!(registry.focus_for(Some("sim-racing")), PresetFocus::Gaming);
    assert_eq!(registry.require_target("triple-1440p").expect("target").min_gpu_tier, 9);
}

#[test]
fn registry_rejects_weights_that_do_not_sum_to_one() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("registry.json");
    fs::write(
        &path,
        r#"{"presets":[{"id":"odd","label":"Odd","focus":"general","cpu_weight":0.7,"gpu_weight":0.7,
            "recommended_cpu_tier":5,"recommended_gpu_tier":5}]}"#,
    )
    .expect("write registry");
    let err = Registry::from_path(&path).expect_err("invalid weights");
    assert!(matches!(err, RegistryError::InvalidWeights { ref id, .. } if id == "odd"));
}

const CATALOG_JSON: &str = r#"{
  "psus": [
    {"id": "psu-650", "name": "PSU 650", "manufacturer": "Acme", "price_usd": 80,
     "specs": {"wattage_w": 650, "form_factor": "atx"}}
  ],
  "storage": [
    {"id": "ssd-2tb", "name": "SSD 2TB", "manufacturer": "Acme", "price_usd": 120,
     "specs": {"kind": "nvme", "capacity_gb": 2000, "pcie_gen": 4}}
  ]
}"#;

#[test]
fn catalog_loads_json_and_lists_candidates() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).expect("write catalog");

    let catalog = Catalog::from_path(&path).expect("load catalog");
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
    let psus = catalog.candidates(ComponentCategory::Psu);
    assert_eq!(psus.len(), 1);
    assert_eq!(psus[0].id(), "psu-650");
    assert!(catalog.candidates(ComponentCategory::Gpu).is_empty());
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON.replace("ssd-2tb", "psu-650")).expect("write catalog");
    let err = Catalog::from_path(&path).expect_err("duplicate id");
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "psu-650"));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = Catalog::from_path(dir.path().join("nope.yaml")).expect_err("missing file");
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn uppercase_json_extensions_use_the_json_parser() {
    let dir = tempdir().expect("tempdir");

    let catalog_path = dir.path().join("catalog.Json");
    fs::write(&catalog_path, CATALOG_JSON).expect("write catalog");
    assert_eq!(Catalog::from_path(&catalog_path).expect("load catalog").len(), 2);

    let broken_catalog = dir.path().join("broken.JSON");
    fs::write(&broken_catalog, "{ \"psus\": [").expect("write catalog");
    let err = Catalog::from_path(&broken_catalog).expect_err("truncated catalog");
    assert!(matches!(err, CatalogError::Json(_)), "got {err}");

    let broken_registry = dir.path().join("registry.JSON");
    fs::write(&broken_registry, "{ \"presets\": [").expect("write registry");
    let err = Registry::from_path(&broken_registry).expect_err("truncated registry");
    assert!(matches!(err, RegistryError::Json(_)), "got {err}");
}
