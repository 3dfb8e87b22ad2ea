mod common;

use std::fs;

use common::*;
use predicates::prelude::*;
use rigsmith_core::workspace::WorkspaceLayout;
use tempfile::tempdir;

#[test]
fn check_reports_a_compatible_build() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["check", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compatible: yes"))
        .stdout(predicate::str::contains("[coolingCapacity]"));
}

#[test]
fn check_json_lists_hard_fails() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", &mismatched_build());

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["check", "--json", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .output()
        .expect("run check");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["isCompatible"], false);
    assert_eq!(json["hardFails"][0]["id"], "socketMismatch");
}

#[test]
fn manual_overrides_lower_reported_confidence() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["check", "--json", "--manual-overrides", "2", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .output()
        .expect("run check");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["confidence"], 90);
}

#[test]
fn check_reads_yaml_builds() {
    let dir = tempdir().expect("tempdir");
    let value: serde_json::Value = serde_json::from_str(GOOD_BUILD).expect("parse fixture");
    let build = write(dir.path(), "build.yaml", &serde_yaml::to_string(&value).expect("yaml"));

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["check", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compatible: yes"));
}

#[test]
fn score_prints_every_dimension() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["score", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: 87/100"))
        .stdout(predicate::str::contains("Usability"));
}

#[test]
fn score_with_target_reports_bottleneck() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["score", "--json", "--target", "4k-60", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .output()
        .expect("run score");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let eval = &json["scores"]["performance"]["targetEvaluation"];
    assert_eq!(eval["bottleneck"], "gpu");
    assert_eq!(eval["meetsTarget"], false);
}

#[test]
fn score_uses_workspace_default_preset() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["init", "--preset", "gaming", "--root"])
        .arg(root)
        .assert()
        .success();
    let build = write(root, "build.json", GOOD_BUILD);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["score", "--json", "--root"])
        .arg(root)
        .arg("--build")
        .arg(&build)
        .output()
        .expect("run score");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["scores"]["performance"]["value"], 72);
}

#[test]
fn report_writes_fingerprinted_json() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    assert_cmd::cargo::cargo_bin_cmd!("rigsmith").args(["init", "--root"]).arg(root).assert().success();
    let build = write(root, "build.json", GOOD_BUILD);
    let catalog = write(root, "catalog.json", CATALOG);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["report", "--budget", "1000", "--root"])
        .arg(root)
        .arg("--build")
        .arg(&build)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written: reports/report-"));

    let layout = WorkspaceLayout::new(root);
    let entries: Vec<_> = fs::read_dir(&layout.reports_dir).expect("reports dir").collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().expect("entry").path();
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read report")).expect("json");

    let fingerprint = report["fingerprint"].as_str().expect("fingerprint");
    assert_eq!(fingerprint.len(), 64);
    assert!(path.file_name().and_then(|n| n.to_str()).expect("name").contains(&fingerprint[..12]));
    assert!(report["generatedAt"].as_str().is_some());
    assert_eq!(report["compatibility"]["isCompatible"], true);
    assert_eq!(report["upgrades"][0]["candidate"]["id"], "gpu-9");
}

#[test]
fn report_without_budget_omits_upgrades() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    let build = write(root, "build.json", GOOD_BUILD);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["report", "--root"])
        .arg(root)
        .arg("--build")
        .arg(&build)
        .assert()
        .success();

    let layout = WorkspaceLayout::new(root);
    let path = fs::read_dir(&layout.reports_dir)
        .expect("reports dir")
        .next()
        .expect("one report")
        .expect("entry")
        .path();
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).expect("read report")).expect("json");
    assert!(report.get("upgrades").is_none());
}

#[test]
fn check_uses_preset_focus_from_the_workspace_registry() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["init", "--root"])
        .arg(root)
        .assert()
        .success();
    write(
        root,
        "registry.json",
        r#"{"presets":[{"id":"fps","label":"Competitive FPS","focus":"gaming","cpu_weight":0.3,"gpu_weight":0.7,
            "recommended_cpu_tier":6,"recommended_gpu_tier":7}],"targets":[]}"#,
    );
    let layout = WorkspaceLayout::new(root);
    let mut config: rigsmith_core::workspace::RigConfig =
        serde_json::from_str(&fs::read_to_string(&layout.config_path).expect("read config"))
            .expect("parse config");
    config.registry = Some("registry.json".to_string());
    fs::write(&layout.config_path, serde_json::to_string_pretty(&config).expect("config json"))
        .expect("write config");

    let cpu_heavy = GOOD_BUILD.replacen(r#""tier": 6"#, r#""tier": 9"#, 1).replacen(r#""tier": 7"#, r#""tier": 4"#, 1);
    let build = write(root, "build.json", &cpu_heavy);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["check", "--json", "--preset", "fps", "--root"])
        .arg(root)
        .arg("--build")
        .arg(&build)
        .output()
        .expect("run check");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let notes = json["notes"].as_array().expect("notes");
    assert!(notes.iter().any(|n| n["id"] == "tier-imbalance"), "notes: {notes:?}");
}
