mod common;

use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn upgrade_lists_options_within_budget() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);
    let catalog = write(dir.path(), "catalog.json", CATALOG);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["upgrade", "--budget", "1000", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tier 9 card"));
}

#[test]
fn upgrade_json_respects_slack() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", GOOD_BUILD);
    let catalog = write(dir.path(), "catalog.json", CATALOG);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["upgrade", "--json", "--budget", "500", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .expect("run upgrade");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    // $900 card is beyond 1.2 x $500.
    assert_eq!(json.as_array().map(Vec::len), Some(0));
}

#[test]
fn upgrade_uses_workspace_catalog() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "catalog.json", CATALOG);
    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["init", "--catalog", "catalog.json", "--root"])
        .arg(root)
        .assert()
        .success();
    let build = write(root, "build.json", GOOD_BUILD);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["upgrade", "--budget", "1000", "--root"])
        .arg(root)
        .arg("--build")
        .arg(&build)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tier 9 card"));
}

#[test]
fn autofix_swaps_the_board() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", &mismatched_build());
    let catalog = write(dir.path(), "catalog.json", CATALOG);

    let output = assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["autofix", "--json", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .arg("--catalog")
        .arg(&catalog)
        .output()
        .expect("run autofix");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["strategy"], "cheapest");
    assert_eq!(json["issuesFixed"][0], "socketMismatch");
    assert_eq!(json["fixes"][0]["added"]["id"], "mb-b650");
    assert_eq!(json["resultingCompatibility"]["isCompatible"], true);
    assert_eq!(json["issuesSkipped"], serde_json::json!(["coolingCapacity"]));
}

#[test]
fn autofix_text_output_summarizes_plan() {
    let dir = tempdir().expect("tempdir");
    let build = write(dir.path(), "build.json", &mismatched_build());
    let catalog = write(dir.path(), "catalog.json", CATALOG);

    assert_cmd::cargo::cargo_bin_cmd!("rigsmith")
        .args(["autofix", "--strategy", "performance", "--root"])
        .arg(dir.path())
        .arg("--build")
        .arg(&build)
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy: performance"))
        .stdout(predicate::str::contains("Fixed: socketMismatch"))
        .stdout(predicate::str::contains("Skipped (status notes): coolingCapacity"))
        .stdout(predicate::str::contains("Total cost: $180.00"));
}
