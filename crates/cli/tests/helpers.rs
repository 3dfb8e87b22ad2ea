use std::fs;
use std::path::Path;

use rigsmith::{build_fingerprint, canonicalize_or_current, infer_workspace_name, sha256_bytes};
use rigsmith_core::model::BuildInput;
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current(".").expect("canonicalize").canonicalize().expect("canon");
    let expected = tmp.path().canonicalize().expect("canon tmp");
    assert_eq!(result, expected);

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn canonicalize_or_current_keeps_missing_paths() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("not-yet");
    let result = canonicalize_or_current(missing.to_str().expect("utf8")).expect("resolve");
    assert!(result.ends_with("not-yet"));
    assert!(!result.exists());
}

#[test]
fn canonicalize_or_current_resolves_existing_dirs() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");
    let result = canonicalize_or_current(nested.to_str().expect("utf8")).expect("resolve");
    assert_eq!(result, nested.canonicalize().expect("canonicalize nested"));
}

#[test]
fn infer_workspace_name_uses_last_path_component() {
    assert_eq!(infer_workspace_name(Path::new("/home/me/rigs/living-room")), "living-room");
    assert_eq!(infer_workspace_name(Path::new("/")), "unnamed-rig");
}

#[test]
fn sha256_bytes_matches_known_digest() {
    assert_eq!(
        sha256_bytes(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn build_fingerprint_is_stable_and_content_sensitive() {
    let empty = BuildInput::default();
    let a = build_fingerprint(&empty).expect("fingerprint");
    let b = build_fingerprint(&empty.clone()).expect("fingerprint");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);

    let other: BuildInput = serde_json::from_str(
        r#"{"storage":[{"id":"d","name":"D","manufacturer":"A","specs":{"kind":"hdd_3_5","capacity_gb":4000}}]}"#,
    )
    .expect("parse build");
    assert_ne!(build_fingerprint(&other).expect("fingerprint"), a);
}
