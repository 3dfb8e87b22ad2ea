use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rigsmith_core::model::BuildInput;
use sha2::{Digest, Sha256};

pub mod commands;

/// Canonicalize the root path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // The root may not exist yet when initializing a workspace.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Infer a workspace name from the root path.
///
/// If the root has no final component (e.g., `/`), fall back to `unnamed-rig`.
pub fn infer_workspace_name(root: &Path) -> String {
    root.file_name().and_then(|os_str| os_str.to_str()).unwrap_or("unnamed-rig").to_string()
}

/// SHA-256 of a byte slice as lowercase hex.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Stable fingerprint of a build: the SHA-256 of its compact JSON form.
pub fn build_fingerprint(build: &BuildInput) -> Result<String> {
    let json = serde_json::to_vec(build).context("Failed to serialize build for fingerprinting")?;
    Ok(sha256_bytes(&json))
}
