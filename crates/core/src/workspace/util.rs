use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::model::BuildInput;
use crate::registry::Registry;
use crate::workspace::{RigConfig, WorkspaceLayout};

/// Load the workspace config JSON for a given layout.
pub fn load_config(layout: &WorkspaceLayout) -> Result<RigConfig> {
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read workspace config at {}", layout.config_path.display())
    })?;
    let config: RigConfig =
        serde_json::from_str(&config_json).context("Failed to parse workspace config JSON")?;
    Ok(config)
}

/// True when the file extension is `json`, in any case.
pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Read a build file as JSON or YAML, chosen by extension.
pub fn load_build(path: impl AsRef<Path>) -> Result<BuildInput> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read build file {}", path.display()))?;
    let build = if is_json_path(path) {
        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse build JSON {}", path.display()))?
    } else {
        serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse build YAML {}", path.display()))?
    };
    Ok(build)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    Catalog::from_path(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry> {
    let path = path.as_ref();
    Registry::from_path(path).with_context(|| format!("Failed to load registry {}", path.display()))
}
