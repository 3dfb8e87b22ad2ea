use serde::{Deserialize, Serialize};

/// Serializable workspace configuration, stored at `.rigsmith/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// Human-friendly workspace name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version of the config format.
    pub config_version: String,
    /// Preset used when the CLI is not given `--preset`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,
    /// Performance target used when the CLI is not given `--target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target: Option<String>,
    /// Catalog file, relative to the workspace root unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// Custom preset/target registry file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
}

impl RigConfig {
    pub const CURRENT_VERSION: &'static str = "0.1.0";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            config_version: Self::CURRENT_VERSION.to_string(),
            default_preset: None,
            default_target: None,
            catalog: None,
            registry: None,
        }
    }
}
