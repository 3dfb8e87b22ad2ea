//! Named tuning presets and performance targets.
//!
//! These are plain lookup tables. The built-in registry covers the common
//! cases; callers can load their own from JSON or YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workspace::is_json_path;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Failed to parse registry JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse registry YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Preset '{id}' has CPU/GPU weights summing to {sum}; expected 1.0")]
    InvalidWeights { id: String, sum: f64 },
    #[error("Unknown performance target '{0}'")]
    UnknownTarget(String),
}

/// What a preset optimizes for. Drives efficiency rules and balance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresetFocus {
    Gaming,
    Creator,
    Budget,
    #[default]
    General,
}

impl PresetFocus {
    /// Resolve a preset id to its focus, using the built-in table first and
    /// falling back to the id's wording for custom presets.
    pub fn for_preset(preset: Option<&str>) -> Self {
        let Some(id) = preset else {
            return PresetFocus::General;
        };
        if let Some(profile) = Registry::builtin().preset(id) {
            return profile.focus;
        }
        let lower = id.to_ascii_lowercase();
        if lower.contains("gaming") || lower.contains("esports") {
            PresetFocus::Gaming
        } else if lower.contains("creator")
            || lower.contains("workstation")
            || lower.contains("stream")
        {
            PresetFocus::Creator
        } else if lower.contains("budget") {
            PresetFocus::Budget
        } else {
            PresetFocus::General
        }
    }

    pub fn is_gaming(self) -> bool {
        self == PresetFocus::Gaming
    }
}

/// A named tuning profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetProfile {
    pub id: String,
    pub label: String,
    pub focus: PresetFocus,
    /// Share of the performance score taken from the CPU.
    pub cpu_weight: f64,
    /// Share of the performance score taken from the GPU.
    pub gpu_weight: f64,
    pub recommended_cpu_tier: u8,
    pub recommended_gpu_tier: u8,
}

impl PresetProfile {
    fn new(
        id: &str,
        label: &str,
        focus: PresetFocus,
        cpu_weight: f64,
        recommended_cpu_tier: u8,
        recommended_gpu_tier: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            focus,
            cpu_weight,
            gpu_weight: 1.0 - cpu_weight,
            recommended_cpu_tier,
            recommended_gpu_tier,
        }
    }
}

/// Kind of workload a performance target describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetKind {
    Display { width: u32, height: u32, refresh_hz: u32 },
    Creator { workload: String },
}

/// A named performance target with minimum tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTarget {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: TargetKind,
    pub min_cpu_tier: u8,
    pub min_gpu_tier: u8,
    pub min_ram_gb: u32,
}

impl PerformanceTarget {
    fn display(
        id: &str,
        label: &str,
        (width, height, refresh_hz): (u32, u32, u32),
        (min_cpu_tier, min_gpu_tier, min_ram_gb): (u8, u8, u32),
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: TargetKind::Display { width, height, refresh_hz },
            min_cpu_tier,
            min_gpu_tier,
            min_ram_gb,
        }
    }

    fn creator(
        id: &str,
        label: &str,
        workload: &str,
        (min_cpu_tier, min_gpu_tier, min_ram_gb): (u8, u8, u32),
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: TargetKind::Creator { workload: workload.to_string() },
            min_cpu_tier,
            min_gpu_tier,
            min_ram_gb,
        }
    }
}

/// Preset and target lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Registry {
    #[serde(default)]
    pub presets: Vec<PresetProfile>,
    #[serde(default)]
    pub targets: Vec<PerformanceTarget>,
}

impl Registry {
    /// The built-in presets and targets.
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                PresetProfile::new("gaming", "Gaming", PresetFocus::Gaming, 0.30, 6, 8),
                PresetProfile::new("esports", "eSports", PresetFocus::Gaming, 0.45, 7, 6),
                PresetProfile::new("creator", "Content creation", PresetFocus::Creator, 0.60, 8, 6),
                PresetProfile::new("workstation", "Workstation", PresetFocus::Creator, 0.70, 9, 5),
                PresetProfile::new("budget", "Budget", PresetFocus::Budget, 0.50, 4, 4),
                PresetProfile::new("generic", "General use", PresetFocus::General, 0.50, 5, 5),
            ],
            targets: vec![
                PerformanceTarget::display("1080p-60", "1080p @ 60 Hz", (1920, 1080, 60), (3, 3, 16)),
                PerformanceTarget::display("1080p-144", "1080p @ 144 Hz", (1920, 1080, 144), (6, 5, 16)),
                PerformanceTarget::display("1440p-144", "1440p @ 144 Hz", (2560, 1440, 144), (6, 7, 32)),
                PerformanceTarget::display("4k-60", "4K @ 60 Hz", (3840, 2160, 60), (6, 8, 32)),
                PerformanceTarget::display("4k-120", "4K @ 120 Hz", (3840, 2160, 120), (8, 10, 32)),
                PerformanceTarget::creator("creator-photo", "Photo editing", "photo", (6, 4, 32)),
                PerformanceTarget::creator("creator-4k-video", "4K video editing", "video", (8, 7, 64)),
                PerformanceTarget::creator("creator-3d", "3D rendering", "3d", (8, 8, 64)),
            ],
        }
    }

    /// Load a registry from a JSON or YAML file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|source| RegistryError::Io { path: path.display().to_string(), source })?;
        let registry: Registry = if is_json_path(path) {
            serde_json::from_str(&body)?
        } else {
            serde_yaml::from_str(&body)?
        };
        registry.validate()?;
        Ok(registry)
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        for preset in &self.presets {
            let sum = preset.cpu_weight + preset.gpu_weight;
            if (sum - 1.0).abs() > 1e-6 {
                return Err(RegistryError::InvalidWeights { id: preset.id.clone(), sum });
            }
        }
        Ok(())
    }

    pub fn preset(&self, id: &str) -> Option<&PresetProfile> {
        self.presets.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    pub fn target(&self, id: &str) -> Option<&PerformanceTarget> {
        self.targets.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Like `target`, but an unknown id is an error.
    pub fn require_target(&self, id: &str) -> Result<&PerformanceTarget, RegistryError> {
        self.target(id).ok_or_else(|| RegistryError::UnknownTarget(id.to_string()))
    }

    /// CPU/GPU weight split for a preset, defaulting to an even split.
    pub fn weights_for(&self, preset: Option<&str>) -> (f64, f64) {
        preset.and_then(|id| self.preset(id)).map_or((0.5, 0.5), |p| (p.cpu_weight, p.gpu_weight))
    }

    /// Focus for a preset id, preferring this registry's own entries.
    pub fn focus_for(&self, preset: Option<&str>) -> PresetFocus {
        match preset.and_then(|id| self.preset(id)) {
            Some(profile) => profile.focus,
            None => PresetFocus::for_preset(preset),
        }
    }
}
