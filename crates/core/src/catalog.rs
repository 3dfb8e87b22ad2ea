//! Candidate parts the planner may swap in.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    Case, Component, ComponentCategory, Cooler, Cpu, Gpu, Motherboard, Psu, Ram, Storage,
};
use crate::workspace::is_json_path;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Catalog lists part id '{0}' more than once")]
    DuplicateId(String),
}

/// Per-category arrays of purchasable parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cpus: Vec<Cpu>,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
    #[serde(default)]
    pub motherboards: Vec<Motherboard>,
    #[serde(default)]
    pub rams: Vec<Ram>,
    #[serde(default)]
    pub storage: Vec<Storage>,
    #[serde(default)]
    pub psus: Vec<Psu>,
    #[serde(default)]
    pub coolers: Vec<Cooler>,
    #[serde(default)]
    pub cases: Vec<Case>,
}

impl Catalog {
    /// Load a catalog from a JSON or YAML file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.display().to_string(), source })?;
        let catalog: Catalog = if is_json_path(path) {
            serde_json::from_str(&body)?
        } else {
            serde_yaml::from_str(&body)?
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Part ids must be unique across the whole catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for component in self.all() {
            if !seen.insert(component.id().to_string()) {
                return Err(CatalogError::DuplicateId(component.id().to_string()));
            }
        }
        Ok(())
    }

    /// Every part of `category`, wrapped in the union type.
    pub fn candidates(&self, category: ComponentCategory) -> Vec<Component> {
        match category {
            ComponentCategory::Cpu => self.cpus.iter().cloned().map(Component::Cpu).collect(),
            ComponentCategory::Gpu => self.gpus.iter().cloned().map(Component::Gpu).collect(),
            ComponentCategory::Motherboard => {
                self.motherboards.iter().cloned().map(Component::Motherboard).collect()
            }
            ComponentCategory::Ram => self.rams.iter().cloned().map(Component::Ram).collect(),
            ComponentCategory::Storage => {
                self.storage.iter().cloned().map(Component::Storage).collect()
            }
            ComponentCategory::Psu => self.psus.iter().cloned().map(Component::Psu).collect(),
            ComponentCategory::Cooler => {
                self.coolers.iter().cloned().map(Component::Cooler).collect()
            }
            ComponentCategory::Case => self.cases.iter().cloned().map(Component::Case).collect(),
        }
    }

    pub fn all(&self) -> Vec<Component> {
        ComponentCategory::ALL.iter().flat_map(|c| self.candidates(*c)).collect()
    }

    pub fn len(&self) -> usize {
        self.cpus.len()
            + self.gpus.len()
            + self.motherboards.len()
            + self.rams.len()
            + self.storage.len()
            + self.psus.len()
            + self.coolers.len()
            + self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
