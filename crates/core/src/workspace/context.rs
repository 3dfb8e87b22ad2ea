use std::path::Path;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::registry::Registry;
use crate::workspace::{load_catalog, load_config, load_registry, RigConfig, WorkspaceLayout};

/// Layout plus loaded config for a workspace root.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    pub layout: WorkspaceLayout,
    pub config: RigConfig,
}

impl WorkspaceContext {
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let layout = WorkspaceLayout::new(root);
        let config = load_config(&layout)?;
        Ok(Self { layout, config })
    }

    /// Catalog named in the config, if any.
    pub fn catalog(&self) -> Result<Option<Catalog>> {
        self.config
            .catalog
            .as_deref()
            .map(|stored| load_catalog(self.layout.resolve(stored)))
            .transpose()
    }

    /// Registry named in the config, or the built-in one.
    pub fn registry(&self) -> Result<Registry> {
        match self.config.registry.as_deref() {
            Some(stored) => load_registry(self.layout.resolve(stored)),
            None => Ok(Registry::builtin()),
        }
    }
}
