use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rigsmith_core::catalog::Catalog;
use rigsmith_core::model::{BuildInput, CompatibilityResult, Issue};
use rigsmith_core::registry::Registry;
use rigsmith_core::workspace::{
    load_build, load_catalog, load_registry, RigConfig, WorkspaceContext, WorkspaceLayout,
};
use serde::Serialize;
use tracing::debug;

use crate::canonicalize_or_current;

/// Workspace context (when initialized) plus the registry it selects.
///
/// Commands work without an initialized workspace; the config only supplies
/// defaults that CLI flags override.
pub struct Settings {
    pub layout: WorkspaceLayout,
    pub context: Option<WorkspaceContext>,
    pub registry: Registry,
}

impl Settings {
    pub fn load(root: &str, registry_flag: Option<&str>) -> Result<Self> {
        let root_path = canonicalize_or_current(root)?;
        let layout = WorkspaceLayout::new(&root_path);
        let context = if layout.config_path.exists() {
            Some(WorkspaceContext::from_root(&root_path)?)
        } else {
            debug!(root = %layout.root.display(), "no workspace config; using built-in defaults");
            None
        };

        let registry = match (registry_flag, &context) {
            (Some(path), _) => load_registry(path)?,
            (None, Some(ctx)) => ctx.registry()?,
            (None, None) => Registry::builtin(),
        };
        Ok(Self { layout, context, registry })
    }

    pub fn config(&self) -> Option<&RigConfig> {
        self.context.as_ref().map(|ctx| &ctx.config)
    }

    /// Preset from the flag, else the config default. Must name a known preset.
    pub fn preset(&self, flag: Option<String>) -> Result<Option<String>> {
        let preset = flag.or_else(|| self.config().and_then(|c| c.default_preset.clone()));
        match preset {
            Some(id) if self.registry.preset(&id).is_none() => {
                let allowed: Vec<&str> = self.registry.presets.iter().map(|p| p.id.as_str()).collect();
                Err(anyhow!("Unknown preset '{}'. Allowed: {}", id, allowed.join(", ")))
            }
            other => Ok(other),
        }
    }

    /// Target from the flag, else the config default. Must name a known target.
    pub fn target(&self, flag: Option<String>) -> Result<Option<String>> {
        let target = flag.or_else(|| self.config().and_then(|c| c.default_target.clone()));
        match target {
            Some(id) => {
                self.registry.require_target(&id).with_context(|| {
                    let allowed: Vec<&str> =
                        self.registry.targets.iter().map(|t| t.id.as_str()).collect();
                    format!("Allowed targets: {}", allowed.join(", "))
                })?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Catalog from the flag, else the config. Errors when neither names one.
    pub fn catalog(&self, flag: Option<&str>) -> Result<Catalog> {
        if let Some(path) = flag {
            return load_catalog(path);
        }
        let configured = match &self.context {
            Some(ctx) => ctx.catalog()?,
            None => None,
        };
        configured.ok_or_else(|| {
            anyhow!(
                "No catalog given. Pass --catalog FILE or set \"catalog\" in {}",
                self.layout.config_path.display()
            )
        })
    }
}

/// Read a build file given on the command line.
pub fn read_build(path: &str) -> Result<BuildInput> {
    load_build(Path::new(path))
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", serialized);
    Ok(())
}

/// Helper to print whether a directory exists.
pub fn print_dir_status(label: &str, path: &Path) {
    let exists = path.is_dir();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}

fn print_issue(issue: &Issue) {
    println!("  - [{}] {}: {}", issue.id, issue.title, issue.description);
    for fix in &issue.suggested_fixes {
        println!("      fix: {fix}");
    }
}

fn print_issue_group(label: &str, issues: &[Issue]) {
    println!("{label} ({}):", issues.len());
    if issues.is_empty() {
        println!("  (none)");
    }
    for issue in issues {
        print_issue(issue);
    }
}

/// Human-readable compatibility report.
pub fn print_compatibility(result: &CompatibilityResult) {
    println!("Compatible: {}", if result.is_compatible { "yes" } else { "NO" });
    println!("Confidence: {}%", result.confidence);
    println!("Checks run: {}", result.checks_run);
    print_issue_group("Hard fails", &result.hard_fails);
    print_issue_group("Warnings", &result.warnings);
    print_issue_group("Notes", &result.notes);
}
