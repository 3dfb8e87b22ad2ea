use std::fs;

use anyhow::{Context, Result};
use rigsmith_core::workspace::{RigConfig, WorkspaceContext, WorkspaceLayout};
use serde::Serialize;
use tracing::info;

use crate::commands::{print_dir_status, print_json};
use crate::{canonicalize_or_current, infer_workspace_name};

#[derive(Serialize)]
pub struct WorkspaceInfoSnapshot {
    pub name: String,
    pub root: String,
    pub config_file: String,
    pub config: RigConfig,
    pub layout: WorkspaceInfoLayout,
    pub builds: Vec<String>,
    pub reports: usize,
}

#[derive(Serialize)]
pub struct WorkspaceInfoLayout {
    pub meta_dir: String,
    pub builds_dir: String,
    pub reports_dir: String,
}

/// Initialize a new workspace at `root`.
pub fn init_command(
    root: &str,
    name: Option<String>,
    preset: Option<String>,
    target: Option<String>,
    catalog: Option<String>,
) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = WorkspaceLayout::new(&root_path);

    let workspace_name = match name {
        Some(n) => n,
        None => infer_workspace_name(&root_path),
    };

    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;
    fs::create_dir_all(&layout.builds_dir)
        .with_context(|| format!("Failed to create builds dir: {}", layout.builds_dir.display()))?;
    fs::create_dir_all(&layout.reports_dir).with_context(|| {
        format!("Failed to create reports dir: {}", layout.reports_dir.display())
    })?;

    let mut config = RigConfig::new(&workspace_name);
    config.default_preset = preset;
    config.default_target = target;
    config.catalog = catalog;

    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write workspace config: {}", layout.config_path.display())
    })?;
    info!(root = %layout.root.display(), "workspace initialized");

    println!("Initialized rigsmith workspace:");
    println!("  Name: {}", workspace_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Builds dir: {}", layout.builds_dir.display());
    println!("  Reports dir: {}", layout.reports_dir.display());

    Ok(())
}

/// Show configuration and layout of an existing workspace.
pub fn info_command(root: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let ctx = WorkspaceContext::from_root(&root_path)?;
    let layout = &ctx.layout;

    let mut builds = Vec::new();
    if layout.builds_dir.is_dir() {
        for entry in fs::read_dir(&layout.builds_dir)
            .with_context(|| format!("Failed to read {}", layout.builds_dir.display()))?
        {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                builds.push(entry.file_name().to_string_lossy().to_string());
            }
        }
    }
    builds.sort();
    let reports = if layout.reports_dir.is_dir() {
        fs::read_dir(&layout.reports_dir)
            .with_context(|| format!("Failed to read {}", layout.reports_dir.display()))?
            .count()
    } else {
        0
    };

    if json {
        return print_json(&WorkspaceInfoSnapshot {
            name: ctx.config.name.clone(),
            root: layout.root.display().to_string(),
            config_file: layout.config_path.display().to_string(),
            config: ctx.config.clone(),
            layout: WorkspaceInfoLayout {
                meta_dir: layout.meta_dir.display().to_string(),
                builds_dir: layout.builds_dir.display().to_string(),
                reports_dir: layout.reports_dir.display().to_string(),
            },
            builds,
            reports,
        });
    }

    let config = &ctx.config;
    println!("rigsmith Workspace Info");
    println!("=======================");
    println!("Name: {}", config.name);
    println!("Root: {}", layout.root.display());
    println!("Config file: {}", layout.config_path.display());
    println!("Config version: {}", config.config_version);
    println!("Default preset: {}", config.default_preset.as_deref().unwrap_or("(none)"));
    println!("Default target: {}", config.default_target.as_deref().unwrap_or("(none)"));
    println!("Catalog: {}", config.catalog.as_deref().unwrap_or("(none)"));
    println!("Registry: {}", config.registry.as_deref().unwrap_or("(built-in)"));
    println!();

    println!("Directories:");
    print_dir_status("Meta dir (.rigsmith)", &layout.meta_dir);
    print_dir_status("Builds dir", &layout.builds_dir);
    print_dir_status("Reports dir", &layout.reports_dir);
    println!();
    println!("Builds: {}", builds.len());
    for build in &builds {
        println!("- {build}");
    }
    println!("Reports: {reports}");

    Ok(())
}
