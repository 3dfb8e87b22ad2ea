use anyhow::Result;
use rigsmith_core::registry::Registry;
use serde::Serialize;

use crate::commands::{print_json, Settings};

#[derive(Serialize)]
struct PresetListing<'a> {
    presets: &'a [rigsmith_core::registry::PresetProfile],
    targets: &'a [rigsmith_core::registry::PerformanceTarget],
}

fn print_registry(registry: &Registry) {
    println!("Presets:");
    for p in &registry.presets {
        println!(
            "- {} ({}): cpu weight {:.2}, gpu weight {:.2}, recommended tiers cpu {} / gpu {}",
            p.id, p.label, p.cpu_weight, p.gpu_weight, p.recommended_cpu_tier, p.recommended_gpu_tier
        );
    }
    println!();
    println!("Targets:");
    for t in &registry.targets {
        println!(
            "- {} ({}): cpu tier >= {}, gpu tier >= {}, ram >= {} GB",
            t.id, t.label, t.min_cpu_tier, t.min_gpu_tier, t.min_ram_gb
        );
    }
}

/// List the presets and performance targets in effect.
pub fn presets_command(root: &str, registry: Option<String>, json: bool) -> Result<()> {
    let settings = Settings::load(root, registry.as_deref())?;
    if json {
        return print_json(&PresetListing {
            presets: &settings.registry.presets,
            targets: &settings.registry.targets,
        });
    }
    print_registry(&settings.registry);
    Ok(())
}
