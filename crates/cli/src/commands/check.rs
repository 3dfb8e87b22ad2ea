use anyhow::Result;
use rigsmith_core::compat::{check_compatibility, CompatOptions};
use tracing::info;

use crate::commands::{print_compatibility, print_json, read_build, Settings};

/// Run the compatibility rules against a build file.
pub fn check_command(
    root: &str,
    build: &str,
    preset: Option<String>,
    manual_overrides: u32,
    json: bool,
) -> Result<()> {
    let settings = Settings::load(root, None)?;
    let preset = settings.preset(preset)?;
    let input = read_build(build)?;

    let options = CompatOptions { manual_overrides, preset, ..CompatOptions::default() }
        .resolve_focus(&settings.registry);
    let result = check_compatibility(&input, &options);
    info!(build, compatible = result.is_compatible, "compatibility checked");

    if json {
        return print_json(&result);
    }

    println!("Compatibility check: {build}");
    print_compatibility(&result);
    Ok(())
}
