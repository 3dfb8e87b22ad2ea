use anyhow::{anyhow, Result};
use rigsmith_core::compat::CompatOptions;
use rigsmith_core::planner::{Planner, UpgradeOption};
use rigsmith_core::scoring::ScoreOptions;

use crate::commands::{print_json, read_build, Settings};

/// Planner configured from the resolved workspace settings.
pub(crate) fn planner_for(settings: &Settings, preset: Option<String>) -> Planner {
    Planner::new()
        .with_registry(settings.registry.clone())
        .with_compat_options(CompatOptions { preset: preset.clone(), ..CompatOptions::default() })
        .with_score_options(ScoreOptions { preset, target_id: None })
}

pub(crate) fn validate_budget(budget: f64) -> Result<()> {
    if !budget.is_finite() || budget <= 0.0 {
        return Err(anyhow!("Invalid budget '{}'. Expected a positive amount in USD", budget));
    }
    Ok(())
}

fn print_option(rank: usize, option: &UpgradeOption) {
    let current = option.current.as_ref().map_or("(none)", |p| p.name.as_str());
    println!(
        "{rank:>2}. [{}] {} -> {}  ${:.2}  overall {:+}  value {:.2}",
        option.category.as_str(),
        current,
        option.candidate.name,
        option.total_cost,
        option.score_impact.overall,
        option.value_rating
    );
    if let Some(change) = &option.platform_change {
        for item in &change.items {
            println!("      + {} (${:.2})", item.description, item.cost);
        }
    }
}

/// Rank catalog upgrades for a build within a budget.
pub fn upgrade_command(
    root: &str,
    build: &str,
    budget: f64,
    catalog: Option<String>,
    preset: Option<String>,
    json: bool,
) -> Result<()> {
    validate_budget(budget)?;
    let settings = Settings::load(root, None)?;
    let preset = settings.preset(preset)?;
    let catalog = settings.catalog(catalog.as_deref())?;
    let input = read_build(build)?;

    let planner = planner_for(&settings, preset);
    let compat = planner.check_build(&input);
    let scores = planner.score_build(&input, &compat);
    let options = planner.generate_upgrade_path(&input, &scores, budget, &catalog);

    if json {
        return print_json(&options);
    }

    println!("Upgrade options for {build} (budget ${budget:.2}, current overall {}):", scores.overall.value);
    if options.is_empty() {
        println!("(none within budget)");
    }
    for (i, option) in options.iter().enumerate() {
        print_option(i + 1, option);
    }
    Ok(())
}
