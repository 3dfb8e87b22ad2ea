use anyhow::Result;
use rigsmith_core::planner::AutoFixStrategy;

use crate::commands::upgrade::planner_for;
use crate::commands::{print_compatibility, print_json, read_build, Settings};

/// Plan catalog swaps that resolve a build's compatibility issues.
pub fn autofix_command(
    root: &str,
    build: &str,
    strategy: &str,
    catalog: Option<String>,
    preset: Option<String>,
    json: bool,
) -> Result<()> {
    let strategy: AutoFixStrategy = strategy.parse()?;
    let settings = Settings::load(root, None)?;
    let preset = settings.preset(preset)?;
    let catalog = settings.catalog(catalog.as_deref())?;
    let input = read_build(build)?;

    let planner = planner_for(&settings, preset);
    let compat = planner.check_build(&input);
    let issues: Vec<_> = compat.issues().cloned().collect();
    let plan = planner.generate_auto_fix_plan(&input, &issues, strategy, &catalog);

    if json {
        return print_json(&plan);
    }

    println!("Auto-fix plan for {build} (strategy: {}):", plan.strategy);
    if plan.fixes.is_empty() {
        println!("No fixes applied.");
    }
    for fix in &plan.fixes {
        let removed = fix.removed.as_ref().map_or("(none)", |p| p.name.as_str());
        println!(
            "- [{}] {}: {} -> {} (${:.2})",
            fix.issue_id,
            fix.category.as_str(),
            removed,
            fix.added.name,
            fix.cost
        );
    }
    println!("Fixed: {}", join_or_none(&plan.issues_fixed));
    println!("Resolved by other fixes: {}", join_or_none(&plan.issues_resolved_by_cascade));
    println!("Remaining: {}", join_or_none(&plan.issues_remaining));
    println!("Skipped (status notes): {}", join_or_none(&plan.issues_skipped));
    println!("Total cost: ${:.2}", plan.total_cost);
    println!();
    print_compatibility(&plan.resulting_compatibility);
    Ok(())
}

fn join_or_none(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}
