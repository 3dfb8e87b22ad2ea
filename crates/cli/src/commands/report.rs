use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use rigsmith_core::model::{BuildInput, CompatibilityResult};
use rigsmith_core::planner::UpgradeOption;
use rigsmith_core::scoring::{ScoreOptions, ScoreResult};
use serde::Serialize;
use tracing::info;

use crate::build_fingerprint;
use crate::commands::upgrade::{planner_for, validate_budget};
use crate::commands::{read_build, Settings};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub generated_at: String,
    pub fingerprint: String,
    pub version: String,
    pub build: BuildInput,
    pub compatibility: CompatibilityResult,
    pub scores: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Vec<UpgradeOption>>,
}

/// Write a full JSON report for a build into the workspace `reports/` dir.
pub fn report_command(
    root: &str,
    build: &str,
    catalog: Option<String>,
    budget: Option<f64>,
    preset: Option<String>,
    target: Option<String>,
) -> Result<()> {
    if let Some(b) = budget {
        validate_budget(b)?;
    }
    let settings = Settings::load(root, None)?;
    let preset = settings.preset(preset)?;
    let target = settings.target(target)?;
    let input = read_build(build)?;

    let planner = planner_for(&settings, preset.clone())
        .with_score_options(ScoreOptions { preset, target_id: target });
    let compatibility = planner.check_build(&input);
    let scores = planner.score_build(&input, &compatibility);

    let upgrades = match budget {
        Some(b) => {
            let catalog = settings.catalog(catalog.as_deref())?;
            Some(planner.generate_upgrade_path(&input, &scores, b, &catalog))
        }
        None => None,
    };

    let fingerprint = build_fingerprint(&input)?;
    let report = BuildReport {
        generated_at: Utc::now().to_rfc3339(),
        fingerprint: fingerprint.clone(),
        version: rigsmith_core::version().to_string(),
        build: input,
        compatibility,
        scores,
        budget_usd: budget,
        upgrades,
    };

    let layout = &settings.layout;
    fs::create_dir_all(&layout.reports_dir).with_context(|| {
        format!("Failed to create reports dir: {}", layout.reports_dir.display())
    })?;
    let path = layout.report_path(&format!("report-{}", &fingerprint[..12]));
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    fs::write(&path, json).with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!(path = %path.display(), "report written");

    println!("Report written: {}", layout.relative_string(&path));
    println!("  Fingerprint: {}", fingerprint);
    println!("  Overall score: {}", report.scores.overall.value);
    println!("  Compatible: {}", if report.compatibility.is_compatible { "yes" } else { "no" });
    if let Some(upgrades) = &report.upgrades {
        println!("  Upgrade options: {}", upgrades.len());
    }
    Ok(())
}
