use anyhow::Result;
use rigsmith_core::compat::{check_compatibility, CompatOptions};
use rigsmith_core::model::CompatibilityResult;
use rigsmith_core::scoring::{calculate_scores_with, Score, ScoreOptions, ScoreResult};
use serde::Serialize;

use crate::commands::{print_json, read_build, Settings};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub compatibility: CompatibilityResult,
    pub scores: ScoreResult,
}

fn print_score(label: &str, score: &Score) {
    println!("{label:<14} {:>3}  (confidence {}%, weight {:.2})", score.value, score.confidence, score.weight);
    for factor in &score.breakdown {
        println!("    {:+4}  {}: {}", factor.impact, factor.factor, factor.explanation);
    }
}

/// Check and score a build file.
pub fn score_command(
    root: &str,
    build: &str,
    preset: Option<String>,
    target: Option<String>,
    json: bool,
) -> Result<()> {
    let settings = Settings::load(root, None)?;
    let preset = settings.preset(preset)?;
    let target = settings.target(target)?;
    let input = read_build(build)?;

    let compat_options = CompatOptions { preset: preset.clone(), ..CompatOptions::default() }
        .resolve_focus(&settings.registry);
    let compatibility = check_compatibility(&input, &compat_options);
    let score_options = ScoreOptions { preset, target_id: target };
    let scores = calculate_scores_with(&settings.registry, &input, &compatibility, &score_options);

    if json {
        return print_json(&ScoreSnapshot { compatibility, scores });
    }

    println!("Scores: {build}");
    println!("Overall: {}/100 (confidence {}%)", scores.overall.value, scores.overall.confidence);
    println!("  {}", scores.overall.summary);
    println!();
    print_score("Compatibility", &scores.compatibility);
    print_score("Performance", &scores.performance);
    print_score("Value", &scores.value);
    print_score("Usability", &scores.usability);

    if let Some(eval) = &scores.performance.target_evaluation {
        println!();
        println!("Target: {} ({})", eval.label, eval.target_id);
        println!("  CPU: {:?}  GPU: {:?}  RAM: {:?}", eval.cpu_fit, eval.gpu_fit, eval.ram_fit);
        if let Some(bottleneck) = eval.bottleneck {
            println!("  Bottleneck: {:?}", bottleneck);
        }
        println!("  Meets target: {}", if eval.meets_target { "yes" } else { "no" });
    }
    Ok(())
}
