use serde::{Deserialize, Serialize};

use crate::model::BuildInput;
use crate::registry::{PerformanceTarget, Registry};
use crate::scoring::{Score, Tally, PERFORMANCE_WEIGHT};

const TARGET_BASE: i32 = 50;
const TARGET_ALL_MET: i32 = 35;
const TARGET_EXCEEDS: i32 = 5;
const TARGET_BELOW: i32 = -20;

const BALANCED_BONUS: i32 = 5;
const GAMING_CPU_HEAVY_PENALTY: i32 = -10;
const NO_GPU_PENALTY: i32 = -20;
const MISSING_PART_CONFIDENCE: u8 = 40;

/// How one dimension of a build compares to a target minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Below,
    Meets,
    Exceeds,
}

impl Fit {
    fn compare(actual: Option<u32>, minimum: u32) -> Self {
        match actual {
            Some(value) if value > minimum => Fit::Exceeds,
            Some(value) if value == minimum => Fit::Meets,
            _ => Fit::Below,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bottleneck {
    Cpu,
    Gpu,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetEvaluation {
    pub target_id: String,
    pub label: String,
    pub cpu_fit: Fit,
    pub gpu_fit: Fit,
    pub ram_fit: Fit,
    /// Set when exactly one of CPU or GPU falls short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottleneck: Option<Bottleneck>,
    pub meets_target: bool,
}

pub(super) fn score_target(build: &BuildInput, target: &PerformanceTarget) -> Score {
    let cpu_fit = Fit::compare(
        build.cpu.as_ref().map(|c| u32::from(c.specs.tier)),
        u32::from(target.min_cpu_tier),
    );
    let gpu_fit = Fit::compare(
        build.gpu.as_ref().map(|g| u32::from(g.specs.tier)),
        u32::from(target.min_gpu_tier),
    );
    let ram_fit = Fit::compare(build.ram.as_ref().map(|r| r.specs.capacity_gb), target.min_ram_gb);

    let bottleneck = match (cpu_fit, gpu_fit) {
        (Fit::Below, Fit::Meets | Fit::Exceeds) => Some(Bottleneck::Cpu),
        (Fit::Meets | Fit::Exceeds, Fit::Below) => Some(Bottleneck::Gpu),
        _ => None,
    };
    let fits = [("cpu", cpu_fit), ("gpu", gpu_fit), ("ram", ram_fit)];
    let meets_target = fits.iter().all(|(_, fit)| *fit != Fit::Below);

    let mut tally = Tally::new(TARGET_BASE, format!("judged against {}", target.label));
    if meets_target {
        tally.add("target_met", TARGET_ALL_MET, "every dimension meets the target");
    }
    for (dimension, fit) in fits {
        match fit {
            Fit::Exceeds => tally.add(dimension, TARGET_EXCEEDS, format!("{dimension} exceeds the target")),
            Fit::Below => tally.add(dimension, TARGET_BELOW, format!("{dimension} is below the target")),
            Fit::Meets => {}
        }
    }

    let missing = [build.cpu.is_none(), build.gpu.is_none(), build.ram.is_none()]
        .iter()
        .filter(|m| **m)
        .count();
    let confidence = if missing == 0 { 100 } else { MISSING_PART_CONFIDENCE };
    let summary = match (meets_target, bottleneck) {
        (true, _) => format!("Meets {}", target.label),
        (false, Some(Bottleneck::Cpu)) => format!("CPU falls short of {}", target.label),
        (false, Some(Bottleneck::Gpu)) => format!("GPU falls short of {}", target.label),
        (false, None) => format!("Falls short of {}", target.label),
    };

    let mut score = tally.finish(confidence, PERFORMANCE_WEIGHT, summary);
    score.target_evaluation = Some(TargetEvaluation {
        target_id: target.id.clone(),
        label: target.label.clone(),
        cpu_fit,
        gpu_fit,
        ram_fit,
        bottleneck,
        meets_target,
    });
    score
}

pub(super) fn score_preset(registry: &Registry, build: &BuildInput, preset: Option<&str>) -> Score {
    let (cpu_weight, gpu_weight) = registry.weights_for(preset);
    let focus = registry.focus_for(preset);
    let cpu_tier = build.cpu.as_ref().map(|c| i32::from(c.specs.tier));
    let gpu_tier = build.gpu.as_ref().map(|g| i32::from(g.specs.tier));

    let cpu_sub = f64::from(cpu_tier.unwrap_or(0) * 10);
    let gpu_sub = f64::from(gpu_tier.unwrap_or(0) * 10);
    let cpu_points = (cpu_sub * cpu_weight).round() as i32;
    let gpu_points = (gpu_sub * gpu_weight).round() as i32;

    let mut tally = Tally::new(0, format!("{} preset", preset.unwrap_or("default")));
    tally.add("cpu", cpu_points, format!("CPU sub-score {cpu_sub:.0} x {cpu_weight:.2}"));
    tally.add("gpu", gpu_points, format!("GPU sub-score {gpu_sub:.0} x {gpu_weight:.2}"));

    match (cpu_tier, gpu_tier) {
        (Some(cpu), Some(gpu)) => {
            if (cpu - gpu).abs() <= 1 {
                tally.add("balance", BALANCED_BONUS, "CPU and GPU are well matched");
            }
            if focus.is_gaming() && cpu - gpu > 3 {
                tally.add("cpu_heavy", GAMING_CPU_HEAVY_PENALTY, "CPU is far ahead of the GPU for gaming");
            }
        }
        (_, None) => tally.add("no_gpu", NO_GPU_PENALTY, "no discrete graphics card"),
        (None, Some(_)) => {}
    }

    let confidence = if build.cpu.is_some() && build.gpu.is_some() { 100 } else { MISSING_PART_CONFIDENCE };
    let value = tally.value();
    let summary = match value {
        80..=100 => "High-end performance",
        60..=79 => "Strong performance",
        40..=59 => "Mid-range performance",
        _ => "Entry-level performance",
    };
    tally.finish(confidence, PERFORMANCE_WEIGHT, summary)
}
