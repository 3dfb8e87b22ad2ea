//! Four-dimension build scoring.
//!
//! Every score is recomputed from scratch from the build, the compatibility
//! result, and the preset/target lookups. Each sub-score keeps an itemized
//! breakdown so callers can show where points were gained or lost.

mod compatibility;
mod performance;
mod usability;
mod value;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{BuildInput, CompatibilityResult};
use crate::registry::Registry;

pub use performance::{Bottleneck, Fit, TargetEvaluation};
pub use value::estimated_price_usd;

pub const COMPATIBILITY_WEIGHT: f64 = 0.40;
pub const PERFORMANCE_WEIGHT: f64 = 0.30;
pub const VALUE_WEIGHT: f64 = 0.15;
pub const USABILITY_WEIGHT: f64 = 0.15;

/// Below this compatibility score the overall score is capped at half of it.
pub const COMPATIBILITY_OVERRIDE_THRESHOLD: u8 = 50;

/// Scoring knobs supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// When set and known, performance is judged against this target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl ScoreOptions {
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }
}

/// One line of a score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub impact: i32,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub value: u8,
    pub confidence: u8,
    pub weight: f64,
    pub breakdown: Vec<ScoreFactor>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_evaluation: Option<TargetEvaluation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall: Score,
    pub compatibility: Score,
    pub performance: Score,
    pub value: Score,
    pub usability: Score,
}

/// Compatibility score alone, for comparing simulated builds.
pub(crate) fn compatibility_score(compat: &CompatibilityResult) -> u8 {
    compatibility::score(compat).value
}

/// Running total for one sub-score.
pub(crate) struct Tally {
    total: i32,
    factors: Vec<ScoreFactor>,
}

impl Tally {
    pub(crate) fn new(base: i32, explanation: impl Into<String>) -> Self {
        Self {
            total: base,
            factors: vec![ScoreFactor {
                factor: "base".to_string(),
                impact: base,
                explanation: explanation.into(),
            }],
        }
    }

    pub(crate) fn add(&mut self, factor: &str, impact: i32, explanation: impl Into<String>) {
        self.total += impact;
        self.factors.push(ScoreFactor {
            factor: factor.to_string(),
            impact,
            explanation: explanation.into(),
        });
    }

    pub(crate) fn value(&self) -> u8 {
        self.total.clamp(0, 100) as u8
    }

    pub(crate) fn finish(self, confidence: u8, weight: f64, summary: impl Into<String>) -> Score {
        Score {
            value: self.value(),
            confidence,
            weight,
            breakdown: self.factors,
            summary: summary.into(),
            target_evaluation: None,
        }
    }
}

/// Score `build` using the built-in presets and targets.
pub fn calculate_scores(
    build: &BuildInput,
    compat: &CompatibilityResult,
    options: &ScoreOptions,
) -> ScoreResult {
    calculate_scores_with(&Registry::builtin(), build, compat, options)
}

/// Score `build`, resolving presets and targets through `registry`.
///
/// An unknown target id falls back to preset mode.
pub fn calculate_scores_with(
    registry: &Registry,
    build: &BuildInput,
    compat: &CompatibilityResult,
    options: &ScoreOptions,
) -> ScoreResult {
    let preset = options.preset.as_deref();
    let target = options.target_id.as_deref().and_then(|id| {
        let found = registry.target(id);
        if found.is_none() {
            debug!(target_id = id, "unknown performance target; scoring in preset mode");
        }
        found
    });

    let compatibility = compatibility::score(compat);
    let performance = match target {
        Some(target) => performance::score_target(build, target),
        None => performance::score_preset(registry, build, preset),
    };
    let value = value::score(registry, build, preset, &performance);
    let usability = usability::score(build, compat);
    let overall = aggregate(&compatibility, &performance, &value, &usability);

    debug!(
        overall = overall.value,
        compatibility = compatibility.value,
        performance = performance.value,
        value = value.value,
        usability = usability.value,
        "scores calculated"
    );
    ScoreResult { overall, compatibility, performance, value, usability }
}

fn aggregate(compatibility: &Score, performance: &Score, value: &Score, usability: &Score) -> Score {
    let parts = [compatibility, performance, value, usability];
    let confidence = parts.iter().map(|s| f64::from(s.confidence) * s.weight).sum::<f64>().round();
    let breakdown = [
        ("compatibility", compatibility),
        ("performance", performance),
        ("value", value),
        ("usability", usability),
    ]
    .iter()
    .map(|(name, score)| ScoreFactor {
        factor: (*name).to_string(),
        impact: (f64::from(score.value) * score.weight).round() as i32,
        explanation: format!("{} x {:.2}", score.value, score.weight),
    })
    .collect::<Vec<_>>();

    let (overall, summary) = if compatibility.value < COMPATIBILITY_OVERRIDE_THRESHOLD {
        (
            (f64::from(compatibility.value) * 0.5).round(),
            format!(
                "Compatibility {} is below {COMPATIBILITY_OVERRIDE_THRESHOLD}; overall capped at half of it",
                compatibility.value
            ),
        )
    } else {
        let weighted = parts.iter().map(|s| f64::from(s.value) * s.weight).sum::<f64>().round();
        (weighted, "Weighted blend of compatibility, performance, value and usability".to_string())
    };

    Score {
        value: overall.clamp(0.0, 100.0) as u8,
        confidence: confidence.clamp(0.0, 100.0) as u8,
        weight: 1.0,
        breakdown,
        summary,
        target_evaluation: None,
    }
}
