//! Upgrade and auto-fix planning.
//!
//! The planner never mutates a build in place. Every candidate is applied to
//! a copy, re-checked and re-scored, and compared against the original.

mod autofix;
mod upgrade;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::compat::{default_rule_registry, evaluate_with, CompatOptions, RuleRegistry};
use crate::model::{BuildInput, CompatibilityResult, Issue};
use crate::registry::Registry;
use crate::scoring::{calculate_scores_with, ScoreOptions, ScoreResult};

pub use autofix::{AppliedFix, AutoFixPlan, AutoFixStrategy};
pub use upgrade::{
    PlatformChange, PlatformChangeItem, ScoreImpact, UpgradeOption, MAX_UPGRADE_OPTIONS,
    RAM_REPLACEMENT_ESTIMATE_USD, UPGRADE_BUDGET_SLACK,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Unknown auto-fix strategy '{0}'; expected one of: cheapest, performance")]
    UnknownStrategy(String),
}

/// Options and lookup tables shared by every simulation.
pub struct Planner {
    pub compat_options: CompatOptions,
    pub score_options: ScoreOptions,
    pub registry: Registry,
    rules: RuleRegistry,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    pub fn new() -> Self {
        Self {
            compat_options: CompatOptions::default(),
            score_options: ScoreOptions::default(),
            registry: Registry::builtin(),
            rules: default_rule_registry(),
        }
    }

    pub fn with_compat_options(mut self, options: CompatOptions) -> Self {
        self.compat_options = options;
        self
    }

    pub fn with_score_options(mut self, options: ScoreOptions) -> Self {
        self.score_options = options;
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    /// Check a simulated build derived from `original`.
    ///
    /// PSU overrides describe the user's own unit, so they are dropped once
    /// the simulation swaps the PSU for a different one.
    pub(crate) fn check(&self, original: &BuildInput, simulated: &BuildInput) -> CompatibilityResult {
        let same_psu = match (&original.psu, &simulated.psu) {
            (Some(a), Some(b)) => a.id == b.id,
            (None, None) => true,
            _ => false,
        };
        let options = self.resolved_compat_options();
        if same_psu {
            return evaluate_with(&self.rules, simulated, &options);
        }
        let options = CompatOptions { psu_connectors: None, psu_length_mm: None, ..options };
        evaluate_with(&self.rules, simulated, &options)
    }

    /// Compat options with the preset focus taken from this planner's registry.
    fn resolved_compat_options(&self) -> CompatOptions {
        self.compat_options.clone().resolve_focus(&self.registry)
    }

    pub(crate) fn score(&self, build: &BuildInput, compat: &CompatibilityResult) -> ScoreResult {
        calculate_scores_with(&self.registry, build, compat, &self.score_options)
    }

    /// Check a build with this planner's rules and options.
    pub fn check_build(&self, build: &BuildInput) -> CompatibilityResult {
        evaluate_with(&self.rules, build, &self.resolved_compat_options())
    }

    /// Score a build with this planner's registry and options.
    pub fn score_build(&self, build: &BuildInput, compat: &CompatibilityResult) -> ScoreResult {
        self.score(build, compat)
    }
}

/// Rank catalog upgrades using the built-in rules, presets, and targets.
pub fn generate_upgrade_path(
    build: &BuildInput,
    current_scores: &ScoreResult,
    budget_usd: f64,
    catalog: &Catalog,
) -> Vec<UpgradeOption> {
    Planner::new().generate_upgrade_path(build, current_scores, budget_usd, catalog)
}

/// Plan part swaps that resolve `issues`, using the built-in rules.
pub fn generate_auto_fix_plan(
    build: &BuildInput,
    issues: &[Issue],
    strategy: AutoFixStrategy,
    catalog: &Catalog,
) -> AutoFixPlan {
    Planner::new().generate_auto_fix_plan(build, issues, strategy, catalog)
}
