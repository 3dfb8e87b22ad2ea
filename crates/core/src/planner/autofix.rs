use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::{
    BuildInput, CompatibilityResult, Component, ComponentCategory, Issue, PartRef, Severity,
};
use crate::planner::{Planner, PlannerError};
use crate::scoring::compatibility_score;

/// How candidate replacements are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoFixStrategy {
    #[default]
    Cheapest,
    Performance,
}

impl AutoFixStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoFixStrategy::Cheapest => "cheapest",
            AutoFixStrategy::Performance => "performance",
        }
    }
}

impl fmt::Display for AutoFixStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutoFixStrategy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheapest" => Ok(AutoFixStrategy::Cheapest),
            "performance" => Ok(AutoFixStrategy::Performance),
            _ => Err(PlannerError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFix {
    pub issue_id: String,
    pub category: ComponentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<PartRef>,
    pub added: PartRef,
    pub cost: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFixPlan {
    pub strategy: AutoFixStrategy,
    pub fixes: Vec<AppliedFix>,
    pub issues_fixed: Vec<String>,
    /// Issues that disappeared because of a fix made for another issue.
    pub issues_resolved_by_cascade: Vec<String>,
    pub issues_remaining: Vec<String>,
    /// Status notes that describe the build and need no change.
    #[serde(default)]
    pub issues_skipped: Vec<String>,
    pub total_cost: f64,
    pub fixed_build: BuildInput,
    pub resulting_compatibility: CompatibilityResult,
}

/// Categories worth swapping for each issue id, in preference order.
fn fix_categories(issue_id: &str) -> &'static [ComponentCategory] {
    use ComponentCategory::*;
    match issue_id {
        "socketMismatch" => &[Motherboard, Cpu],
        "ramTypeMismatch" => &[Ram, Motherboard],
        "cpuMemoryUnsupported" => &[Ram, Cpu],
        "formFactorMismatch" => &[Case, Motherboard],
        "coolerSocketUnsupported" => &[Cooler],
        "ramModulesExceeded" => &[Ram, Motherboard],
        "noDisplayOutput" => &[Gpu, Cpu],
        "gpuTooLong" | "gpuTooThick" => &[Case, Gpu],
        "coolerTooTall" | "radiatorIncompatible" => &[Cooler, Case],
        "psuTooLong" => &[Psu, Case],
        "psuWattage" | "gpuPowerConnectors" => &[Psu],
        "coolingCapacity" => &[Cooler],
        "nvmeSlotsExceeded" | "sataPortsExceeded" => &[Motherboard],
        "driveBayClearance" => &[Case],
        "fanHeaders" => &[Motherboard],
        "rgbHeaders" => &[Motherboard, Cooler],
        "usbCHeader" => &[Motherboard, Case],
        "eccSupport" | "ramSpeedRisk" => &[Ram],
        "biosUpdate" => &[Motherboard],
        "tier-imbalance" => &[Cpu, Gpu],
        "psu-excessive" => &[Psu],
        "ram-speed-excess" => &[Ram],
        "premium-chipset" => &[Motherboard],
        "pcie5-ssd-gaming" => &[Storage],
        _ => &[],
    }
}

/// Status notes with no suggested fix describe the build; they are not problems.
fn is_actionable(issue: &Issue) -> bool {
    issue.severity > Severity::Info || !issue.suggested_fixes.is_empty()
}

/// An issue counts as still present while its id shows up at the same or a
/// higher severity.
fn still_present(result: &CompatibilityResult, issue: &Issue) -> bool {
    result.issues().any(|i| i.id == issue.id && i.severity >= issue.severity)
}

/// A swap makes the build worse when it raises any issue at or above the
/// severity being fixed that was not already there at that level, or when it
/// lowers the compatibility score.
fn makes_worse(before: &CompatibilityResult, after: &CompatibilityResult, fixing: &Issue) -> bool {
    let regressed = after
        .issues()
        .filter(|i| i.id != fixing.id && i.severity >= fixing.severity)
        .any(|i| !before.issues().any(|b| b.id == i.id && b.severity >= i.severity));
    regressed || compatibility_score(after) < compatibility_score(before)
}

/// Secondary key for the performance strategy.
fn headline_spec(component: &Component) -> f64 {
    match component {
        Component::Cpu(p) => f64::from(p.specs.cores),
        Component::Gpu(p) => f64::from(p.specs.vram_gb.unwrap_or(0)),
        Component::Motherboard(p) => f64::from(p.specs.m2_slots),
        Component::Ram(p) => f64::from(p.specs.speed_mhz),
        Component::Storage(p) => f64::from(p.specs.capacity_gb),
        Component::Psu(p) => f64::from(p.specs.wattage_w),
        Component::Cooler(p) => f64::from(p.specs.tdp_rating_w.unwrap_or(0)),
        Component::Case(p) => f64::from(p.specs.max_gpu_length_mm.unwrap_or(0)),
    }
}

fn order_candidates(candidates: &mut [Component], strategy: AutoFixStrategy) {
    let price = |c: &Component| c.price_usd().unwrap_or(f64::MAX);
    candidates.sort_by(|a, b| {
        let primary = match strategy {
            AutoFixStrategy::Cheapest => price(a).partial_cmp(&price(b)).unwrap_or(Ordering::Equal),
            AutoFixStrategy::Performance => b
                .upgrade_tier()
                .cmp(&a.upgrade_tier())
                .then_with(|| {
                    headline_spec(b).partial_cmp(&headline_spec(a)).unwrap_or(Ordering::Equal)
                })
                .then_with(|| price(a).partial_cmp(&price(b)).unwrap_or(Ordering::Equal)),
        };
        primary.then_with(|| a.id().cmp(b.id()))
    });
}

/// The part a swap in `category` would take out of the build.
fn part_to_replace(build: &BuildInput, category: ComponentCategory, issue: &Issue) -> Option<Component> {
    let selected = build.selected(category);
    selected
        .iter()
        .find(|c| issue.affected_parts.iter().any(|id| id == c.id()))
        .or_else(|| selected.first())
        .cloned()
}

impl Planner {
    /// Resolve `issues` one at a time by swapping in catalog parts.
    ///
    /// Issues are handled most severe first. A candidate is kept only when
    /// the issue goes away without raising another issue of the same or a
    /// higher severity and without lowering the compatibility score.
    pub fn generate_auto_fix_plan(
        &self,
        build: &BuildInput,
        issues: &[Issue],
        strategy: AutoFixStrategy,
        catalog: &Catalog,
    ) -> AutoFixPlan {
        let (mut ordered, skipped): (Vec<&Issue>, Vec<&Issue>) =
            issues.iter().partition(|i| is_actionable(i));
        ordered.sort_by(|a, b| b.severity.cmp(&a.severity));

        let mut working = build.clone();
        let mut working_result = self.check(build, &working);
        let mut fixes = Vec::new();
        let mut issues_fixed = Vec::new();
        let mut issues_resolved_by_cascade = Vec::new();
        let mut issues_remaining = Vec::new();

        for issue in ordered {
            if !still_present(&working_result, issue) {
                issues_resolved_by_cascade.push(issue.id.clone());
                continue;
            }

            let mut applied = None;
            'categories: for &category in fix_categories(&issue.id) {
                let removed = part_to_replace(&working, category, issue);
                let mut candidates: Vec<Component> = catalog
                    .candidates(category)
                    .into_iter()
                    .filter(|c| c.price_usd().is_some())
                    .filter(|c| removed.as_ref().map_or(true, |r| r.id() != c.id()))
                    .collect();
                order_candidates(&mut candidates, strategy);

                for candidate in candidates {
                    let simulated = match &removed {
                        Some(part) => working.replacing(part.id(), candidate.clone()),
                        None => working.with_component(candidate.clone()),
                    };
                    let result = self.check(build, &simulated);
                    if still_present(&result, issue) || makes_worse(&working_result, &result, issue) {
                        continue;
                    }
                    debug!(issue = %issue.id, candidate = candidate.id(), "fix accepted");
                    applied = Some((
                        AppliedFix {
                            issue_id: issue.id.clone(),
                            category,
                            removed: removed.as_ref().map(Component::to_ref),
                            added: candidate.to_ref(),
                            cost: candidate.price_usd().unwrap_or_default(),
                            reason: format!("{}: {}", issue.title, candidate.name()),
                        },
                        simulated,
                        result,
                    ));
                    break 'categories;
                }
            }

            match applied {
                Some((fix, simulated, result)) => {
                    working = simulated;
                    working_result = result;
                    issues_fixed.push(issue.id.clone());
                    fixes.push(fix);
                }
                None => {
                    debug!(issue = %issue.id, "no catalog part resolves the issue");
                    issues_remaining.push(issue.id.clone());
                }
            }
        }

        let resulting_compatibility = self.check(build, &working);
        let total_cost: f64 = fixes.iter().map(|f| f.cost).sum();
        info!(
            strategy = %strategy,
            fixed = issues_fixed.len(),
            remaining = issues_remaining.len(),
            total_cost,
            "auto-fix plan generated"
        );
        AutoFixPlan {
            strategy,
            fixes,
            issues_fixed,
            issues_resolved_by_cascade,
            issues_remaining,
            issues_skipped: skipped.iter().map(|i| i.id.clone()).collect(),
            total_cost,
            fixed_build: working,
            resulting_compatibility,
        }
    }
}
