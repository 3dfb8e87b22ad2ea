use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::compat::same_socket;
use crate::model::{
    BuildInput, Component, ComponentCategory, MemoryType, Motherboard, Part, PartRef, Psu, Ram,
};
use crate::planner::Planner;
use crate::power::{estimate_system_draw, MIN_HEADROOM_RATIO};
use crate::scoring::ScoreResult;

/// Flat cost assumed for new memory when a platform change switches DDR generation.
pub const RAM_REPLACEMENT_ESTIMATE_USD: f64 = 120.0;

/// Options may overshoot the budget by this factor.
pub const UPGRADE_BUDGET_SLACK: f64 = 1.2;

pub const MAX_UPGRADE_OPTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformChangeItem {
    pub category: ComponentCategory,
    /// The part simulated for this item, if the catalog had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<PartRef>,
    pub description: String,
    pub cost: f64,
}

/// Extra parts an upgrade drags along with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformChange {
    pub items: Vec<PlatformChangeItem>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreImpact {
    pub overall: i32,
    pub performance: i32,
    pub value: i32,
    pub compatibility: i32,
}

impl ScoreImpact {
    fn between(before: &ScoreResult, after: &ScoreResult) -> Self {
        let delta = |a: u8, b: u8| i32::from(b) - i32::from(a);
        Self {
            overall: delta(before.overall.value, after.overall.value),
            performance: delta(before.performance.value, after.performance.value),
            value: delta(before.value.value, after.value.value),
            compatibility: delta(before.compatibility.value, after.compatibility.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeOption {
    pub category: ComponentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<PartRef>,
    pub candidate: PartRef,
    /// Price of the candidate alone.
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_change: Option<PlatformChange>,
    pub total_cost: f64,
    pub score_impact: ScoreImpact,
    /// Overall score points gained per $100 spent.
    pub value_rating: f64,
}

impl Planner {
    /// Simulate every catalog upgrade for the selected parts and rank them.
    ///
    /// Candidates must sit in a strictly higher upgrade tier and carry a
    /// price. Options whose total cost exceeds the budget by more than
    /// [`UPGRADE_BUDGET_SLACK`] are dropped.
    pub fn generate_upgrade_path(
        &self,
        build: &BuildInput,
        current_scores: &ScoreResult,
        budget_usd: f64,
        catalog: &Catalog,
    ) -> Vec<UpgradeOption> {
        let ceiling = budget_usd * UPGRADE_BUDGET_SLACK;
        let mut options = Vec::new();

        for category in ComponentCategory::ALL {
            for current in build.selected(category) {
                let Some(current_tier) = current.upgrade_tier() else {
                    continue;
                };
                for candidate in catalog.candidates(category) {
                    if candidate.id() == current.id() {
                        continue;
                    }
                    let (Some(price), Some(tier)) = (candidate.price_usd(), candidate.upgrade_tier())
                    else {
                        continue;
                    };
                    if tier <= current_tier {
                        continue;
                    }
                    let Some((simulated, platform_change)) =
                        simulate_upgrade(build, &current, &candidate, catalog)
                    else {
                        debug!(candidate = candidate.id(), "no catalog part for the platform change");
                        continue;
                    };

                    let total_cost = price + platform_change.as_ref().map_or(0.0, |p| p.total_cost);
                    if total_cost <= 0.0 || total_cost > ceiling {
                        debug!(candidate = candidate.id(), total_cost, ceiling, "outside budget");
                        continue;
                    }

                    let compat = self.check(build, &simulated);
                    let scores = self.score(&simulated, &compat);
                    let score_impact = ScoreImpact::between(current_scores, &scores);
                    let value_rating = f64::from(score_impact.overall) / total_cost * 100.0;
                    debug!(
                        candidate = candidate.id(),
                        total_cost,
                        overall_delta = score_impact.overall,
                        "simulated upgrade"
                    );

                    options.push(UpgradeOption {
                        category,
                        current: Some(current.to_ref()),
                        candidate: candidate.to_ref(),
                        cost: price,
                        platform_change,
                        total_cost,
                        score_impact,
                        value_rating,
                    });
                }
            }
        }

        options.sort_by(|a, b| {
            b.value_rating
                .partial_cmp(&a.value_rating)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.total_cost.partial_cmp(&b.total_cost).unwrap_or(Ordering::Equal))
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });
        options.truncate(MAX_UPGRADE_OPTIONS);
        info!(options = options.len(), budget_usd, "upgrade path generated");
        options
    }
}

/// Apply `candidate` in place of `current`, plus whatever platform parts it
/// forces. `None` when a forced part is not in the catalog.
fn simulate_upgrade(
    build: &BuildInput,
    current: &Component,
    candidate: &Component,
    catalog: &Catalog,
) -> Option<(BuildInput, Option<PlatformChange>)> {
    let mut simulated = build.replacing(current.id(), candidate.clone());
    let mut items = Vec::new();

    match candidate {
        Component::Cpu(cpu) => {
            if let Some(board) = &build.motherboard {
                if !same_socket(&cpu.specs.socket, &board.specs.socket) {
                    let ram_type = build.ram.as_ref().map(|r| r.specs.memory_type);
                    let new_board = cheapest_board(catalog, &cpu.specs.socket, ram_type)?;
                    items.push(PlatformChangeItem {
                        category: ComponentCategory::Motherboard,
                        part: Some(Component::Motherboard(new_board.clone()).to_ref()),
                        description: format!("{} needs a socket {} motherboard", cpu.name, cpu.specs.socket),
                        cost: new_board.price_usd.unwrap_or_default(),
                    });
                    simulated = simulated.with_component(Component::Motherboard(new_board.clone()));

                    if let Some(ram) = &build.ram {
                        if ram.specs.memory_type != new_board.specs.memory_type {
                            let kit = cheapest_ram(catalog, new_board);
                            items.push(PlatformChangeItem {
                                category: ComponentCategory::Ram,
                                part: kit.map(|k| Component::Ram(k.clone()).to_ref()),
                                description: format!(
                                    "{} boards need {} memory",
                                    cpu.specs.socket, new_board.specs.memory_type
                                ),
                                cost: RAM_REPLACEMENT_ESTIMATE_USD,
                            });
                            simulated = match kit {
                                Some(kit) => simulated.with_component(Component::Ram(kit.clone())),
                                None => simulated.without(ComponentCategory::Ram),
                            };
                        }
                    }
                }
            }
        }
        Component::Gpu(gpu) => {
            if let Some(psu) = &build.psu {
                let draw = estimate_system_draw(&simulated).total_w;
                let required = (f64::from(draw) * MIN_HEADROOM_RATIO).ceil() as u32;
                if required > psu.specs.wattage_w {
                    let new_psu = cheapest_psu(catalog, required)?;
                    items.push(PlatformChangeItem {
                        category: ComponentCategory::Psu,
                        part: Some(Component::Psu(new_psu.clone()).to_ref()),
                        description: format!(
                            "{} raises the load to {draw} W; {required} W PSU recommended",
                            gpu.name
                        ),
                        cost: new_psu.price_usd.unwrap_or_default(),
                    });
                    simulated = simulated.with_component(Component::Psu(new_psu.clone()));
                }
            }
        }
        _ => {}
    }

    let platform_change = (!items.is_empty()).then(|| PlatformChange {
        total_cost: items.iter().map(|i| i.cost).sum(),
        items,
    });
    Some((simulated, platform_change))
}

fn by_price<T>(a: &Part<T>, b: &Part<T>) -> Ordering {
    a.price_usd
        .partial_cmp(&b.price_usd)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Cheapest priced board for `socket`, preferring the current memory generation.
fn cheapest_board<'a>(
    catalog: &'a Catalog,
    socket: &str,
    ram_type: Option<MemoryType>,
) -> Option<&'a Motherboard> {
    let mut boards: Vec<&Motherboard> = catalog
        .motherboards
        .iter()
        .filter(|b| b.price_usd.is_some() && same_socket(&b.specs.socket, socket))
        .collect();
    boards.sort_by(|a, b| by_price(*a, *b));
    ram_type
        .and_then(|t| boards.iter().copied().find(|b| b.specs.memory_type == t))
        .or_else(|| boards.first().copied())
}

fn cheapest_ram<'a>(catalog: &'a Catalog, board: &Motherboard) -> Option<&'a Ram> {
    catalog
        .rams
        .iter()
        .filter(|r| r.price_usd.is_some() && r.specs.memory_type == board.specs.memory_type)
        .filter(|r| r.specs.modules <= board.specs.memory_slots)
        .min_by(|a, b| by_price(*a, *b))
}

fn cheapest_psu(catalog: &Catalog, min_wattage: u32) -> Option<&Psu> {
    catalog
        .psus
        .iter()
        .filter(|p| p.price_usd.is_some() && p.specs.wattage_w >= min_wattage)
        .min_by(|a, b| by_price(*a, *b))
}
