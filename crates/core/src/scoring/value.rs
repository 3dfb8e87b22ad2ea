use crate::model::{BuildInput, ChipsetClass, Component};
use crate::registry::Registry;
use crate::scoring::{Score, Tally, VALUE_WEIGHT};

const VALUE_BASE: i32 = 50;
const POINTS_PER_PERF_PER_100_USD: f64 = 5.0;
const MAX_EFFICIENCY_POINTS: f64 = 45.0;
const GAMING_IMBALANCE_PENALTY: i32 = -15;
const BALANCED_BONUS: i32 = 10;

const CPU_TIER_PRICE: [f64; 10] = [70.0, 100.0, 140.0, 180.0, 230.0, 290.0, 360.0, 450.0, 560.0, 700.0];
const GPU_TIER_PRICE: [f64; 10] =
    [100.0, 150.0, 210.0, 280.0, 370.0, 480.0, 620.0, 800.0, 1100.0, 1600.0];

fn tier_price(table: &[f64; 10], tier: u8) -> f64 {
    table[usize::from(tier.clamp(1, 10)) - 1]
}

/// Midpoint of the typical street price for a part's tier.
///
/// Used when a part has no list price so value can still be judged.
pub fn estimated_price_usd(component: &Component) -> f64 {
    match component {
        Component::Cpu(cpu) => tier_price(&CPU_TIER_PRICE, cpu.specs.tier),
        Component::Gpu(gpu) => tier_price(&GPU_TIER_PRICE, gpu.specs.tier),
        Component::Motherboard(board) => match ChipsetClass::classify(&board.specs.chipset) {
            ChipsetClass::Entry => 100.0,
            ChipsetClass::Mainstream => 170.0,
            ChipsetClass::Premium => 320.0,
        },
        Component::Ram(ram) => 20.0 + f64::from(ram.specs.capacity_gb) * 2.5,
        Component::Storage(drive) => {
            let per_tb = if drive.specs.kind.uses_sata() { 45.0 } else { 70.0 };
            20.0 + f64::from(drive.specs.capacity_gb) / 1000.0 * per_tb
        }
        Component::Psu(psu) => 30.0 + f64::from(psu.specs.wattage_w) * 0.1,
        Component::Cooler(_) => component.upgrade_tier().map_or(45.0, |tier| 20.0 + f64::from(tier) * 12.0),
        Component::Case(_) => 90.0,
    }
}

pub(super) fn score(
    registry: &Registry,
    build: &BuildInput,
    preset: Option<&str>,
    performance: &Score,
) -> Score {
    let components = build.components();
    if components.is_empty() {
        return Tally::new(VALUE_BASE, "empty build").finish(0, VALUE_WEIGHT, "Nothing to price yet");
    }

    let mut estimated = 0usize;
    let total_usd: f64 = components
        .iter()
        .map(|c| {
            c.price_usd().unwrap_or_else(|| {
                estimated += 1;
                estimated_price_usd(c)
            })
        })
        .sum();

    let mut tally = Tally::new(VALUE_BASE, format!("build priced at ${total_usd:.0}"));
    if total_usd > 0.0 {
        let per_100 = f64::from(performance.value) / (total_usd / 100.0);
        let points = (per_100 * POINTS_PER_PERF_PER_100_USD).min(MAX_EFFICIENCY_POINTS);
        tally.add(
            "efficiency",
            points.round() as i32,
            format!("{per_100:.2} performance points per $100"),
        );
    }

    if let (Some(cpu), Some(gpu)) = (&build.cpu, &build.gpu) {
        let (cpu_tier, gpu_tier) = (i32::from(cpu.specs.tier), i32::from(gpu.specs.tier));
        if registry.focus_for(preset).is_gaming() && cpu_tier >= gpu_tier + 3 {
            tally.add("imbalance", GAMING_IMBALANCE_PENALTY, "CPU spend is wasted on a GPU-bound gaming build");
        }
        if (cpu_tier - gpu_tier).abs() <= 1 {
            tally.add("balance", BALANCED_BONUS, "money is split evenly between CPU and GPU");
        }
    }

    let confidence = if estimated > 0 { 50 } else { 100 };
    let summary = if estimated > 0 {
        format!("{estimated} part(s) priced from tier estimates")
    } else {
        "All parts have list prices".to_string()
    };
    tally.finish(confidence, VALUE_WEIGHT, summary)
}
