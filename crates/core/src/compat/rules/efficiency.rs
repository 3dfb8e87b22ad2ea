//! Value and balance advice. These rules never block a build.

use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{ChipsetClass, Evidence, Issue, IssueCategory, Severity, StorageKind};
use crate::registry::PresetFocus;

const TIER_GAP: u8 = 3;
const HIGH_END_GPU_TIER: u8 = 8;
const PSU_EXCESS_RATIO: f64 = 2.0;
const LOW_TIER: u8 = 4;
const STORAGE_EXCESS_GB: u32 = 4000;

pub(super) fn tier_imbalance(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cpu), Some(gpu)) = (&ctx.build.cpu, &ctx.build.gpu) else {
        return RuleOutcome::Skipped;
    };
    let (cpu_tier, gpu_tier) = (cpu.specs.tier, gpu.specs.tier);
    let evidence = Evidence::new(
        format!("CPU tier {cpu_tier} vs GPU tier {gpu_tier}"),
        format!("gap of {TIER_GAP} or more tiers"),
    )
    .measure("cpu_tier", cpu_tier)
    .measure("gpu_tier", gpu_tier);

    if ctx.focus.is_gaming() && cpu_tier >= gpu_tier.saturating_add(TIER_GAP) {
        return RuleOutcome::Flagged(
            Issue::new(
                "tier-imbalance",
                IssueCategory::Efficiency,
                Severity::Info,
                "CPU is overkill for this GPU",
                format!(
                    "{} (tier {cpu_tier}) is far ahead of {} (tier {gpu_tier}); games will be GPU-bound.",
                    cpu.name, gpu.name
                ),
            )
            .affecting([&cpu.id, &gpu.id])
            .with_fix("Move budget from the CPU to the graphics card")
            .with_evidence(evidence),
        );
    }
    if gpu_tier >= cpu_tier.saturating_add(TIER_GAP) && gpu_tier >= HIGH_END_GPU_TIER {
        return RuleOutcome::Flagged(
            Issue::new(
                "tier-imbalance",
                IssueCategory::Efficiency,
                Severity::Warning,
                "CPU may bottleneck this GPU",
                format!(
                    "{} (tier {gpu_tier}) is a high-end card paired with {} (tier {cpu_tier}).",
                    gpu.name, cpu.name
                ),
            )
            .affecting([&cpu.id, &gpu.id])
            .with_fix("Choose a faster CPU")
            .with_evidence(evidence),
        );
    }
    RuleOutcome::Passed
}

pub(super) fn psu_excessive(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(psu) = &ctx.build.psu else {
        return RuleOutcome::Skipped;
    };
    let draw = ctx.power.total_w;
    if draw == 0 {
        return RuleOutcome::Skipped;
    }
    let wattage = psu.specs.wattage_w;
    let ratio = ctx.power.headroom_ratio(wattage);
    if ratio <= PSU_EXCESS_RATIO {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "psu-excessive",
            IssueCategory::Efficiency,
            Severity::Info,
            "Power supply is much larger than needed",
            format!(
                "{} supplies {wattage} W for an estimated {draw} W load ({ratio:.1}x).",
                psu.name
            ),
        )
        .affecting([&psu.id])
        .with_fix(format!("A {} W unit would be enough", ctx.power.recommended_psu_w()))
        .with_evidence(
            Evidence::new(
                format!("{wattage} W > {PSU_EXCESS_RATIO} x {draw} W"),
                format!("{wattage} / {draw} = {ratio:.2}"),
            )
            .measure("psu_wattage_w", wattage)
            .measure("estimated_load_w", draw),
        ),
    )
}

pub(super) fn ram_speed_excess(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(ram) = &ctx.build.ram else {
        return RuleOutcome::Skipped;
    };
    let speed = ram.specs.speed_mhz;

    if let Some(cpu) = &ctx.build.cpu {
        if let Some(official) = cpu.specs.max_memory_speed_mhz {
            if speed > official {
                return RuleOutcome::Flagged(
                    Issue::new(
                        "ram-speed-excess",
                        IssueCategory::Efficiency,
                        Severity::Info,
                        "Memory is faster than the CPU officially supports",
                        format!(
                            "{} is rated {speed} MT/s; {} is specified for {official} MT/s, so the extra speed needs manual tuning.",
                            ram.name, cpu.name
                        ),
                    )
                    .affecting([&ram.id, &cpu.id])
                    .with_evidence(
                        Evidence::new(format!("{speed} > {official}"), "RAM speed vs CPU maximum")
                            .measure("ram_speed_mhz", speed)
                            .measure("cpu_max_memory_speed_mhz", official),
                    ),
                );
            }
        }
    }

    let sweet_spot = ram.specs.memory_type.gaming_sweet_spot_mhz();
    if ctx.focus.is_gaming() && speed > sweet_spot {
        return RuleOutcome::Flagged(
            Issue::new(
                "ram-speed-excess",
                IssueCategory::Efficiency,
                Severity::Info,
                "Memory is past the gaming sweet spot",
                format!(
                    "{} {} kits above {sweet_spot} MT/s cost more for little in-game gain.",
                    ram.specs.memory_type, ram.name
                ),
            )
            .affecting([&ram.id])
            .with_fix(format!("A {} {sweet_spot} MT/s kit gives nearly the same results", ram.specs.memory_type))
            .with_evidence(
                Evidence::new(format!("{speed} > {sweet_spot}"), "RAM speed vs gaming sweet spot")
                    .measure("ram_speed_mhz", speed)
                    .measure("sweet_spot_mhz", sweet_spot),
            ),
        );
    }
    RuleOutcome::Passed
}

pub(super) fn premium_chipset(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(board), Some(cpu)) = (&ctx.build.motherboard, &ctx.build.cpu) else {
        return RuleOutcome::Skipped;
    };
    if ChipsetClass::classify(&board.specs.chipset) != ChipsetClass::Premium
        || cpu.specs.tier > LOW_TIER
    {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "premium-chipset",
            IssueCategory::Efficiency,
            Severity::Info,
            "Premium chipset with an entry-level CPU",
            format!(
                "{} uses the {} chipset; {} (tier {}) will not use its overclocking or extra lanes.",
                board.name, board.specs.chipset, cpu.name, cpu.specs.tier
            ),
        )
        .affecting([&board.id, &cpu.id])
        .with_fix("A mainstream chipset board would save money")
        .with_evidence(
            Evidence::new(
                format!("{} is premium, CPU tier {} <= {LOW_TIER}", board.specs.chipset, cpu.specs.tier),
                "chipset class vs CPU tier",
            )
            .measure("chipset", &board.specs.chipset)
            .measure("cpu_tier", cpu.specs.tier),
        ),
    )
}

pub(super) fn storage_excess(ctx: &RuleContext<'_>) -> RuleOutcome {
    if ctx.build.storage.is_empty() {
        return RuleOutcome::Skipped;
    }
    let low_tier_parts = match (&ctx.build.cpu, &ctx.build.gpu) {
        (Some(cpu), Some(gpu)) => cpu.specs.tier <= LOW_TIER && gpu.specs.tier <= LOW_TIER,
        _ => false,
    };
    if ctx.focus != PresetFocus::Budget && !low_tier_parts {
        return RuleOutcome::Passed;
    }
    let total = ctx.build.total_storage_gb();
    if total <= STORAGE_EXCESS_GB {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "storage-excess",
            IssueCategory::Efficiency,
            Severity::Info,
            "Large storage budget for a budget build",
            format!("{total} GB of storage is a lot for this tier; the money may be better spent elsewhere."),
        )
        .affecting(ctx.build.storage.iter().map(|d| d.id.clone()))
        .with_fix("Start with a smaller drive and add capacity later")
        .with_evidence(
            Evidence::new(format!("{total} GB > {STORAGE_EXCESS_GB} GB"), "total drive capacity")
                .measure("total_storage_gb", total),
        ),
    )
}

pub(super) fn pcie5_ssd_gaming(ctx: &RuleContext<'_>) -> RuleOutcome {
    if !ctx.focus.is_gaming() {
        return RuleOutcome::Skipped;
    }
    let gen5: Vec<_> = ctx
        .build
        .storage
        .iter()
        .filter(|d| d.specs.kind == StorageKind::Nvme && d.specs.pcie_gen.is_some_and(|g| g >= 5))
        .collect();
    if ctx.build.nvme_count() == 0 {
        return RuleOutcome::Skipped;
    }
    if gen5.is_empty() {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "pcie5-ssd-gaming",
            IssueCategory::Efficiency,
            Severity::Info,
            "PCIe 5.0 SSD brings little to games",
            format!(
                "{} is a PCIe 5.0 drive; load times in games are nearly identical on PCIe 4.0.",
                gen5.iter().map(|d| d.name.as_str()).collect::<Vec<_>>().join(", ")
            ),
        )
        .affecting(gen5.iter().map(|d| d.id.clone()))
        .with_fix("A PCIe 4.0 NVMe drive costs less and runs cooler"),
    )
}
