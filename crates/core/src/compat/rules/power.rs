use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{AtxStandard, Evidence, Issue, IssueCategory, Severity};
use crate::power::{parse_connector_demand, MIN_HEADROOM_RATIO};

/// GPUs above this transient peak should not be fed through an adapter.
const ADAPTER_PEAK_LIMIT_W: u32 = 450;

/// 8-pin plugs an adapter consumes per 16-pin input.
const ADAPTER_8PIN_PER_16PIN: u32 = 2;

pub(super) fn psu_wattage(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(psu) = &ctx.build.psu else {
        return RuleOutcome::Skipped;
    };
    if ctx.build.cpu.is_none() && ctx.build.gpu.is_none() {
        return RuleOutcome::Skipped;
    }

    let draw = ctx.power.total_w;
    let wattage = psu.specs.wattage_w;
    let ratio = ctx.power.headroom_ratio(wattage);
    let recommended = ctx.power.recommended_psu_w();
    let mut affected = vec![psu.id.clone()];
    affected.extend(ctx.build.cpu.iter().map(|c| c.id.clone()));
    affected.extend(ctx.build.gpu.iter().map(|g| g.id.clone()));
    let evidence = Evidence::new(
        format!("{wattage} W supply vs {draw} W estimated load"),
        format!(
            "cpu {} + gpu {} + platform {} + memory {} + storage {} + cooling {} = {draw} W; headroom {:.2}x",
            ctx.power.cpu_w,
            ctx.power.gpu_w,
            ctx.power.platform_w,
            ctx.power.memory_w,
            ctx.power.storage_w,
            ctx.power.cooling_w,
            ratio
        ),
    )
    .measure("psu_wattage_w", wattage)
    .measure("estimated_load_w", draw)
    .measure("recommended_w", recommended);

    if wattage < draw {
        return RuleOutcome::Flagged(
            Issue::new(
                "psuWattage",
                IssueCategory::Power,
                Severity::Critical,
                "Power supply cannot carry the estimated load",
                format!("{} supplies {wattage} W but the build is estimated to draw {draw} W.", psu.name),
            )
            .affecting(affected)
            .with_fix(format!("Choose a power supply of at least {recommended} W"))
            .with_evidence(evidence),
        );
    }
    if ratio < MIN_HEADROOM_RATIO {
        return RuleOutcome::Flagged(
            Issue::new(
                "psuWattage",
                IssueCategory::Power,
                Severity::Warning,
                "Power supply headroom is low",
                format!(
                    "{} leaves only {:.0}% headroom over the estimated {draw} W load; 25% is recommended.",
                    psu.name,
                    (ratio - 1.0) * 100.0
                ),
            )
            .affecting(affected)
            .with_fix(format!("Choose a power supply of at least {recommended} W"))
            .with_evidence(evidence),
        );
    }
    RuleOutcome::Passed
}

pub(super) fn gpu_power_connectors(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(gpu), Some(psu)) = (&ctx.build.gpu, &ctx.build.psu) else {
        return RuleOutcome::Skipped;
    };
    let Some(inventory) = ctx.psu_connectors() else {
        return RuleOutcome::Skipped;
    };
    let demand = parse_connector_demand(&gpu.specs.power_connectors);
    if demand.is_empty() {
        return RuleOutcome::Skipped;
    }

    let evidence = || {
        Evidence::new(
            format!(
                "GPU needs {}x16 / {}x8 / {}x6; PSU has {}x16 / {}x8 / {}x6",
                demand.pin16,
                demand.pin8,
                demand.pin6,
                inventory.pcie_16pin,
                inventory.pcie_8pin,
                inventory.pcie_6pin
            ),
            format!("adapter uses {ADAPTER_8PIN_PER_16PIN}x 8-pin per 16-pin"),
        )
        .measure("gpu_16pin", demand.pin16)
        .measure("gpu_8pin", demand.pin8)
        .measure("gpu_6pin", demand.pin6)
        .measure("psu_16pin", inventory.pcie_16pin)
        .measure("psu_8pin", inventory.pcie_8pin)
        .measure("psu_6pin", inventory.pcie_6pin)
    };
    let missing_plugs = |detail: String| {
        RuleOutcome::Flagged(
            Issue::new(
                "gpuPowerConnectors",
                IssueCategory::Power,
                Severity::Critical,
                "Power supply lacks the GPU power connectors",
                format!("{} cannot power {}: {detail}.", psu.name, gpu.name),
            )
            .affecting([&gpu.id, &psu.id])
            .with_fix("Choose a power supply with enough PCIe power connectors")
            .with_evidence(evidence()),
        )
    };

    let native16 = inventory.pcie_16pin.min(demand.pin16);
    let adapted16 = demand.pin16 - native16;
    let eight_for_adapters = adapted16.saturating_mul(ADAPTER_8PIN_PER_16PIN);

    let eight_needed = demand.pin8.saturating_add(eight_for_adapters);
    if inventory.pcie_8pin < eight_needed {
        return missing_plugs(format!(
            "{} x 8-pin needed, {} available",
            eight_needed, inventory.pcie_8pin
        ));
    }
    let spare_eight = inventory.pcie_8pin - eight_needed;
    let six_available = inventory.pcie_6pin.saturating_add(spare_eight);
    if six_available < demand.pin6 {
        return missing_plugs(format!(
            "{} x 6-pin needed, {} available",
            demand.pin6, six_available
        ));
    }

    if adapted16 == 0 {
        return RuleOutcome::Passed;
    }

    let peak = gpu.specs.peak_power_w();
    let issue = if peak > ADAPTER_PEAK_LIMIT_W {
        Issue::new(
            "gpuPowerConnectors",
            IssueCategory::Power,
            Severity::Warning,
            "16-pin adapter at high transient load",
            format!(
                "{} peaks at {peak} W; feeding it through an 8-pin adapter risks connector overheating during transients.",
                gpu.name
            ),
        )
        .with_fix("Choose a power supply with a native 16-pin (12V-2x6) connector")
    } else if psu.specs.atx_standard == Some(AtxStandard::Atx2) {
        Issue::new(
            "gpuPowerConnectors",
            IssueCategory::Power,
            Severity::Info,
            "GPU will use the bundled 16-pin adapter",
            format!(
                "{} is an ATX 2.x unit without a 16-pin connector; {} will run from its 8-pin adapter.",
                psu.name, gpu.name
            ),
        )
    } else {
        Issue::new(
            "gpuPowerConnectors",
            IssueCategory::Power,
            Severity::Warning,
            "No native 16-pin connector",
            format!(
                "{} has no native 16-pin connector; {} will need an 8-pin adapter.",
                psu.name, gpu.name
            ),
        )
        .with_fix("Prefer a power supply with a native 16-pin connector")
    };
    RuleOutcome::Flagged(issue.affecting([&gpu.id, &psu.id]).with_evidence(evidence()))
}
