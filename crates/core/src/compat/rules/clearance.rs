use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{CoolerKind, Evidence, Issue, IssueCategory, Severity, StorageKind};

pub(super) fn gpu_too_long(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(gpu), Some(case)) = (&ctx.build.gpu, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    let (Some(length), Some(max)) = (gpu.specs.length_mm, case.specs.max_gpu_length_mm) else {
        return RuleOutcome::Skipped;
    };
    if length <= max {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "gpuTooLong",
            IssueCategory::Clearance,
            Severity::Critical,
            "Graphics card is too long for the case",
            format!("{} is {length} mm long but {} allows {max} mm.", gpu.name, case.name),
        )
        .affecting([&gpu.id, &case.id])
        .with_fix(format!("Choose a case with at least {length} mm of GPU clearance"))
        .with_fix(format!("Choose a graphics card no longer than {max} mm"))
        .with_evidence(
            Evidence::new(format!("{length} mm > {max} mm"), format!("overhang = {} mm", length - max))
                .measure("gpu_length_mm", length)
                .measure("case_max_gpu_length_mm", max),
        ),
    )
}

pub(super) fn gpu_too_thick(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(gpu), Some(case)) = (&ctx.build.gpu, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    let (Some(thickness), Some(max)) = (gpu.specs.thickness_mm, case.specs.max_gpu_thickness_mm)
    else {
        return RuleOutcome::Skipped;
    };
    if thickness <= max {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "gpuTooThick",
            IssueCategory::Clearance,
            Severity::Critical,
            "Graphics card is too thick for the case",
            format!("{} is {thickness} mm thick but {} allows {max} mm.", gpu.name, case.name),
        )
        .affecting([&gpu.id, &case.id])
        .with_fix("Choose a slimmer graphics card")
        .with_fix("Choose a case with more expansion slot clearance")
        .with_evidence(
            Evidence::new(format!("{thickness} mm > {max} mm"), format!("excess = {} mm", thickness - max))
                .measure("gpu_thickness_mm", thickness)
                .measure("case_max_gpu_thickness_mm", max),
        ),
    )
}

pub(super) fn cooler_too_tall(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cooler), Some(case)) = (&ctx.build.cooler, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    if cooler.specs.kind != CoolerKind::Air {
        return RuleOutcome::Skipped;
    }
    let (Some(height), Some(max)) = (cooler.specs.height_mm, case.specs.max_cooler_height_mm) else {
        return RuleOutcome::Skipped;
    };
    if height <= max {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "coolerTooTall",
            IssueCategory::Clearance,
            Severity::Critical,
            "CPU cooler is too tall for the case",
            format!("{} is {height} mm tall but {} allows {max} mm.", cooler.name, case.name),
        )
        .affecting([&cooler.id, &case.id])
        .with_fix(format!("Choose a cooler no taller than {max} mm"))
        .with_fix("Switch to an AIO liquid cooler")
        .with_evidence(
            Evidence::new(format!("{height} mm > {max} mm"), format!("excess = {} mm", height - max))
                .measure("cooler_height_mm", height)
                .measure("case_max_cooler_height_mm", max),
        ),
    )
}

pub(super) fn radiator_incompatible(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cooler), Some(case)) = (&ctx.build.cooler, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    if cooler.specs.kind != CoolerKind::Aio {
        return RuleOutcome::Skipped;
    }

    let size_check = cooler.specs.radiator_mm.zip(case.specs.radiator_support.as_ref());
    let thickness_check =
        cooler.specs.radiator_thickness_mm.zip(case.specs.max_radiator_thickness_mm);
    if size_check.is_none() && thickness_check.is_none() {
        return RuleOutcome::Skipped;
    }

    if let Some((size, supported)) = size_check {
        if !supported.contains(&size) {
            let listed = supported.iter().map(|s| format!("{s} mm")).collect::<Vec<_>>().join(", ");
            return RuleOutcome::Flagged(
                Issue::new(
                    "radiatorIncompatible",
                    IssueCategory::Clearance,
                    Severity::Critical,
                    "Case cannot mount this radiator size",
                    format!(
                        "{} uses a {size} mm radiator; {} supports {}.",
                        cooler.name,
                        case.name,
                        if listed.is_empty() { "no radiators".to_string() } else { listed.clone() }
                    ),
                )
                .affecting([&cooler.id, &case.id])
                .with_fix("Choose an AIO with a radiator size the case supports")
                .with_fix("Choose an air cooler")
                .with_evidence(
                    Evidence::new(format!("{size} mm not in [{listed}]"), "radiator size must be listed")
                        .measure("radiator_mm", size),
                ),
            );
        }
    }

    if let Some((thickness, max)) = thickness_check {
        if thickness > max {
            return RuleOutcome::Flagged(
                Issue::new(
                    "radiatorIncompatible",
                    IssueCategory::Clearance,
                    Severity::Critical,
                    "Radiator is too thick for the case",
                    format!(
                        "{} is {thickness} mm thick with fans but {} allows {max} mm.",
                        cooler.name, case.name
                    ),
                )
                .affecting([&cooler.id, &case.id])
                .with_fix("Choose a slimmer radiator")
                .with_evidence(
                    Evidence::new(format!("{thickness} mm > {max} mm"), format!("excess = {} mm", thickness - max))
                        .measure("radiator_thickness_mm", thickness)
                        .measure("case_max_radiator_thickness_mm", max),
                ),
            );
        }
    }

    RuleOutcome::Passed
}

pub(super) fn psu_too_long(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(psu), Some(case)) = (&ctx.build.psu, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    let (Some(length), Some(max)) = (ctx.psu_length_mm(), case.specs.max_psu_length_mm) else {
        return RuleOutcome::Skipped;
    };
    if length <= max {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "psuTooLong",
            IssueCategory::Clearance,
            Severity::Critical,
            "Power supply is too long for the case",
            format!("{} is {length} mm deep but {} allows {max} mm.", psu.name, case.name),
        )
        .affecting([&psu.id, &case.id])
        .with_fix(format!("Choose a power supply no deeper than {max} mm"))
        .with_fix("Consider an SFX unit")
        .with_evidence(
            Evidence::new(format!("{length} mm > {max} mm"), format!("excess = {} mm", length - max))
                .measure("psu_length_mm", length)
                .measure("case_max_psu_length_mm", max),
        ),
    )
}

/// 3.5" drives in a shared cage eat into GPU and PSU clearance.
pub(super) fn drive_bay_clearance(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(case) = &ctx.build.case else {
        return RuleOutcome::Skipped;
    };
    let drives = ctx.build.hdd_3_5_count();
    let Some(loss_per_drive) = case.specs.drive_bay_clearance_loss_mm else {
        return RuleOutcome::Skipped;
    };
    if drives == 0 {
        return RuleOutcome::Skipped;
    }
    let loss = loss_per_drive.saturating_mul(drives);

    let mut conflicts = Vec::new();
    let mut affected = vec![case.id.clone()];
    let mut evidence = Evidence::new(
        format!("{drives} x 3.5\" drive(s) reduce clearance by {loss} mm"),
        format!("{drives} x {loss_per_drive} mm = {loss} mm"),
    )
    .measure("hdd_3_5_count", drives)
    .measure("clearance_loss_mm", loss);

    if let (Some(gpu), Some(max)) = (&ctx.build.gpu, case.specs.max_gpu_length_mm) {
        if let Some(length) = gpu.specs.length_mm {
            let remaining = max.saturating_sub(loss);
            evidence = evidence.measure("gpu_clearance_remaining_mm", remaining);
            if length > remaining {
                conflicts.push(format!("{} needs {length} mm, {remaining} mm remain", gpu.name));
                affected.push(gpu.id.clone());
            }
        }
    }
    if let (Some(psu), Some(max)) = (&ctx.build.psu, case.specs.max_psu_length_mm) {
        if let Some(length) = ctx.psu_length_mm() {
            let remaining = max.saturating_sub(loss);
            evidence = evidence.measure("psu_clearance_remaining_mm", remaining);
            if length > remaining {
                conflicts.push(format!("{} needs {length} mm, {remaining} mm remain", psu.name));
                affected.push(psu.id.clone());
            }
        }
    }
    affected.extend(
        ctx.build
            .storage
            .iter()
            .filter(|d| d.specs.kind == StorageKind::Hdd35)
            .map(|d| d.id.clone()),
    );

    let issue = if conflicts.is_empty() {
        Issue::new(
            "driveBayClearance",
            IssueCategory::Clearance,
            Severity::Info,
            "Drive cage reduces internal clearance",
            format!(
                "Installing {drives} 3.5\" drive(s) in {} costs {loss} mm of clearance; selected parts still fit.",
                case.name
            ),
        )
    } else {
        Issue::new(
            "driveBayClearance",
            IssueCategory::Clearance,
            Severity::Critical,
            "Drive cage blocks a component",
            format!(
                "With {drives} 3.5\" drive(s) installed in {}: {}.",
                case.name,
                conflicts.join("; ")
            ),
        )
        .with_fix("Move bulk storage to NVMe or 2.5\" drives")
        .with_fix("Remove the drive cage if the case allows it")
    };
    RuleOutcome::Flagged(issue.affecting(affected).with_evidence(evidence))
}
