use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{Evidence, Issue, IssueCategory, Severity, StorageKind};

pub(super) fn nvme_slots_exceeded(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(board) = &ctx.build.motherboard else {
        return RuleOutcome::Skipped;
    };
    let drives = ctx.build.nvme_count();
    if drives == 0 {
        return RuleOutcome::Skipped;
    }
    let slots = board.specs.m2_slots;
    if drives <= slots {
        return RuleOutcome::Passed;
    }
    let nvme_ids = ctx
        .build
        .storage
        .iter()
        .filter(|d| d.specs.kind == StorageKind::Nvme)
        .map(|d| d.id.clone());
    RuleOutcome::Flagged(
        Issue::new(
            "nvmeSlotsExceeded",
            IssueCategory::Storage,
            Severity::Critical,
            "More NVMe drives than M.2 slots",
            format!("The build has {drives} NVMe drive(s) but {} has {slots} M.2 slot(s).", board.name),
        )
        .affecting(std::iter::once(board.id.clone()).chain(nvme_ids))
        .with_fix("Choose a motherboard with more M.2 slots")
        .with_fix("Use a PCIe M.2 adapter card or move a drive to SATA")
        .with_evidence(
            Evidence::new(format!("{drives} > {slots}"), "NVMe drives <= M.2 slots")
                .measure("nvme_drives", drives)
                .measure("m2_slots", slots),
        ),
    )
}

pub(super) fn sata_ports_exceeded(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(board) = &ctx.build.motherboard else {
        return RuleOutcome::Skipped;
    };
    let drives = ctx.build.sata_drive_count();
    if drives == 0 {
        return RuleOutcome::Skipped;
    }
    let ports = board.specs.sata_ports;
    if drives <= ports {
        return RuleOutcome::Passed;
    }
    let sata_ids = ctx
        .build
        .storage
        .iter()
        .filter(|d| d.specs.kind.uses_sata())
        .map(|d| d.id.clone());
    RuleOutcome::Flagged(
        Issue::new(
            "sataPortsExceeded",
            IssueCategory::Storage,
            Severity::Critical,
            "More SATA drives than SATA ports",
            format!("The build has {drives} SATA drive(s) but {} has {ports} SATA port(s).", board.name),
        )
        .affecting(std::iter::once(board.id.clone()).chain(sata_ids))
        .with_fix("Choose a motherboard with more SATA ports")
        .with_fix("Add a SATA expansion card")
        .with_evidence(
            Evidence::new(format!("{drives} > {ports}"), "SATA drives <= SATA ports")
                .measure("sata_drives", drives)
                .measure("sata_ports", ports),
        ),
    )
}
