use crate::compat::rules::fit::same_socket;
use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{Evidence, Issue, IssueCategory, Severity};

/// Overclocked kits beyond this multiple of the official speed rarely train.
const RAM_SPEED_RISK_RATIO: f64 = 1.25;

pub(super) fn ecc_support(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(ram), Some(board), Some(cpu)) =
        (&ctx.build.ram, &ctx.build.motherboard, &ctx.build.cpu)
    else {
        return RuleOutcome::Skipped;
    };
    if !ram.specs.ecc {
        return RuleOutcome::Skipped;
    }

    let describe = |support: Option<bool>| match support {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    };
    let evidence = Evidence::new(
        format!(
            "board ECC: {}, CPU ECC: {}",
            describe(board.specs.supports_ecc),
            describe(cpu.specs.supports_ecc)
        ),
        "ECC needs both the CPU and the board",
    )
    .measure("board_ecc", describe(board.specs.supports_ecc))
    .measure("cpu_ecc", describe(cpu.specs.supports_ecc));
    let affected = [&ram.id, &board.id, &cpu.id];

    let issue = match (board.specs.supports_ecc, cpu.specs.supports_ecc) {
        (Some(false), _) | (_, Some(false)) => {
            let blocker = if board.specs.supports_ecc == Some(false) { &board.name } else { &cpu.name };
            Issue::new(
                "eccSupport",
                IssueCategory::Features,
                Severity::Critical,
                "ECC memory is not supported",
                format!("{} is ECC memory but {blocker} does not support ECC.", ram.name),
            )
            .with_fix("Choose a non-ECC memory kit")
            .with_fix("Choose a CPU and motherboard that both support ECC")
        }
        (Some(true), Some(true)) => Issue::new(
            "eccSupport",
            IssueCategory::Features,
            Severity::Info,
            "ECC memory is supported",
            format!("{}, {} and {} all support ECC.", ram.name, cpu.name, board.name),
        ),
        _ => Issue::new(
            "eccSupport",
            IssueCategory::Features,
            Severity::Warning,
            "ECC support is unconfirmed",
            format!(
                "{} is ECC memory but the CPU or board listing does not say whether ECC works.",
                ram.name
            ),
        )
        .with_fix("Check the motherboard's QVL and the CPU's ECC support before buying"),
    };
    RuleOutcome::Flagged(issue.affecting(affected).with_evidence(evidence))
}

pub(super) fn ram_speed_risk(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(ram), Some(cpu)) = (&ctx.build.ram, &ctx.build.cpu) else {
        return RuleOutcome::Skipped;
    };
    let Some(official) = cpu.specs.max_memory_speed_mhz else {
        return RuleOutcome::Skipped;
    };
    let limit = f64::from(official) * RAM_SPEED_RISK_RATIO;
    let speed = ram.specs.speed_mhz;
    if f64::from(speed) <= limit {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "ramSpeedRisk",
            IssueCategory::Features,
            Severity::Warning,
            "Memory may not run at its rated speed",
            format!(
                "{} is rated {speed} MT/s, well above {}'s official {official} MT/s; expect to tune or run it slower.",
                ram.name, cpu.name
            ),
        )
        .affecting([&ram.id, &cpu.id])
        .with_fix(format!("Choose a kit closer to {official} MT/s"))
        .with_evidence(
            Evidence::new(
                format!("{speed} > {limit:.0}"),
                format!("{official} x {RAM_SPEED_RISK_RATIO} = {limit:.0} MT/s"),
            )
            .measure("ram_speed_mhz", speed)
            .measure("cpu_max_memory_speed_mhz", official),
        ),
    )
}

pub(super) fn bios_update(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cpu), Some(board)) = (&ctx.build.cpu, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    if !same_socket(&cpu.specs.socket, &board.specs.socket) {
        return RuleOutcome::Skipped;
    }
    let (Some(cpu_year), Some(board_year)) = (cpu.specs.release_year, board.specs.release_year)
    else {
        return RuleOutcome::Skipped;
    };
    if cpu_year <= board_year {
        return RuleOutcome::Passed;
    }

    let evidence = Evidence::new(
        format!("CPU {cpu_year} > board {board_year}"),
        "boards need a BIOS update for CPUs released after them",
    )
    .measure("cpu_release_year", cpu_year)
    .measure("board_release_year", board_year)
    .measure("bios_flashback", board.specs.bios_flashback);

    let issue = if board.specs.bios_flashback {
        Issue::new(
            "biosUpdate",
            IssueCategory::Features,
            Severity::Info,
            "BIOS update may be needed",
            format!(
                "{} predates {}; it supports BIOS flashback, so the update can be done without a CPU.",
                board.name, cpu.name
            ),
        )
        .with_fix("Flash the latest BIOS with the flashback button before first boot")
    } else {
        Issue::new(
            "biosUpdate",
            IssueCategory::Features,
            Severity::Warning,
            "BIOS update likely required",
            format!(
                "{} predates {} and has no BIOS flashback; it may not POST until its firmware is updated.",
                board.name, cpu.name
            ),
        )
        .with_fix("Buy a board that ships with a compatible BIOS")
        .with_fix("Update the BIOS using an older supported CPU")
    };
    RuleOutcome::Flagged(issue.affecting([&cpu.id, &board.id]).with_evidence(evidence))
}
