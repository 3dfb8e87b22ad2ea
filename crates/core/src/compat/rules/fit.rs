use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{Evidence, Issue, IssueCategory, Severity};

pub(crate) fn same_socket(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

pub(super) fn socket_mismatch(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cpu), Some(board)) = (&ctx.build.cpu, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    if same_socket(&cpu.specs.socket, &board.specs.socket) {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "socketMismatch",
            IssueCategory::Fit,
            Severity::Critical,
            "CPU socket does not match motherboard",
            format!(
                "{} uses socket {} but {} provides socket {}.",
                cpu.name, cpu.specs.socket, board.name, board.specs.socket
            ),
        )
        .affecting([&cpu.id, &board.id])
        .with_fix(format!("Choose a motherboard with socket {}", cpu.specs.socket))
        .with_fix(format!("Choose a CPU for socket {}", board.specs.socket))
        .with_evidence(
            Evidence::new(
                format!("{} != {}", cpu.specs.socket, board.specs.socket),
                "sockets must match exactly",
            )
            .measure("cpu_socket", &cpu.specs.socket)
            .measure("board_socket", &board.specs.socket),
        ),
    )
}

pub(super) fn ram_type_mismatch(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(ram), Some(board)) = (&ctx.build.ram, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    if ram.specs.memory_type == board.specs.memory_type {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "ramTypeMismatch",
            IssueCategory::Fit,
            Severity::Critical,
            "Memory generation does not match motherboard",
            format!(
                "{} is {} but {} only accepts {} modules; the slots are keyed differently.",
                ram.name, ram.specs.memory_type, board.name, board.specs.memory_type
            ),
        )
        .affecting([&ram.id, &board.id])
        .with_fix(format!("Choose a {} memory kit", board.specs.memory_type))
        .with_evidence(
            Evidence::new(
                format!("{} != {}", ram.specs.memory_type, board.specs.memory_type),
                "memory generation must match the board slots",
            )
            .measure("ram_type", ram.specs.memory_type)
            .measure("board_memory_type", board.specs.memory_type),
        ),
    )
}

pub(super) fn cpu_memory_unsupported(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cpu), Some(ram)) = (&ctx.build.cpu, &ctx.build.ram) else {
        return RuleOutcome::Skipped;
    };
    if cpu.specs.memory_types.is_empty() {
        return RuleOutcome::Skipped;
    }
    if cpu.specs.memory_types.contains(&ram.specs.memory_type) {
        return RuleOutcome::Passed;
    }
    let supported = cpu
        .specs
        .memory_types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    RuleOutcome::Flagged(
        Issue::new(
            "cpuMemoryUnsupported",
            IssueCategory::Fit,
            Severity::Critical,
            "CPU memory controller does not support this RAM",
            format!("{} supports {} but {} is {}.", cpu.name, supported, ram.name, ram.specs.memory_type),
        )
        .affecting([&cpu.id, &ram.id])
        .with_fix(format!("Choose a {supported} memory kit"))
        .with_evidence(
            Evidence::new(
                format!("{} not in [{}]", ram.specs.memory_type, supported),
                "RAM generation must be one the CPU supports",
            )
            .measure("cpu_memory_types", &supported)
            .measure("ram_type", ram.specs.memory_type),
        ),
    )
}

pub(super) fn form_factor_mismatch(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(board), Some(case)) = (&ctx.build.motherboard, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    if case.specs.form_factor.contains(board.specs.form_factor) {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "formFactorMismatch",
            IssueCategory::Fit,
            Severity::Critical,
            "Motherboard is too large for the case",
            format!(
                "{} is {} but {} only fits boards up to {}.",
                board.name, board.specs.form_factor, case.name, case.specs.form_factor
            ),
        )
        .affecting([&board.id, &case.id])
        .with_fix(format!("Choose a case that supports {}", board.specs.form_factor))
        .with_fix(format!("Choose a {} or smaller motherboard", case.specs.form_factor))
        .with_evidence(
            Evidence::new(
                format!("{} > {}", board.specs.form_factor, case.specs.form_factor),
                "E-ATX > ATX > Micro-ATX > Mini-ITX",
            )
            .measure("board_form_factor", board.specs.form_factor)
            .measure("case_form_factor", case.specs.form_factor),
        ),
    )
}

pub(super) fn cooler_socket_unsupported(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cooler), Some(cpu)) = (&ctx.build.cooler, &ctx.build.cpu) else {
        return RuleOutcome::Skipped;
    };
    if cooler.specs.sockets.is_empty() {
        return RuleOutcome::Skipped;
    }
    if cooler.specs.sockets.iter().any(|s| same_socket(s, &cpu.specs.socket)) {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "coolerSocketUnsupported",
            IssueCategory::Fit,
            Severity::Critical,
            "Cooler has no mounting kit for this socket",
            format!(
                "{} lists sockets {} and does not include {}.",
                cooler.name,
                cooler.specs.sockets.join(", "),
                cpu.specs.socket
            ),
        )
        .affecting([&cooler.id, &cpu.id])
        .with_fix(format!("Choose a cooler that supports {}", cpu.specs.socket))
        .with_fix("Check whether the vendor offers a separate mounting kit"),
    )
}

pub(super) fn ram_modules_exceeded(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(ram), Some(board)) = (&ctx.build.ram, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    if ram.specs.modules > board.specs.memory_slots {
        return RuleOutcome::Flagged(
            Issue::new(
                "ramModulesExceeded",
                IssueCategory::Fit,
                Severity::Critical,
                "Not enough memory slots",
                format!(
                    "{} has {} modules but {} has {} slots.",
                    ram.name, ram.specs.modules, board.name, board.specs.memory_slots
                ),
            )
            .affecting([&ram.id, &board.id])
            .with_fix(format!(
                "Choose a kit with at most {} modules",
                board.specs.memory_slots
            ))
            .with_evidence(
                Evidence::new(
                    format!("{} > {}", ram.specs.modules, board.specs.memory_slots),
                    "modules <= slots",
                )
                .measure("ram_modules", ram.specs.modules)
                .measure("board_slots", board.specs.memory_slots),
            ),
        );
    }
    match board.specs.max_memory_gb {
        Some(max) if ram.specs.capacity_gb > max => RuleOutcome::Flagged(
            Issue::new(
                "ramModulesExceeded",
                IssueCategory::Fit,
                Severity::Critical,
                "Memory kit exceeds motherboard capacity",
                format!(
                    "{} totals {} GB but {} supports at most {} GB.",
                    ram.name, ram.specs.capacity_gb, board.name, max
                ),
            )
            .affecting([&ram.id, &board.id])
            .with_fix(format!("Choose a kit of {max} GB or less"))
            .with_evidence(
                Evidence::new(format!("{} GB > {} GB", ram.specs.capacity_gb, max), "capacity <= board max")
                    .measure("ram_capacity_gb", ram.specs.capacity_gb)
                    .measure("board_max_gb", max),
            ),
        ),
        _ => RuleOutcome::Passed,
    }
}

pub(super) fn no_display_output(ctx: &RuleContext<'_>) -> RuleOutcome {
    let Some(cpu) = &ctx.build.cpu else {
        return RuleOutcome::Skipped;
    };
    if ctx.build.gpu.is_some() || cpu.specs.integrated_graphics {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "noDisplayOutput",
            IssueCategory::Fit,
            Severity::Warning,
            "No graphics output",
            format!("{} has no integrated graphics and no graphics card is selected.", cpu.name),
        )
        .affecting([&cpu.id])
        .with_fix("Add a graphics card")
        .with_fix("Choose a CPU with integrated graphics"),
    )
}
