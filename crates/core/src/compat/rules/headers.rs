use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{Evidence, Issue, IssueCategory, RgbProtocol, Severity};

pub(super) fn fan_headers(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(board), Some(case)) = (&ctx.build.motherboard, &ctx.build.case) else {
        return RuleOutcome::Skipped;
    };
    // The CPU_FAN header is taken even by a stock cooler.
    let cooler_fans = ctx.build.cooler.as_ref().map_or(0, |c| c.specs.fan_count).max(1);
    let needed = case.specs.fan_count.saturating_add(cooler_fans);
    let available = board.specs.fan_headers;
    if needed <= available {
        return RuleOutcome::Passed;
    }

    let mut affected = vec![board.id.clone(), case.id.clone()];
    affected.extend(ctx.build.cooler.iter().map(|c| c.id.clone()));
    RuleOutcome::Flagged(
        Issue::new(
            "fanHeaders",
            IssueCategory::Headers,
            Severity::Warning,
            "Not enough fan headers",
            format!(
                "{needed} fans need headers but {} has {available}; some fans will need a splitter or hub.",
                board.name
            ),
        )
        .affecting(affected)
        .with_fix("Use a PWM fan splitter or a powered fan hub")
        .with_fix("Choose a motherboard with more fan headers")
        .with_evidence(
            Evidence::new(
                format!("{needed} > {available}"),
                format!("{} case + {cooler_fans} cooler = {needed}", case.specs.fan_count),
            )
            .measure("fans", needed)
            .measure("fan_headers", available),
        ),
    )
}

pub(super) fn rgb_headers(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cooler), Some(board)) = (&ctx.build.cooler, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    let (available, label) = match cooler.specs.rgb {
        RgbProtocol::None => return RuleOutcome::Skipped,
        RgbProtocol::Rgb12v => (board.specs.rgb_12v_headers, "12V RGB"),
        RgbProtocol::Argb5v => (board.specs.argb_5v_headers, "5V ARGB"),
    };
    if available > 0 {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "rgbHeaders",
            IssueCategory::Headers,
            Severity::Warning,
            format!("No {label} header"),
            format!(
                "{} lighting uses {label} but {} has no matching header; the plugs are not interchangeable.",
                cooler.name, board.name
            ),
        )
        .affecting([&cooler.id, &board.id])
        .with_fix(format!("Use a standalone {label} controller"))
        .with_fix(format!("Choose a motherboard with a {label} header"))
        .with_evidence(
            Evidence::new(format!("0 {label} headers"), "lighting needs one matching header")
                .measure("protocol", label),
        ),
    )
}

pub(super) fn usb_c_header(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(case), Some(board)) = (&ctx.build.case, &ctx.build.motherboard) else {
        return RuleOutcome::Skipped;
    };
    if !case.specs.front_usb_c {
        return RuleOutcome::Skipped;
    }
    if board.specs.usb_c_header {
        return RuleOutcome::Passed;
    }
    RuleOutcome::Flagged(
        Issue::new(
            "usbCHeader",
            IssueCategory::Headers,
            Severity::Warning,
            "Front USB-C port will not work",
            format!(
                "{} has a front USB-C port but {} has no internal Type-E header.",
                case.name, board.name
            ),
        )
        .affecting([&case.id, &board.id])
        .with_fix("Choose a motherboard with a USB 3.2 Type-E header"),
    )
}
