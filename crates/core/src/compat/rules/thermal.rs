use crate::compat::{RuleContext, RuleOutcome};
use crate::model::{Evidence, Issue, IssueCategory, Severity};

pub(super) fn cooling_capacity(ctx: &RuleContext<'_>) -> RuleOutcome {
    let (Some(cooler), Some(cpu)) = (&ctx.build.cooler, &ctx.build.cpu) else {
        return RuleOutcome::Skipped;
    };
    let Some(rating) = cooler.specs.tdp_rating_w else {
        return RuleOutcome::Skipped;
    };
    let tdp = cpu.specs.tdp_w;
    if tdp == 0 {
        return RuleOutcome::Skipped;
    }

    let headroom = (f64::from(rating) - f64::from(tdp)) / f64::from(tdp) * 100.0;
    let (severity, grade, title) = if headroom >= 50.0 {
        (Severity::Info, "excellent", "Cooling headroom is excellent")
    } else if headroom >= 25.0 {
        (Severity::Info, "good", "Cooling headroom is good")
    } else if headroom >= 10.0 {
        (Severity::Info, "adequate", "Cooling headroom is adequate")
    } else if headroom >= 0.0 {
        (Severity::Warning, "marginal", "Cooling headroom is marginal")
    } else {
        (Severity::Critical, "insufficient", "Cooler cannot dissipate the CPU's heat")
    };

    let mut issue = Issue::new(
        "coolingCapacity",
        IssueCategory::Thermal,
        severity,
        title,
        format!(
            "{} is rated for {rating} W against {}'s {tdp} W TDP ({headroom:.0}% headroom, {grade}).",
            cooler.name, cpu.name
        ),
    )
    .affecting([&cooler.id, &cpu.id])
    .with_evidence(
        Evidence::new(
            format!("{rating} W rating vs {tdp} W TDP"),
            format!("({rating} - {tdp}) / {tdp} x 100 = {headroom:.1}%"),
        )
        .measure("rating", rating)
        .measure("cpu_tdp_w", tdp)
        .measure("headroom_pct", format!("{headroom:.1}"))
        .measure("grade", grade),
    );
    if severity > Severity::Info {
        let suggested = (f64::from(tdp) * 1.25).ceil() as u32;
        issue = issue.with_fix(format!("Choose a cooler rated for at least {suggested} W"));
    }
    RuleOutcome::Flagged(issue)
}
