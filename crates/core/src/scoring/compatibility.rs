use crate::model::{CompatibilityResult, Severity};
use crate::scoring::{Score, Tally, COMPATIBILITY_WEIGHT};

const NOTE_PENALTY: i32 = 5;

fn severity_penalty(severity: Severity) -> i32 {
    match severity {
        Severity::Critical => 25,
        Severity::Warning => 15,
        Severity::Info => 5,
    }
}

pub(super) fn score(compat: &CompatibilityResult) -> Score {
    if !compat.hard_fails.is_empty() {
        let mut tally = Tally::new(0, "build has blocking issues");
        for issue in &compat.hard_fails {
            tally.add(&issue.id, 0, issue.title.clone());
        }
        return tally.finish(
            compat.confidence,
            COMPATIBILITY_WEIGHT,
            format!("{} blocking issue(s); the build will not work as selected", compat.hard_fails.len()),
        );
    }

    let mut tally = Tally::new(100, "no blocking issues");
    for issue in &compat.warnings {
        tally.add(&issue.id, -severity_penalty(issue.severity), issue.title.clone());
    }
    for issue in &compat.notes {
        tally.add(&issue.id, -NOTE_PENALTY, issue.title.clone());
    }
    let summary = match (compat.warnings.len(), compat.notes.len()) {
        (0, 0) => "No compatibility concerns".to_string(),
        (w, n) => format!("{w} warning(s) and {n} note(s)"),
    };
    tally.finish(compat.confidence, COMPATIBILITY_WEIGHT, summary)
}
