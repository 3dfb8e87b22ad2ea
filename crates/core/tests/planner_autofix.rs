mod common;

use common::*;
use rigsmith_core::catalog::Catalog;
use rigsmith_core::compat::{check_compatibility, CompatOptions};
use rigsmith_core::model::{BuildInput, Issue, MemoryType};
use rigsmith_core::planner::{generate_auto_fix_plan, AutoFixStrategy, PlannerError};

fn issues_of(build: &BuildInput) -> Vec<Issue> {
    check_compatibility(build, &CompatOptions::default()).issues().cloned().collect()
}

fn mismatched_build() -> BuildInput {
    let mut build = reference_build();
    build.motherboard = Some(board("mb-z790", "LGA1700", "Z790", MemoryType::Ddr5).with_price(250.0));
    build
}

fn board_catalog() -> Catalog {
    Catalog {
        motherboards: vec![
            // Cheapest AM5 board, but it would swap one failure for another.
            board("mb-a620-ddr4", "AM5", "A620", MemoryType::Ddr4).with_price(90.0),
            board("mb-b650", "AM5", "B650", MemoryType::Ddr5).with_price(180.0),
            board("mb-z790", "LGA1700", "Z790", MemoryType::Ddr5).with_price(250.0),
        ],
        ..Catalog::default()
    }
}

#[test]
fn fixes_socket_mismatch_without_new_hard_fails() {
    let build = mismatched_build();
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &board_catalog());

    assert_eq!(plan.issues_fixed, vec!["socketMismatch".to_string()]);
    assert!(plan.issues_remaining.is_empty());
    assert_eq!(plan.fixes.len(), 1);
    assert_eq!(plan.fixes[0].added.id, "mb-b650");
    assert_eq!(plan.fixes[0].removed.as_ref().map(|p| p.id.as_str()), Some("mb-z790"));
    assert_eq!(plan.total_cost, 180.0);
    assert!(plan.resulting_compatibility.is_compatible);
    assert_eq!(plan.fixed_build.motherboard.as_ref().map(|b| b.id.as_str()), Some("mb-b650"));
}

#[test]
fn auto_fix_converges() {
    let build = mismatched_build();
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Performance, &board_catalog());

    let rerun = check_compatibility(&plan.fixed_build, &CompatOptions::default());
    assert!(rerun.is_compatible);
    for id in &plan.issues_fixed {
        assert!(rerun.find(id).is_none(), "{id} came back");
    }
}

#[test]
fn original_build_is_left_untouched() {
    let build = mismatched_build();
    let before = build.clone();
    let _ = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &board_catalog());
    assert_eq!(build, before);
}

#[test]
fn issues_cleared_by_another_fix_are_reported_as_cascade() {
    let mut build = reference_build();
    build.motherboard = Some(board("mb-z690-ddr4", "LGA1700", "Z690", MemoryType::Ddr4).with_price(200.0));
    let catalog = Catalog {
        motherboards: vec![board("mb-b650", "AM5", "B650", MemoryType::Ddr5).with_price(180.0)],
        ..Catalog::default()
    };

    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &catalog);
    assert_eq!(plan.issues_fixed, vec!["socketMismatch".to_string()]);
    assert!(plan.issues_resolved_by_cascade.contains(&"ramTypeMismatch".to_string()));
    assert!(plan.resulting_compatibility.is_compatible);
}

#[test]
fn unresolvable_issues_remain() {
    let mut build = reference_build();
    build.psu = Some(psu("psu-300", 300).with_price(40.0));
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &Catalog::default());

    assert!(plan.fixes.is_empty());
    assert_eq!(plan.issues_remaining, vec!["psuWattage".to_string()]);
    assert_eq!(plan.total_cost, 0.0);
    assert!(!plan.resulting_compatibility.is_compatible);
}

#[test]
fn informational_notes_are_not_fixed() {
    let build = reference_build();
    let catalog = Catalog {
        coolers: vec![air_cooler("cooler-big", 300, 160).with_price(90.0)],
        ..Catalog::default()
    };
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &catalog);
    assert!(plan.fixes.is_empty());
    assert!(plan.issues_remaining.is_empty());
    assert_eq!(plan.issues_skipped, vec!["coolingCapacity".to_string()]);
}

#[test]
fn fix_that_trades_a_note_for_a_warning_is_rejected() {
    // The cheaper 400 W unit clears the oversized-PSU note but leaves only
    // 1.05x headroom over the 380 W draw.
    let mut build = reference_build();
    build.psu = Some(psu("psu-1200", 1200).with_price(220.0));
    let catalog = Catalog {
        psus: vec![psu("psu-400", 400).with_price(40.0), psu("psu-650", 650).with_price(70.0)],
        ..Catalog::default()
    };
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &catalog);

    assert_eq!(plan.issues_fixed, vec!["psu-excessive".to_string()]);
    assert_eq!(plan.fixes.len(), 1);
    assert_eq!(plan.fixes[0].added.id, "psu-650");
    assert_eq!(plan.fixes[0].removed.as_ref().map(|p| p.id.as_str()), Some("psu-1200"));
    assert_eq!(plan.total_cost, 70.0);
    assert!(plan.resulting_compatibility.find("psuWattage").is_none());
    assert!(plan.resulting_compatibility.warnings.is_empty());
    assert_eq!(plan.issues_skipped, vec!["coolingCapacity".to_string()]);
}

#[test]
fn note_stays_when_every_candidate_makes_things_worse() {
    let mut build = reference_build();
    build.psu = Some(psu("psu-1200", 1200).with_price(220.0));
    let catalog = Catalog {
        psus: vec![psu("psu-400", 400).with_price(40.0)],
        ..Catalog::default()
    };
    let plan = generate_auto_fix_plan(&build, &issues_of(&build), AutoFixStrategy::Cheapest, &catalog);

    assert!(plan.fixes.is_empty());
    assert_eq!(plan.issues_remaining, vec!["psu-excessive".to_string()]);
    assert_eq!(plan.fixed_build, build);
}

#[test]
fn strategy_parses_case_insensitively() {
    assert_eq!("Cheapest".parse::<AutoFixStrategy>(), Ok(AutoFixStrategy::Cheapest));
    assert_eq!(" performance ".parse::<AutoFixStrategy>(), Ok(AutoFixStrategy::Performance));
    assert_eq!(
        "fastest".parse::<AutoFixStrategy>(),
        Err(PlannerError::UnknownStrategy("fastest".to_string()))
    );
    assert_eq!(AutoFixStrategy::default().to_string(), "cheapest");
}
