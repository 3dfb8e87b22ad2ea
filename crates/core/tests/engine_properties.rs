mod common;

use common::*;
use rigsmith_core::compat::{
    check_compatibility, default_rule_registry, evaluate_with, CompatOptions, CompatibilityRule,
    RuleContext, RuleOutcome, RuleRegistry, MANUAL_OVERRIDE_CAP,
};
use rigsmith_core::model::{BuildInput, Issue, IssueCategory, Severity};
use rigsmith_core::planner::Planner;
use rigsmith_core::registry::{PresetFocus, PresetProfile, Registry};
use rigsmith_core::scoring::{calculate_scores, ScoreOptions};

#[test]
fn evaluation_is_deterministic() {
    let build = reference_build();
    let options = CompatOptions::default().with_preset("gaming");
    let first = check_compatibility(&build, &options);
    let second = check_compatibility(&build, &options);
    assert_eq!(first, second);

    let scores_a = calculate_scores(&build, &first, &ScoreOptions::default());
    let scores_b = calculate_scores(&build, &second, &ScoreOptions::default());
    assert_eq!(scores_a, scores_b);
}

#[test]
fn dropping_a_dimension_never_raises_confidence() {
    let build = reference_build();
    let full = check_compatibility(&build, &CompatOptions::default()).confidence;

    let mut partial = build.clone();
    if let Some(gpu) = partial.gpu.as_mut() {
        gpu.specs.length_mm = None;
    }
    let without_length = check_compatibility(&partial, &CompatOptions::default()).confidence;
    assert!(without_length < full);

    if let Some(case) = partial.case.as_mut() {
        case.specs.max_psu_length_mm = None;
    }
    let without_both = check_compatibility(&partial, &CompatOptions::default()).confidence;
    assert!(without_both < without_length);
}

#[test]
fn manual_overrides_lower_confidence_up_to_a_cap() {
    let build = reference_build();
    let with = |n: u32| {
        let options = CompatOptions { manual_overrides: n, ..CompatOptions::default() };
        check_compatibility(&build, &options).confidence
    };
    assert_eq!(with(0), 100);
    assert_eq!(with(1), 95);
    assert_eq!(with(100), 100 - MANUAL_OVERRIDE_CAP as u8);
}

#[test]
fn builtin_registry_runs_rules_in_a_stable_order() {
    let registry = default_rule_registry();
    let names = registry.names();
    assert_eq!(names.len(), 30);
    assert_eq!(names.first(), Some(&"socketMismatch"));
    assert_eq!(names.last(), Some(&"pcie5-ssd-gaming"));
    assert!(registry.get("coolingCapacity").is_some());
}

struct AlwaysWarn;

impl CompatibilityRule for AlwaysWarn {
    fn id(&self) -> &'static str {
        "alwaysWarn"
    }

    fn check(&self, _ctx: &RuleContext<'_>) -> RuleOutcome {
        RuleOutcome::Flagged(Issue::new(
            "alwaysWarn",
            IssueCategory::Features,
            Severity::Warning,
            "custom",
            "custom rule",
        ))
    }
}

#[test]
fn custom_rules_plug_into_the_registry() {
    let mut registry = RuleRegistry::new();
    registry.register(AlwaysWarn);
    let result = evaluate_with(&registry, &reference_build(), &CompatOptions::default());
    assert_eq!(result.checks_run, 1);
    assert_eq!(ids(&result.warnings), vec!["alwaysWarn"]);
    assert!(result.is_compatible);
}

#[test]
fn psu_connector_override_wins_over_the_record() {
    let mut build = reference_build();
    if let Some(gpu) = build.gpu.as_mut() {
        gpu.specs.power_connectors = vec!["3x 8-pin".to_string()];
    }
    let options = CompatOptions {
        psu_connectors: Some(rigsmith_core::model::PsuConnectors {
            pcie_8pin: 4,
            pcie_6pin: 0,
            pcie_16pin: 0,
        }),
        ..CompatOptions::default()
    };
    assert!(check_compatibility(&build, &CompatOptions::default()).find("gpuPowerConnectors").is_some());
    assert!(check_compatibility(&build, &options).find("gpuPowerConnectors").is_none());
}

fn fps_registry() -> Registry {
    Registry {
        presets: vec![PresetProfile {
            id: "fps".to_string(),
            label: "Competitive FPS".to_string(),
            focus: PresetFocus::Gaming,
            cpu_weight: 0.3,
            gpu_weight: 0.7,
            recommended_cpu_tier: 6,
            recommended_gpu_tier: 7,
        }],
        targets: Vec::new(),
    }
}

fn cpu_heavy_build() -> BuildInput {
    let mut build = reference_build();
    build.cpu = Some(cpu("cpu-9", "AM5", 9, 105));
    build.gpu = Some(gpu("gpu-4", 4, 150, 250));
    build
}

#[test]
fn custom_preset_focus_comes_from_the_active_registry() {
    let options = CompatOptions::default().with_preset("fps");

    // The built-in presets know nothing about "fps", so the focus is general.
    let builtin = check_compatibility(&cpu_heavy_build(), &options);
    assert!(builtin.find("tier-imbalance").is_none());

    let planner = Planner::new().with_registry(fps_registry()).with_compat_options(options);
    let result = planner.check_build(&cpu_heavy_build());
    let issue = result.find("tier-imbalance").expect("gaming-focus note");
    assert_eq!(issue.severity, Severity::Info);
}

#[test]
fn resolved_focus_keeps_an_explicit_value() {
    let registry = fps_registry();
    let resolved = CompatOptions::default().with_preset("fps").resolve_focus(&registry);
    assert_eq!(resolved.focus, Some(PresetFocus::Gaming));

    let pinned = CompatOptions { focus: Some(PresetFocus::Budget), ..CompatOptions::default() }
        .with_preset("fps")
        .resolve_focus(&registry);
    assert_eq!(pinned.focus, Some(PresetFocus::Budget));

    let unnamed = CompatOptions::default().resolve_focus(&registry);
    assert_eq!(unnamed.focus, Some(PresetFocus::General));
}
