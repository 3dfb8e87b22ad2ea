//! Compatibility rule engine.
//!
//! Each rule is a side-effect-free check over the parts it needs. Rules live
//! in an ordered `RuleRegistry`; evaluation walks the registry once, counts
//! the rules that had enough inputs to run, and buckets the returned issues
//! by the severity each rule chose.

mod confidence;
mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{BuildInput, CompatibilityResult, Issue, PsuConnectors};
use crate::power::{estimate_system_draw, PowerEstimate};
use crate::registry::{PresetFocus, Registry};

pub use confidence::{estimate_confidence, MANUAL_OVERRIDE_CAP, MANUAL_OVERRIDE_PENALTY};
pub(crate) use rules::fit::same_socket;

/// Out-of-band data that is not carried on the component records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatOptions {
    /// Explicit PSU connector inventory, overriding the PSU record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu_connectors: Option<PsuConnectors>,
    /// Explicit PSU depth, overriding the record and form-factor default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu_length_mm: Option<u32>,
    /// Number of specs the user typed in by hand.
    #[serde(default)]
    pub manual_overrides: u32,
    /// Active build preset; only efficiency rules look at it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Focus of the active preset, as resolved by the registry in use.
    /// Without it the focus comes from the built-in presets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<PresetFocus>,
}

impl CompatOptions {
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Resolve the preset focus through `registry` unless one is already set.
    pub fn resolve_focus(mut self, registry: &Registry) -> Self {
        if self.focus.is_none() {
            self.focus = Some(registry.focus_for(self.preset.as_deref()));
        }
        self
    }
}

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub build: &'a BuildInput,
    pub options: &'a CompatOptions,
    pub power: PowerEstimate,
    pub focus: PresetFocus,
}

impl<'a> RuleContext<'a> {
    pub fn new(build: &'a BuildInput, options: &'a CompatOptions) -> Self {
        Self {
            build,
            options,
            power: estimate_system_draw(build),
            focus: options
                .focus
                .unwrap_or_else(|| PresetFocus::for_preset(options.preset.as_deref())),
        }
    }

    /// PSU connector inventory, preferring the explicit override.
    pub fn psu_connectors(&self) -> Option<PsuConnectors> {
        self.options
            .psu_connectors
            .or_else(|| self.build.psu.as_ref().and_then(|psu| psu.specs.connectors))
    }

    /// PSU depth: explicit override, then the record, then the form-factor default.
    pub fn psu_length_mm(&self) -> Option<u32> {
        let psu = self.build.psu.as_ref()?;
        Some(
            self.options
                .psu_length_mm
                .or(psu.specs.length_mm)
                .unwrap_or_else(|| psu.specs.form_factor.default_length_mm()),
        )
    }
}

/// Result of running one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The parts or data the rule needs are not present.
    Skipped,
    Passed,
    Flagged(Issue),
}

impl From<Option<Issue>> for RuleOutcome {
    fn from(issue: Option<Issue>) -> Self {
        match issue {
            Some(issue) => RuleOutcome::Flagged(issue),
            None => RuleOutcome::Passed,
        }
    }
}

/// Trait implemented by compatibility rules.
pub trait CompatibilityRule: Send + Sync {
    fn id(&self) -> &'static str;
    fn check(&self, ctx: &RuleContext<'_>) -> RuleOutcome;
}

/// A rule backed by a plain function.
pub struct FnRule {
    id: &'static str,
    check: fn(&RuleContext<'_>) -> RuleOutcome,
}

impl FnRule {
    pub const fn new(id: &'static str, check: fn(&RuleContext<'_>) -> RuleOutcome) -> Self {
        Self { id, check }
    }
}

impl CompatibilityRule for FnRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        (self.check)(ctx)
    }
}

/// Ordered set of rules. Registration order is evaluation order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn CompatibilityRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register<R: CompatibilityRule + 'static>(&mut self, rule: R) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn get(&self, id: &str) -> Option<&dyn CompatibilityRule> {
        self.rules.iter().find(|r| r.id() == id).map(|r| &**r)
    }

    /// Registered rule ids, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry populated with every built-in rule.
pub fn default_rule_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    rules::register_builtin(&mut registry);
    registry
}

/// Run every built-in rule against `build`.
pub fn check_compatibility(build: &BuildInput, options: &CompatOptions) -> CompatibilityResult {
    evaluate_with(&default_rule_registry(), build, options)
}

/// Run the rules in `registry` against `build`.
pub fn evaluate_with(
    registry: &RuleRegistry,
    build: &BuildInput,
    options: &CompatOptions,
) -> CompatibilityResult {
    let ctx = RuleContext::new(build, options);
    let mut issues = Vec::new();
    let mut checks_run = 0u32;

    for rule in &registry.rules {
        match rule.check(&ctx) {
            RuleOutcome::Skipped => {}
            RuleOutcome::Passed => {
                checks_run += 1;
                debug!(rule = rule.id(), "passed");
            }
            RuleOutcome::Flagged(issue) => {
                checks_run += 1;
                debug!(rule = rule.id(), severity = %issue.severity, "flagged");
                issues.push(issue);
            }
        }
    }

    let confidence = estimate_confidence(build, options);
    let result = CompatibilityResult::from_issues(issues, confidence, checks_run);
    debug!(
        checks_run,
        hard_fails = result.hard_fails.len(),
        warnings = result.warnings.len(),
        notes = result.notes.len(),
        confidence,
        "compatibility evaluated"
    );
    result
}
