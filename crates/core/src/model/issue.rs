use std::fmt;

use serde::{Deserialize, Serialize};

/// How badly an issue affects the build.
///
/// Ordered so that `Critical` sorts highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// What kind of decision produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Fit,
    Clearance,
    Power,
    Thermal,
    Storage,
    Headers,
    Features,
    Efficiency,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueCategory::Fit => "fit",
            IssueCategory::Clearance => "clearance",
            IssueCategory::Power => "power",
            IssueCategory::Thermal => "thermal",
            IssueCategory::Storage => "storage",
            IssueCategory::Headers => "headers",
            IssueCategory::Features => "features",
            IssueCategory::Efficiency => "efficiency",
        };
        f.write_str(label)
    }
}

/// A single named measurement backing an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub key: String,
    pub value: String,
}

/// Measurements plus a one-line comparison and the arithmetic behind it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evidence {
    pub measurements: Vec<Measurement>,
    pub comparison: String,
    pub calculation: String,
}

impl Evidence {
    pub fn new(comparison: impl Into<String>, calculation: impl Into<String>) -> Self {
        Self { measurements: Vec::new(), comparison: comparison.into(), calculation: calculation.into() }
    }

    pub fn measure(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.measurements.push(Measurement { key: key.into(), value: value.to_string() });
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.measurements.iter().find(|m| m.key == key).map(|m| m.value.as_str())
    }
}

/// A diagnostic produced by one compatibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub category: IssueCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub affected_parts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_fixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

impl Issue {
    pub fn new(
        id: &str,
        category: IssueCategory,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            severity,
            title: title.into(),
            description: description.into(),
            affected_parts: Vec::new(),
            suggested_fixes: Vec::new(),
            evidence: None,
        }
    }

    pub fn affecting<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.affected_parts.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fixes.push(fix.into());
        self
    }

    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = Some(evidence);
        self
    }
}

/// Outcome of one compatibility evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// True iff no critical issue was found.
    pub is_compatible: bool,
    pub hard_fails: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub notes: Vec<Issue>,
    /// 0-100; how much of the needed spec data was available.
    pub confidence: u8,
    /// Rules that had enough inputs to run.
    pub checks_run: u32,
}

impl CompatibilityResult {
    /// Bucket issues by the severity each rule returned.
    pub fn from_issues(
        issues: impl IntoIterator<Item = Issue>,
        confidence: u8,
        checks_run: u32,
    ) -> Self {
        let mut result = Self { confidence, checks_run, ..Self::default() };
        for issue in issues {
            match issue.severity {
                Severity::Critical => result.hard_fails.push(issue),
                Severity::Warning => result.warnings.push(issue),
                Severity::Info => result.notes.push(issue),
            }
        }
        result.is_compatible = result.hard_fails.is_empty();
        result
    }

    /// All issues, most severe first.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.hard_fails.iter().chain(self.warnings.iter()).chain(self.notes.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Issue> {
        self.issues().find(|issue| issue.id == id)
    }

    pub fn critical_ids(&self) -> Vec<&str> {
        self.hard_fails.iter().map(|issue| issue.id.as_str()).collect()
    }
}
