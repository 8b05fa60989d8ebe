use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Vitals;

// ---------------------------------------------------------------------------
// ConditionId
// ---------------------------------------------------------------------------

/// Conditions known to the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionId {
    HeartAttack,
    Gastritis,
}

impl ConditionId {
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionId::HeartAttack => "heart_attack",
            ConditionId::Gastritis => "gastritis",
        }
    }

    /// Identifier with underscores replaced by spaces, as used in answers.
    pub fn display_name(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity tier derived from a match probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Probability at or above which a condition is rated high.
pub const HIGH_SEVERITY_THRESHOLD: f64 = 70.0;
/// Probability at or above which a condition is rated medium.
pub const MEDIUM_SEVERITY_THRESHOLD: f64 = 40.0;

impl Severity {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_SEVERITY_THRESHOLD {
            Severity::High
        } else if probability >= MEDIUM_SEVERITY_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// InfoAttribute
// ---------------------------------------------------------------------------

/// Informational attribute of a condition (non-scoring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoAttribute {
    Symptoms,
    RiskFactors,
    Prevention,
    EmergencySigns,
    DietRecommendations,
    Treatment,
}

// ---------------------------------------------------------------------------
// SymptomSet
// ---------------------------------------------------------------------------

/// Normalized (lower-cased, trimmed) symptom phrases. Sole input to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSet(BTreeSet<String>);

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and collect tokens. Blank tokens are dropped.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = tokens
            .into_iter()
            .map(|t| normalize_token(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self(set)
    }

    /// Case-insensitive exact phrase membership.
    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains(&normalize_token(phrase))
    }

    pub fn contains_all(&self, phrases: &[&str]) -> bool {
        phrases.iter().all(|p| self.contains(p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Scores and results
// ---------------------------------------------------------------------------

/// Per-condition scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionScore {
    pub condition: ConditionId,
    /// Percentage of the condition's canonical symptoms present, 0–100.
    pub probability: f64,
    pub severity: Severity,
}

/// Symptom-cluster rules that can fire when no condition crosses the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    HeartAttack,
    Gastritis,
    AcidReflux,
    PanicAttack,
    PulmonaryEmbolism,
}

/// Which branch of the resolver produced the message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionBasis {
    ConditionTier { condition: ConditionId, severity: Severity },
    Override { rule: OverrideKind },
    Inconclusive,
}

/// Output of the triage pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub message: String,
    /// Vitals-based escalation note, appended on render.
    pub escalation_note: Option<String>,
    pub basis: DecisionBasis,
}

impl PredictionResult {
    pub fn new(message: impl Into<String>, basis: DecisionBasis) -> Self {
        Self {
            message: message.into(),
            escalation_note: None,
            basis,
        }
    }

    /// Message followed by the escalation note, if any.
    pub fn render(&self) -> String {
        match &self.escalation_note {
            Some(note) => format!("{}{}", self.message, note),
            None => self.message.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Seams and errors
// ---------------------------------------------------------------------------

/// Source of the most recently recorded vitals.
///
/// Implementations never fail: unavailable data degrades to `Vitals::default()`.
pub trait VitalsProvider: Send + Sync {
    fn latest_vitals(&self) -> Vitals;
}

/// A fixed snapshot is its own provider.
impl VitalsProvider for Vitals {
    fn latest_vitals(&self) -> Vitals {
        *self
    }
}

/// Errors raised at the triage boundary. The scoring core itself is total.
#[derive(Error, Debug, PartialEq)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_probability(100.0), Severity::High);
        assert_eq!(Severity::from_probability(70.0), Severity::High);
        assert_eq!(Severity::from_probability(69.9), Severity::Medium);
        assert_eq!(Severity::from_probability(40.0), Severity::Medium);
        assert_eq!(Severity::from_probability(39.9), Severity::Low);
        assert_eq!(Severity::from_probability(0.0), Severity::Low);
    }

    #[test]
    fn condition_display_name_replaces_underscores() {
        assert_eq!(ConditionId::HeartAttack.display_name(), "heart attack");
        assert_eq!(ConditionId::Gastritis.display_name(), "gastritis");
    }

    #[test]
    fn symptom_set_normalizes_and_dedups() {
        let set = SymptomSet::from_tokens(["  Chest Pain ", "chest pain", "SWEATING", "   "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("chest pain"));
        assert!(set.contains("Sweating"));
    }

    #[test]
    fn symptom_set_is_exact_not_substring() {
        let set = SymptomSet::from_tokens(["sudden shortness of breath"]);
        assert!(!set.contains("shortness of breath"));
    }

    #[test]
    fn contains_all_requires_every_phrase() {
        let set = SymptomSet::from_tokens(["heartburn", "bloating"]);
        assert!(set.contains_all(&["heartburn", "bloating"]));
        assert!(!set.contains_all(&["heartburn", "bloating", "stomach pain"]));
        assert!(set.contains_all(&[]));
    }

    #[test]
    fn render_appends_note() {
        let mut result = PredictionResult::new("Low Risk", DecisionBasis::Inconclusive);
        assert_eq!(result.render(), "Low Risk");
        result.escalation_note = Some("\nNote".into());
        assert_eq!(result.render(), "Low Risk\nNote");
    }

    #[test]
    fn decision_basis_serializes_tagged() {
        let basis = DecisionBasis::ConditionTier {
            condition: ConditionId::Gastritis,
            severity: Severity::Medium,
        };
        let json = serde_json::to_value(basis).unwrap();
        assert_eq!(json["kind"], "condition_tier");
        assert_eq!(json["condition"], "gastritis");
        assert_eq!(json["severity"], "medium");
    }

    #[test]
    fn fixed_vitals_provide_themselves() {
        let v = Vitals { bp: 150.0, pulse: 80.0, sugar: 100.0 };
        assert_eq!(v.latest_vitals(), v);
    }
}
