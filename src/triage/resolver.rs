//! Decision resolver: turns per-condition scores into exactly one message.
//!
//! Precedence is fixed:
//! 1. Condition tiers, in priority order. A condition fires when its
//!    probability reaches [`CONDITION_THRESHOLD`] and is at least every
//!    lower-priority condition's probability (heart attack wins ties).
//! 2. Symptom-cluster overrides, first full match wins.
//! 3. The inconclusive fallback.
//!
//! Overrides are only consulted when no tier fired. Clusters that already
//! push a condition past the threshold (the heart attack triple is 3/7) are
//! therefore shadowed by the tier branch and never surface.

use super::scoring::score_all;
use super::types::{
    ConditionId, ConditionScore, DecisionBasis, OverrideKind, PredictionResult, Severity,
    SymptomSet,
};

/// Minimum probability for a condition tier to fire.
pub const CONDITION_THRESHOLD: f64 = 30.0;

pub const INCONCLUSIVE_MESSAGE: &str =
    "Not Conclusive: Insufficient symptoms to determine condition - Consider medical consultation";

struct OverrideRule {
    kind: OverrideKind,
    required: &'static [&'static str],
    message: &'static str,
}

/// Checked top to bottom.
static OVERRIDES: [OverrideRule; 5] = [
    OverrideRule {
        kind: OverrideKind::HeartAttack,
        required: &["chest pain", "shortness of breath", "sweating"],
        message: "High Risk: Heart Attack - Seek immediate medical attention!",
    },
    OverrideRule {
        kind: OverrideKind::Gastritis,
        required: &["stomach pain", "bloating", "heartburn"],
        message: "Likely: Gastritis - Consult with a healthcare provider",
    },
    OverrideRule {
        kind: OverrideKind::AcidReflux,
        required: &["heartburn", "regurgitation", "difficulty swallowing"],
        message: "Likely: Acid Reflux (GERD) - Consider dietary changes and antacids",
    },
    OverrideRule {
        kind: OverrideKind::PanicAttack,
        required: &["chest pain", "shortness of breath", "racing heart"],
        message: "Possibly: Anxiety or Panic Attack - Try relaxation techniques and consider medical advice",
    },
    OverrideRule {
        kind: OverrideKind::PulmonaryEmbolism,
        required: &["sudden shortness of breath", "chest pain", "coughing blood"],
        message: "Critical: Pulmonary Embolism - CALL EMERGENCY SERVICES IMMEDIATELY!",
    },
];

/// Fixed wording for a condition at a given severity.
pub fn tier_message(condition: ConditionId, severity: Severity) -> &'static str {
    match (condition, severity) {
        (ConditionId::HeartAttack, Severity::High) => {
            "Critical Risk: Heart Attack - Seek immediate medical attention!"
        }
        (ConditionId::HeartAttack, Severity::Medium) => {
            "Moderate Risk: Possible Heart Issues - Consider urgent medical advice"
        }
        (ConditionId::HeartAttack, Severity::Low) => {
            "Low Risk: Some heart-related symptoms - Monitor and consult doctor if they persist"
        }
        (ConditionId::Gastritis, Severity::High) => {
            "High Likelihood: Gastritis - Consult with a healthcare provider"
        }
        (ConditionId::Gastritis, Severity::Medium) => {
            "Moderate Likelihood: Possible Gastritis - Consider dietary changes and medical consultation"
        }
        (ConditionId::Gastritis, Severity::Low) => {
            "Low Likelihood: Mild digestive issues - Monitor symptoms and avoid trigger foods"
        }
    }
}

/// Pick one message from `scores` (in priority order) and the raw input set.
pub fn resolve(scores: &[ConditionScore], symptoms: &SymptomSet) -> PredictionResult {
    if let Some(winner) = leading_condition(scores) {
        tracing::debug!(
            condition = winner.condition.as_str(),
            probability = winner.probability,
            severity = winner.severity.as_str(),
            "Condition tier selected"
        );
        return PredictionResult::new(
            tier_message(winner.condition, winner.severity),
            DecisionBasis::ConditionTier {
                condition: winner.condition,
                severity: winner.severity,
            },
        );
    }

    if let Some(rule) = OVERRIDES.iter().find(|r| symptoms.contains_all(r.required)) {
        tracing::debug!(rule = ?rule.kind, "Symptom-cluster override fired");
        return PredictionResult::new(rule.message, DecisionBasis::Override { rule: rule.kind });
    }

    tracing::debug!(symptom_count = symptoms.len(), "No condition or override matched");
    PredictionResult::new(INCONCLUSIVE_MESSAGE, DecisionBasis::Inconclusive)
}

/// Score and resolve in one step. Pure: same input, same output.
pub fn classify(symptoms: &SymptomSet) -> PredictionResult {
    let scores = score_all(symptoms);
    resolve(&scores, symptoms)
}

fn leading_condition(scores: &[ConditionScore]) -> Option<&ConditionScore> {
    scores.iter().enumerate().find_map(|(i, candidate)| {
        let beats_rest = scores[i + 1..]
            .iter()
            .all(|other| candidate.probability >= other.probability);
        (candidate.probability >= CONDITION_THRESHOLD && beats_rest).then_some(candidate)
    })
}
