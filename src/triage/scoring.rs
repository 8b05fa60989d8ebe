use super::knowledge::{ConditionDefinition, CONDITIONS};
use super::types::{ConditionScore, Severity, SymptomSet};

/// Score one condition against a symptom set.
///
/// Probability is the share of the condition's canonical symptoms present
/// in the set (exact phrase, case-insensitive), as a percentage. A condition
/// with no canonical symptoms scores 0.
pub fn score(condition: &ConditionDefinition, symptoms: &SymptomSet) -> ConditionScore {
    let total = condition.canonical_symptoms.len();
    let matched = condition
        .canonical_symptoms
        .iter()
        .filter(|s| symptoms.contains(s))
        .count();

    let probability = match_percentage(matched, total);

    ConditionScore {
        condition: condition.id,
        probability,
        severity: Severity::from_probability(probability),
    }
}

/// Score every known condition, in resolver priority order.
pub fn score_all(symptoms: &SymptomSet) -> Vec<ConditionScore> {
    CONDITIONS.iter().map(|def| score(def, symptoms)).collect()
}

fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64 * 100.0
}
