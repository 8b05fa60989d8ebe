use serde_json::Value;

use super::knowledge::SYMPTOM_VOCABULARY;
use super::types::{SymptomSet, TriageError};

/// Extract known symptom phrases from free text.
///
/// Plain substring containment on the lower-cased text, no word boundaries:
/// "coughing blood" yields both "coughing" and "coughing blood". Phrases
/// come back in vocabulary order. An empty result means the message did not
/// describe enough to score.
pub fn extract_symptoms(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SYMPTOM_VOCABULARY
        .iter()
        .copied()
        .filter(|phrase| lower.contains(*phrase))
        .collect()
}

/// Validate a structured symptom payload: must be a JSON array of strings.
pub fn parse_symptom_list(value: &Value) -> Result<SymptomSet, TriageError> {
    let items = value
        .as_array()
        .ok_or_else(|| TriageError::InvalidInput("symptoms must be a list".into()))?;

    let mut tokens = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let token = item.as_str().ok_or_else(|| {
            TriageError::InvalidInput(format!("symptoms[{index}] must be a string"))
        })?;
        tokens.push(token);
    }

    Ok(SymptomSet::from_tokens(tokens))
}
