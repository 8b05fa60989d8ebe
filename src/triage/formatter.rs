use crate::models::Vitals;

use super::types::PredictionResult;

/// Appended verbatim when a low-tier message meets elevated vitals.
pub const ESCALATION_NOTE: &str =
    "\nNote: Your vitals indicate elevated risk. Consider medical advice.";

/// Blood pressure strictly above this escalates.
pub const BP_ESCALATION_THRESHOLD: f64 = 140.0;
/// Pulse strictly above this escalates.
pub const PULSE_ESCALATION_THRESHOLD: f64 = 100.0;

/// Whether `message` qualifies for the vitals note.
///
/// The trigger is a case-insensitive "low" substring in the message text
/// (matches both "Low Risk" and "Low Likelihood"), not the severity enum.
pub fn needs_escalation(message: &str, vitals: &Vitals) -> bool {
    message.to_lowercase().contains("low")
        && (vitals.bp > BP_ESCALATION_THRESHOLD || vitals.pulse > PULSE_ESCALATION_THRESHOLD)
}

/// Attach the escalation note when the rule triggers.
pub fn apply_vitals(mut result: PredictionResult, vitals: &Vitals) -> PredictionResult {
    if needs_escalation(&result.message, vitals) {
        tracing::debug!(bp = vitals.bp, pulse = vitals.pulse, "Vitals escalation note added");
        result.escalation_note = Some(ESCALATION_NOTE.to_string());
    }
    result
}

/// Render `result` with the vitals rule applied.
pub fn format_with_vitals(result: &PredictionResult, vitals: &Vitals) -> String {
    apply_vitals(result.clone(), vitals).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::types::{ConditionId, DecisionBasis, Severity};

    fn low_heart() -> PredictionResult {
        PredictionResult::new(
            "Low Risk: Some heart-related symptoms - Monitor and consult doctor if they persist",
            DecisionBasis::ConditionTier {
                condition: ConditionId::HeartAttack,
                severity: Severity::Low,
            },
        )
    }

    fn vitals(bp: f64, pulse: f64) -> Vitals {
        Vitals { bp, pulse, sugar: 100.0 }
    }

    #[test]
    fn high_bp_escalates_low_message() {
        let out = format_with_vitals(&low_heart(), &vitals(150.0, 80.0));
        assert_eq!(
            out,
            "Low Risk: Some heart-related symptoms - Monitor and consult doctor if they persist\
             \nNote: Your vitals indicate elevated risk. Consider medical advice."
        );
    }

    #[test]
    fn normal_vitals_pass_through() {
        let out = format_with_vitals(&low_heart(), &vitals(120.0, 80.0));
        assert_eq!(out, low_heart().message);
    }

    #[test]
    fn high_pulse_escalates() {
        assert!(needs_escalation("Low Likelihood: Mild digestive issues", &vitals(120.0, 101.0)));
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!needs_escalation("Low Risk", &vitals(140.0, 100.0)));
    }

    #[test]
    fn non_low_message_never_escalates() {
        let msg = "Critical Risk: Heart Attack - Seek immediate medical attention!";
        assert!(!needs_escalation(msg, &vitals(200.0, 150.0)));
    }

    #[test]
    fn trigger_is_substring_case_insensitive() {
        // "sLOW" contains "low" too; the rule is textual.
        assert!(needs_escalation("Heart rate feels SLOW", &vitals(150.0, 70.0)));
    }

    #[test]
    fn apply_vitals_sets_note_field() {
        let result = apply_vitals(low_heart(), &vitals(150.0, 80.0));
        assert_eq!(result.escalation_note.as_deref(), Some(ESCALATION_NOTE));
        let result = apply_vitals(low_heart(), &Vitals::default());
        assert!(result.escalation_note.is_none());
    }
}
