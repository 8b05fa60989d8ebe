//! Chat responder: an ordered list of answering stages.
//!
//! Each stage either answers the message or passes. Default order:
//! canned prompt → condition question → symptom analysis. When every stage
//! passes the caller gets [`FALLBACK_MESSAGE`].

use super::canned::suggested_response;
use super::formatter::apply_vitals;
use super::info::answer_condition_question;
use super::normalize::extract_symptoms;
use super::resolver::classify;
use super::types::{SymptomSet, VitalsProvider};

/// Reply when no stage recognizes the message.
pub const FALLBACK_MESSAGE: &str = "Please describe your symptoms in more detail, \
                                    or ask a specific question about heart attack or gastritis.";

/// One short-circuit stage of the chat pipeline.
pub trait ResponseStage: Send + Sync {
    /// Stable name for logs.
    fn name(&self) -> &'static str;

    /// Answer `message`, or `None` to let the next stage try.
    fn respond(&self, message: &str, vitals: &dyn VitalsProvider) -> Option<String>;
}

/// Exact-match suggested prompts.
pub struct CannedResponseStage;

impl ResponseStage for CannedResponseStage {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn respond(&self, message: &str, _vitals: &dyn VitalsProvider) -> Option<String> {
        suggested_response(message).map(str::to_string)
    }
}

/// Questions about a named condition.
pub struct ConditionInfoStage;

impl ResponseStage for ConditionInfoStage {
    fn name(&self) -> &'static str {
        "condition_info"
    }

    fn respond(&self, message: &str, _vitals: &dyn VitalsProvider) -> Option<String> {
        answer_condition_question(message)
    }
}

/// Extract symptoms from free text, classify, and apply the vitals rule.
///
/// Vitals are only fetched once at least one symptom was found.
pub struct SymptomAnalysisStage;

impl ResponseStage for SymptomAnalysisStage {
    fn name(&self) -> &'static str {
        "symptom_analysis"
    }

    fn respond(&self, message: &str, vitals: &dyn VitalsProvider) -> Option<String> {
        let found = extract_symptoms(message);
        if found.is_empty() {
            return None;
        }

        let symptoms = SymptomSet::from_tokens(found.iter().copied());
        let result = apply_vitals(classify(&symptoms), &vitals.latest_vitals());

        Some(format!(
            "Based on symptoms ({}), the system suggests: {}",
            found.join(", "),
            result.render()
        ))
    }
}

/// Runs stages in order, first answer wins.
pub struct TriageResponder {
    stages: Vec<Box<dyn ResponseStage>>,
}

impl TriageResponder {
    pub fn new() -> Self {
        Self::with_stages(vec![
            Box::new(CannedResponseStage),
            Box::new(ConditionInfoStage),
            Box::new(SymptomAnalysisStage),
        ])
    }

    pub fn with_stages(stages: Vec<Box<dyn ResponseStage>>) -> Self {
        Self { stages }
    }

    /// Answer a free-text chat message.
    pub fn respond(&self, message: &str, vitals: &dyn VitalsProvider) -> String {
        for stage in &self.stages {
            if let Some(answer) = stage.respond(message, vitals) {
                tracing::debug!(stage = stage.name(), "Chat message answered");
                return answer;
            }
        }
        tracing::debug!("No stage answered chat message");
        FALLBACK_MESSAGE.to_string()
    }
}

impl Default for TriageResponder {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify an explicit symptom list. No vitals note: the structured path
/// returns the bare classifier message.
pub fn analyze_symptom_list(symptoms: &SymptomSet) -> String {
    classify(symptoms).message
}
