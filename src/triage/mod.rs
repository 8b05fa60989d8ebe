//! Symptom triage core.
//!
//! `classify` is a pure function from a normalized symptom set to one advice
//! message. Everything here is in-process and stateless; the only external
//! input is a [`VitalsProvider`] consulted by the chat pipeline.

pub mod canned;
pub mod formatter;
pub mod info;
pub mod knowledge;
pub mod normalize;
pub mod orchestrator;
pub mod resolver;
pub mod scoring;
pub mod types;

pub use formatter::format_with_vitals;
pub use knowledge::lookup_info;
pub use normalize::{extract_symptoms, parse_symptom_list};
pub use orchestrator::{analyze_symptom_list, TriageResponder};
pub use resolver::classify;
pub use scoring::score;
pub use types::{
    ConditionId, ConditionScore, DecisionBasis, InfoAttribute, PredictionResult, Severity,
    SymptomSet, TriageError, VitalsProvider,
};
