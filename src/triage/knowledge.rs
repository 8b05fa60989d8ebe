//! Static knowledge base: symptom vocabulary and condition definitions.
//!
//! Two symptom lists exist per condition. `canonical_symptoms` drives
//! scoring; `symptoms` backs the informational answer. They are maintained
//! separately and intentionally not reconciled here.

use super::types::{ConditionId, InfoAttribute};

/// Known symptom phrases, in extraction order.
pub const SYMPTOM_VOCABULARY: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "sweating",
    "dizziness",
    "jaw pain",
    "left arm pain",
    "nausea",
    "vomiting",
    "stomach pain",
    "bloating",
    "heartburn",
    "loss of appetite",
    "regurgitation",
    "difficulty swallowing",
    "racing heart",
    "coughing",
    "coughing blood",
];

/// A condition with its scoring symptoms and informational text.
#[derive(Debug)]
pub struct ConditionDefinition {
    pub id: ConditionId,
    pub canonical_symptoms: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub emergency_signs: Option<&'static [&'static str]>,
    pub diet_recommendations: Option<&'static [&'static str]>,
    pub treatment: Option<&'static [&'static str]>,
    /// One-paragraph general description.
    pub description: &'static str,
}

impl ConditionDefinition {
    /// Raw list backing an informational answer, if this condition has one.
    pub fn info(&self, attribute: InfoAttribute) -> Option<&'static [&'static str]> {
        match attribute {
            InfoAttribute::Symptoms => Some(self.symptoms),
            InfoAttribute::RiskFactors => Some(self.risk_factors),
            InfoAttribute::Prevention => Some(self.prevention),
            InfoAttribute::EmergencySigns => self.emergency_signs,
            InfoAttribute::DietRecommendations => self.diet_recommendations,
            InfoAttribute::Treatment => self.treatment,
        }
    }
}

pub static HEART_ATTACK: ConditionDefinition = ConditionDefinition {
    id: ConditionId::HeartAttack,
    canonical_symptoms: &[
        "chest pain",
        "shortness of breath",
        "racing heart",
        "left arm pain",
        "jaw pain",
        "sweating",
        "dizziness",
    ],
    symptoms: &[
        "chest pain",
        "shortness of breath",
        "sweating",
        "dizziness",
        "jaw pain",
        "left arm pain",
        "nausea",
    ],
    risk_factors: &[
        "high blood pressure",
        "high cholesterol",
        "smoking",
        "diabetes",
        "obesity",
        "family history",
        "stress",
    ],
    prevention: &[
        "regular exercise",
        "healthy diet",
        "quit smoking",
        "limit alcohol",
        "manage stress",
        "regular check-ups",
    ],
    emergency_signs: Some(&[
        "severe chest pain",
        "pain spreading to arms/jaw",
        "sudden shortness of breath",
        "cold sweat",
        "lightheadedness",
    ]),
    diet_recommendations: None,
    treatment: None,
    description: "A heart attack occurs when blood flow to part of the heart is blocked, \
                  causing damage to heart muscle. It's a medical emergency requiring \
                  immediate attention. Common symptoms include chest pain, shortness of \
                  breath, and pain radiating to the arm or jaw.",
};

pub static GASTRITIS: ConditionDefinition = ConditionDefinition {
    id: ConditionId::Gastritis,
    canonical_symptoms: &[
        "nausea",
        "vomiting",
        "stomach pain",
        "bloating",
        "heartburn",
        "loss of appetite",
        "regurgitation",
    ],
    symptoms: &[
        "stomach pain",
        "bloating",
        "heartburn",
        "nausea",
        "vomiting",
        "loss of appetite",
        "feeling full quickly",
    ],
    risk_factors: &[
        "h. pylori infection",
        "regular nsaid use",
        "excessive alcohol",
        "stress",
        "autoimmune disorders",
        "bile reflux",
    ],
    prevention: &[
        "avoid irritating foods",
        "limit alcohol",
        "eat smaller meals",
        "manage stress",
        "avoid nsaids",
        "treatment for h. pylori",
    ],
    emergency_signs: None,
    diet_recommendations: Some(&[
        "avoid spicy foods",
        "limit acidic foods",
        "avoid caffeine",
        "eat high-fiber foods",
        "stay hydrated",
        "eat regularly",
    ]),
    treatment: Some(&[
        "proton pump inhibitors",
        "acid reducers",
        "antacids",
        "antibiotics (for H. pylori)",
        "eliminate trigger foods",
        "stress reduction techniques",
        "smaller meals",
        "avoid alcohol",
    ]),
    description: "Gastritis is inflammation of the stomach lining, often caused by \
                  infection, excessive alcohol, or regular use of certain pain relievers. \
                  Symptoms include stomach pain, nausea, and reduced appetite. Most cases \
                  can be managed with lifestyle changes and medication.",
};

/// All conditions in resolver priority order (earlier wins ties).
pub static CONDITIONS: [&ConditionDefinition; 2] = [&HEART_ATTACK, &GASTRITIS];

pub fn definition(id: ConditionId) -> &'static ConditionDefinition {
    match id {
        ConditionId::HeartAttack => &HEART_ATTACK,
        ConditionId::Gastritis => &GASTRITIS,
    }
}

/// Raw list backing an informational answer for `condition`.
pub fn lookup_info(
    condition: ConditionId,
    attribute: InfoAttribute,
) -> Option<&'static [&'static str]> {
    definition(condition).info(attribute)
}
