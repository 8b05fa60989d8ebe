//! Informational questions about a condition ("what causes gastritis?").
//!
//! Two ordered rule tables, first match wins in each: one picks the
//! condition from its synonyms, the other picks the requested attribute.
//! Neither touches the scoring engine.

use std::sync::LazyLock;

use regex::Regex;

use super::knowledge::definition;
use super::types::{ConditionId, InfoAttribute};

struct ConditionPattern {
    regex: Regex,
    condition: ConditionId,
}

/// An attribute keyword rule, optionally limited to one condition.
struct AttributeRule {
    regex: Regex,
    only_for: Option<ConditionId>,
    attribute: InfoAttribute,
}

static CONDITION_PATTERNS: LazyLock<Vec<ConditionPattern>> = LazyLock::new(|| {
    vec![
        ConditionPattern {
            regex: compile(r"heart attack|cardiac arrest|heart pain|heart condition"),
            condition: ConditionId::HeartAttack,
        },
        ConditionPattern {
            regex: compile(r"gastritis|stomach inflammation|stomach pain|acid reflux|indigestion"),
            condition: ConditionId::Gastritis,
        },
    ]
});

static ATTRIBUTE_RULES: LazyLock<Vec<AttributeRule>> = LazyLock::new(|| {
    vec![
        rule(r"symptom|sign|feel|experiencing", None, InfoAttribute::Symptoms),
        rule(r"cause|risk factor|reason", None, InfoAttribute::RiskFactors),
        rule(r"prevent|avoid|stop", None, InfoAttribute::Prevention),
        rule(
            r"treat|cure|heal|therapy|medication",
            Some(ConditionId::Gastritis),
            InfoAttribute::Treatment,
        ),
        rule(
            r"emergency|urgent|serious",
            Some(ConditionId::HeartAttack),
            InfoAttribute::EmergencySigns,
        ),
        rule(
            r"diet|eat|food",
            Some(ConditionId::Gastritis),
            InfoAttribute::DietRecommendations,
        ),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid condition info regex pattern")
}

fn rule(pattern: &str, only_for: Option<ConditionId>, attribute: InfoAttribute) -> AttributeRule {
    AttributeRule {
        regex: compile(pattern),
        only_for,
        attribute,
    }
}

/// Which condition a (lower-cased) message refers to.
pub fn detect_condition(text: &str) -> Option<ConditionId> {
    CONDITION_PATTERNS
        .iter()
        .find(|p| p.regex.is_match(text))
        .map(|p| p.condition)
}

/// Which attribute a (lower-cased) message asks about for `condition`.
pub fn detect_attribute(condition: ConditionId, text: &str) -> Option<InfoAttribute> {
    ATTRIBUTE_RULES
        .iter()
        .filter(|r| r.only_for.map_or(true, |c| c == condition))
        .find(|r| r.regex.is_match(text))
        .map(|r| r.attribute)
}

/// Answer a question about a known condition, or `None` if no condition is named.
///
/// Falls back to the condition's general description when no attribute
/// keyword matches.
pub fn answer_condition_question(message: &str) -> Option<String> {
    let text = message.to_lowercase();
    let condition = detect_condition(&text)?;
    let def = definition(condition);

    let answer = detect_attribute(condition, &text)
        .and_then(|attribute| def.info(attribute).map(|items| (attribute, items)))
        .map(|(attribute, items)| render_attribute(condition, attribute, items))
        .unwrap_or_else(|| def.description.to_string());

    Some(answer)
}

fn render_attribute(
    condition: ConditionId,
    attribute: InfoAttribute,
    items: &[&str],
) -> String {
    let name = condition.display_name();
    let lead = match attribute {
        InfoAttribute::Symptoms => format!("Common symptoms of {name} include: "),
        InfoAttribute::RiskFactors => format!("Risk factors for {name} include: "),
        InfoAttribute::Prevention => format!("Prevention measures for {name} include: "),
        InfoAttribute::Treatment => format!("Treatment options for {name} include: "),
        InfoAttribute::EmergencySigns => format!("Emergency signs of a {name} include: "),
        InfoAttribute::DietRecommendations => format!("Dietary recommendations for {name}: "),
    };
    format!("{lead}{}", items.join(", "))
}
