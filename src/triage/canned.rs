/// Prepared answers for the suggested prompts offered by the chat client.
/// Keys are lower-case and trimmed; lookup is exact after the same normalization.
static SUGGESTED_RESPONSES: [(&str, &str); 5] = [
    (
        "i have chest pain",
        "Chest pain can be caused by heart issues (like angina or heart attack), lung problems, \
         digestive issues, or muscle strain. Seek emergency medical attention for severe chest \
         pain, especially with shortness of breath or pain radiating to arm/jaw. Does the pain \
         come and go or is it constant?",
    ),
    (
        "feeling dizzy",
        "Dizziness may be caused by inner ear problems, dehydration, blood pressure issues, or \
         anxiety. For persistent dizziness or if accompanied by severe headache or vision \
         changes, please seek medical attention. Are you experiencing any other symptoms with \
         your dizziness?",
    ),
    (
        "stomach hurts",
        "Stomach pain could be indigestion, gastritis, food poisoning, or something more \
         serious like ulcers or appendicitis. The location and timing of your pain can help \
         determine the cause. Can you describe where exactly the pain is located?",
    ),
    (
        "shortness of breath",
        "Shortness of breath may result from respiratory issues, heart problems, anxiety, or \
         overexertion. Sudden severe breathing difficulty, especially with chest pain, could be \
         an emergency requiring immediate medical attention. Is this a new symptom for you?",
    ),
    (
        "how to treat gastritis?",
        "Gastritis treatment includes medications like antacids or acid reducers, avoiding \
         trigger foods (spicy, acidic), eating smaller meals, and avoiding alcohol and NSAIDs. \
         For persistent symptoms, please consult with your healthcare provider for proper \
         diagnosis and treatment plan.",
    ),
];

/// Prepared answer if `message` is exactly one of the suggested prompts.
pub fn suggested_response(message: &str) -> Option<&'static str> {
    let key = message.trim().to_lowercase();
    SUGGESTED_RESPONSES
        .iter()
        .find(|(prompt, _)| *prompt == key)
        .map(|(_, answer)| *answer)
}
