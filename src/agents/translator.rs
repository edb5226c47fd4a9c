/// Translator agent - marks a draft as translated to English.
pub fn translate_to_english(text: &str) -> String {
    // Stub standing in for an LLM or translation API call.
    format!("[Translator -> EN] (translated) {text}")
}
