//! Human-readable field labels and error-map key construction.

/// Field id → display label. Ids without an entry fall back to the raw id.
const FIELD_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("openaiapikey", "OpenAI API Key"),
    ("openrouterapikey", "OpenRouter API Key"),
    ("elevenlabsapikey", "ElevenLabs API Key"),
    ("elevenlabsvoiceid", "ElevenLabs Voice ID"),
    ("model", "Model"),
    ("ollamamodel", "Ollama Model"),
    ("ollamaurl", "Ollama URL"),
    ("llamacppurl", "llama.cpp URL"),
    ("whispercppurl", "whisper.cpp URL"),
    ("coquiurl", "Coqui URL"),
    ("coquispeakerid", "Coqui Speaker ID"),
    ("temperature", "Temperature"),
    ("topp", "Top P"),
    ("maxtokens", "Max Tokens"),
    ("stability", "Stability"),
    ("similarityboost", "Similarity Boost"),
    ("executionthreshold", "Execution Threshold"),
    ("idleinterval", "Idle Interval"),
];

/// The display label for a field id, falling back to the id itself.
pub fn field_display_name(field: &str) -> &str {
    FIELD_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == field)
        .map_or(field, |(_, label)| label)
}

/// Error-map key for a provider-scoped field: `module.provider.field`.
pub fn provider_field_key(module: &str, provider: &str, field: &str) -> String {
    format!("{module}.{provider}.{field}")
}

/// Error-map key for a module-level field: `module.field`.
pub fn module_field_key(module: &str, field: &str) -> String {
    format!("{module}.{field}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
