//! End-to-end validation scenarios over realistic multi-module entity
//! configurations, exercised through the public crate surface only.

use kindred_core::validation::{
    validate_entity_config, validate_field, validate_provider_settings, ErrorMap,
};
use serde_json::json;

fn openai_key() -> String {
    format!("sk-{}", "x".repeat(48))
}

fn elevenlabs_key() -> String {
    "0123456789abcdef0123456789abcdef".to_string()
}

#[test]
fn fully_configured_entity_passes() {
    let config = json!({
        "backend": {
            "provider": "openai",
            "openai": {
                "openaiapikey": openai_key(),
                "model": "gpt-4",
                "temperature": 0.7,
                "topp": 0.9,
                "maxtokens": 1024,
            }
        },
        "tts": {
            "provider": "elevenlabs",
            "elevenlabs": {
                "elevenlabsapikey": elevenlabs_key(),
                "elevenlabsvoiceid": "EXAVITQu4vr4xnSDxMaL",
                "stability": 0.5,
                "similarityboost": 0.75,
            }
        },
        "stt": {
            "provider": "whispercpp",
            "whispercpp": { "whispercppurl": "http://localhost:8080" }
        },
        "vision": { "provider": "disabled" },
        "movement": { "executionthreshold": 0.6, "idleinterval": 30 },
    });

    let errors = validate_entity_config(&config, "char-amelia");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn broken_entity_reports_one_error_per_failing_path() {
    let config = json!({
        "backend": {
            "provider": "openai",
            // API key missing entirely, model blank, temperature out of range.
            "openai": { "model": "", "temperature": 9 }
        },
        "tts": {
            "provider": "elevenlabs",
            "elevenlabs": {
                "elevenlabsapikey": "wrong-shape",
                "elevenlabsvoiceid": "   ",
            }
        },
        "movement": { "executionthreshold": -0.2 },
    });

    let errors = validate_entity_config(&config, "char-amelia");
    let paths: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "backend.openai.model",
            "backend.openai.openaiapikey",
            "backend.openai.temperature",
            "movement.executionthreshold",
            "tts.elevenlabs.elevenlabsapikey",
            "tts.elevenlabs.elevenlabsvoiceid",
        ]
    );
    // Short-circuit: the whitespace voice id fails the blank check, not
    // the length check that comes after it.
    assert_eq!(
        errors["tts.elevenlabs.elevenlabsvoiceid"],
        "ElevenLabs Voice ID must not be blank"
    );
}

#[test]
fn switching_provider_changes_which_block_is_validated() {
    // The openai block is full of garbage, but ollama is the active
    // provider, so only the ollama block is checked.
    let config = json!({
        "backend": {
            "provider": "ollama",
            "openai": { "model": "", "temperature": 99 },
            "ollama": { "ollamaurl": "localhost:11434", "ollamamodel": "llama3" },
        }
    });
    assert!(validate_entity_config(&config, "char-amelia").is_empty());
}

#[test]
fn entity_and_field_validators_agree() {
    let config = json!({
        "backend": { "provider": "openai", "openai": { "topp": 7 } }
    });
    let entity_errors = validate_entity_config(&config, "char-amelia");
    let field_error = validate_field("backend", "openai", "topp", Some(&json!(7)));
    assert_eq!(
        entity_errors.get("backend.openai.topp"),
        field_error.as_ref()
    );
}

#[test]
fn entity_and_provider_validators_agree() {
    let settings = json!({ "coquiurl": "nope nope", "coquispeakerid": "lady" });
    let provider_errors =
        validate_provider_settings("tts", "coqui", settings.as_object().unwrap());

    let config = json!({ "tts": { "provider": "coqui", "coqui": settings } });
    let entity_errors = validate_entity_config(&config, "char-amelia");

    assert_eq!(provider_errors.len(), entity_errors.len());
    assert_eq!(
        provider_errors.get("coquiurl"),
        entity_errors.get("tts.coqui.coquiurl")
    );
}

#[test]
fn repeated_runs_serialize_byte_identically() {
    let config = json!({
        "backend": { "provider": "openai", "openai": {} },
        "tts": { "provider": "elevenlabs", "elevenlabs": {} },
    });
    let runs: Vec<String> = (0..3)
        .map(|_| {
            serde_json::to_string(&validate_entity_config(&config, "char-amelia")).unwrap()
        })
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn forward_compatible_config_from_newer_ui_passes() {
    // A config mentioning modules and providers this registry has never
    // heard of must validate cleanly.
    let config = json!({
        "backend": { "provider": "openai", "openai": { "openaiapikey": openai_key(), "model": "gpt-4" } },
        "haptics": { "provider": "buzzco", "buzzco": { "intensity": "maximum" } },
        "backend2": 17,
    });
    let errors: ErrorMap = validate_entity_config(&config, "char-amelia");
    assert!(errors.is_empty());
}
