//! Character name validation.
//!
//! Character names double as asset directory names and error-map prefixes,
//! so the allowed alphabet is deliberately narrow.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Allowed character-name alphabet.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Validate a character name against format and uniqueness constraints.
///
/// `current_name` is the name the character already holds, if any: renaming
/// a character to its own name is allowed even though that name appears in
/// `existing_names`. Duplicates of *other* characters are a
/// [`CoreError::Conflict`]; format problems are [`CoreError::Validation`].
pub fn validate_character_name(
    name: &str,
    existing_names: &[String],
    current_name: Option<&str>,
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Character name must not be empty".to_string(),
        ));
    }
    if !NAME_RE.is_match(name) {
        return Err(CoreError::Validation(
            "Character name may only contain letters, numbers, hyphens and underscores"
                .to_string(),
        ));
    }
    if current_name != Some(name) && existing_names.iter().any(|existing| existing == name) {
        return Err(CoreError::Conflict(format!(
            "A character named '{name}' already exists"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
