//! Validation entry points: single field, one provider's settings, and a
//! whole entity configuration tree.
//!
//! All three are pure functions over the static registry. Missing registry
//! entries pass silently at every level, so a configuration written by a
//! newer (or older) UI than this registry never fails validation for
//! structure alone.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::display::{field_display_name, module_field_key, provider_field_key};
use super::registry::{self, FieldRules, PROVIDER_DISABLED};

/// Dotted path → first failing rule's message. Passing paths are omitted
/// entirely. A `BTreeMap` keeps iteration order stable, so repeated runs
/// over the same input serialize identically.
pub type ErrorMap = BTreeMap<String, String>;

/// Validate a single field value.
///
/// Returns `None` on pass. A miss at any registry level (unknown module,
/// provider, or field) also passes: missing configuration is never itself
/// an error at this granularity.
pub fn validate_field(
    module: &str,
    provider: &str,
    field: &str,
    value: Option<&Value>,
) -> Option<String> {
    let field_rules = registry::module_schema(module)?
        .provider(provider)?
        .field(field)?;
    run_rules(field_rules, value)
}

/// Validate every declared field of one (module, provider) pair.
///
/// Iteration is schema-driven: declared fields absent from `settings`
/// still run their rules (so `Required` can fire), while keys present in
/// `settings` but not declared in the schema are ignored. Keys in the
/// returned map are unqualified field ids.
pub fn validate_provider_settings(
    module: &str,
    provider: &str,
    settings: &Map<String, Value>,
) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let Some(schema) = registry::module_schema(module).and_then(|m| m.provider(provider)) else {
        return errors;
    };
    for field_rules in schema.fields {
        if let Some(message) = run_rules(field_rules, settings.get(field_rules.field)) {
            errors.insert(field_rules.field.to_string(), message);
        }
    }
    errors
}

/// Validate an entire entity configuration tree.
///
/// Walks every top-level module entry in `config`:
///
/// - non-object entries and unknown modules are skipped;
/// - a module whose `provider` is the `"disabled"` sentinel is skipped
///   entirely;
/// - for an active provider with a nested settings object under its id,
///   results from [`validate_provider_settings`] are re-keyed as
///   `module.provider.field`;
/// - module-level fields run only when a value is present and is not an
///   object, array, or null (those positions hold nested provider blocks,
///   not scalar settings), keyed as `module.field`.
///
/// `entity_id` is logged for context only; it never appears in error keys.
pub fn validate_entity_config(config: &Value, entity_id: &str) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let Some(modules) = config.as_object() else {
        return errors;
    };

    for (module_id, module_config) in modules {
        let Some(module_obj) = module_config.as_object() else {
            continue;
        };
        let Some(schema) = registry::module_schema(module_id) else {
            continue;
        };

        let active_provider = module_obj.get("provider").and_then(Value::as_str);
        if active_provider == Some(PROVIDER_DISABLED) {
            continue;
        }

        if let Some(provider_id) = active_provider {
            if let Some(settings) = module_obj.get(provider_id).and_then(Value::as_object) {
                for (field, message) in validate_provider_settings(module_id, provider_id, settings)
                {
                    errors.insert(provider_field_key(module_id, provider_id, &field), message);
                }
            }
        }

        for field_rules in schema.module_fields {
            let Some(value) = module_obj.get(field_rules.field) else {
                // Unlike provider fields, absent module-level values are
                // skipped rather than run through Required.
                continue;
            };
            if matches!(value, Value::Object(_) | Value::Array(_) | Value::Null) {
                continue;
            }
            if let Some(message) = run_rules(field_rules, Some(value)) {
                errors.insert(module_field_key(module_id, field_rules.field), message);
            }
        }
    }

    tracing::debug!(entity_id, error_count = errors.len(), "validated entity configuration");
    errors
}

/// Run a field's rules in declared order; the first failure wins.
fn run_rules(field_rules: &FieldRules, value: Option<&Value>) -> Option<String> {
    let label = field_display_name(field_rules.field);
    field_rules
        .rules
        .iter()
        .find_map(|rule| rule.check(value, label))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
