//! Field validation rule variants and their evaluation logic.
//!
//! Each rule is a pure check from an optional JSON value to either a pass
//! (`None`) or a human-readable message (`Some`). Composite rules
//! (`PositiveNumber`, `Range`) run the numeric check first, so a
//! non-numeric input surfaces the numeric-type message rather than two
//! contradictory ones. Rules never panic on malformed values.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Matches a URL with optional scheme, a hostname / IPv4 literal /
/// `localhost`, optional port, and optional path.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:localhost|\d{1,3}(?:\.\d{1,3}){3}|[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+)(?::\d{1,5})?(?:/\S*)?$",
    )
    .expect("valid regex")
});

/// Single `@` separating a non-whitespace local part from a dotted domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Known API key shapes per provider id. Providers without an entry are
/// not shape-checked; their keys always pass.
static API_KEY_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    let mut patterns = HashMap::new();
    patterns.insert(
        "openai",
        Regex::new(r"^sk-[A-Za-z0-9_-]{32,}$").expect("valid regex"),
    );
    patterns.insert(
        "openrouter",
        Regex::new(r"^sk-or-[A-Za-z0-9_-]{32,}$").expect("valid regex"),
    );
    patterns.insert(
        "elevenlabs",
        Regex::new(r"^[a-f0-9]{32}$").expect("valid regex"),
    );
    patterns
});

/// A single field validation rule.
///
/// Rule parameters are carried in the variants themselves, so a malformed
/// rule (say, a range with string bounds) is unrepresentable rather than a
/// runtime error. Variants serialize with a `rule` tag, which keeps the
/// registry inspectable as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present: not missing, null, or the empty string.
    Required,
    /// A string value must contain at least one non-whitespace character.
    NonEmpty,
    /// A non-empty string value must look like a URL.
    Url,
    /// A non-empty string value must look like an email address.
    Email,
    /// A present value must be numerically coercible.
    Number,
    /// `Number`, then the coerced value must be greater than zero.
    PositiveNumber,
    /// `Number`, then the coerced value must fall within `[min, max]`.
    Range { min: f64, max: f64 },
    /// A present string must have at least `min` characters.
    MinLength { min: usize },
    /// A present string must have at most `max` characters.
    MaxLength { max: usize },
    /// A non-empty string must match the provider's registered key shape.
    ApiKeyShape { provider: &'static str },
}

impl Rule {
    /// Check a field value against this rule.
    ///
    /// `value` is the raw JSON value from the settings tree (`None` when
    /// the key is absent) and `label` is the human-readable field name
    /// interpolated into messages. Returns `None` on pass.
    pub fn check(&self, value: Option<&Value>, label: &str) -> Option<String> {
        match *self {
            Rule::Required => check_required(value, label),
            Rule::NonEmpty => check_non_empty(value, label),
            Rule::Url => check_url(value, label),
            Rule::Email => check_email(value, label),
            Rule::Number => check_number(value, label),
            Rule::PositiveNumber => check_positive_number(value, label),
            Rule::Range { min, max } => check_range(value, label, min, max),
            Rule::MinLength { min } => check_min_length(value, label, min),
            Rule::MaxLength { max } => check_max_length(value, label, max),
            Rule::ApiKeyShape { provider } => check_api_key_shape(value, label, provider),
        }
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// True when the value counts as absent: missing, JSON null, or `""`.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// The string content of a present, non-empty string value.
fn present_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Coerce a JSON number or numeric string to `f64`.
///
/// Settings forms submit numbers as strings, so both shapes coerce.
/// Anything else (bool, array, object) does not. Strings that parse to
/// non-finite values ("NaN", "inf") do not count as numeric: they would
/// otherwise slip through sign and range checks.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Per-rule checks
// ---------------------------------------------------------------------------

fn check_required(value: Option<&Value>, label: &str) -> Option<String> {
    is_absent(value).then(|| format!("{label} is required"))
}

fn check_non_empty(value: Option<&Value>, label: &str) -> Option<String> {
    match value.and_then(Value::as_str) {
        Some(s) if s.trim().is_empty() => Some(format!("{label} must not be blank")),
        _ => None,
    }
}

fn check_url(value: Option<&Value>, label: &str) -> Option<String> {
    let s = present_text(value)?;
    (!URL_RE.is_match(s.trim())).then(|| format!("{label} must be a valid URL"))
}

fn check_email(value: Option<&Value>, label: &str) -> Option<String> {
    let s = present_text(value)?;
    (!EMAIL_RE.is_match(s.trim())).then(|| format!("{label} must be a valid email address"))
}

fn check_number(value: Option<&Value>, label: &str) -> Option<String> {
    if is_absent(value) {
        return None;
    }
    let value = value?;
    coerce_number(value)
        .is_none()
        .then(|| format!("{label} must be a number"))
}

fn check_positive_number(value: Option<&Value>, label: &str) -> Option<String> {
    if let Some(message) = check_number(value, label) {
        return Some(message);
    }
    let n = value.and_then(coerce_number)?;
    (n <= 0.0).then(|| format!("{label} must be greater than 0"))
}

fn check_range(value: Option<&Value>, label: &str, min: f64, max: f64) -> Option<String> {
    if let Some(message) = check_number(value, label) {
        return Some(message);
    }
    let n = value.and_then(coerce_number)?;
    (!(min..=max).contains(&n)).then(|| format!("{label} must be between {min} and {max}"))
}

fn check_min_length(value: Option<&Value>, label: &str, min: usize) -> Option<String> {
    let s = present_text(value)?;
    (s.chars().count() < min).then(|| format!("{label} must be at least {min} characters"))
}

fn check_max_length(value: Option<&Value>, label: &str, max: usize) -> Option<String> {
    let s = present_text(value)?;
    (s.chars().count() > max).then(|| format!("{label} must be at most {max} characters"))
}

fn check_api_key_shape(value: Option<&Value>, label: &str, provider: &str) -> Option<String> {
    let s = present_text(value)?;
    let pattern = API_KEY_PATTERNS.get(provider)?;
    (!pattern.is_match(s.trim())).then(|| format!("{label} is not a valid {provider} API key"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
