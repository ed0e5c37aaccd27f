//! Declarative configuration validation engine.
//!
//! Validates per-module, per-provider settings trees against a static rule
//! registry and produces dotted-path keyed error maps. The registry is the
//! single source of truth for "what is valid": settings forms enumerate it
//! to learn which fields carry rules, and new modules or providers are
//! added by extending its data alone.
//!
//! Unknown modules, providers, and fields are tolerated, never rejected —
//! the UI relies on this forward compatibility with registry gaps.

pub mod display;
pub mod registry;
pub mod rules;
pub mod validator;

pub use display::field_display_name;
pub use registry::{FieldRules, ModuleSchema, ProviderSchema, PROVIDER_DISABLED, REGISTRY};
pub use rules::Rule;
pub use validator::{
    validate_entity_config, validate_field, validate_provider_settings, ErrorMap,
};
