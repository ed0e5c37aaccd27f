//! Static validation rule registry.
//!
//! Nested tables mapping module id → provider id → field id → ordered rule
//! list, plus module-level (provider-independent) fields. This is the
//! single source of truth for which rules apply where: adding a module or
//! provider is a data-only change in this file, and settings forms can
//! enumerate the tables directly to discover which fields carry rules.
//!
//! The registry is process-wide constant data. It is never mutated and is
//! safe to read from any number of threads.

use serde::Serialize;

use super::rules::Rule;

/// Provider sentinel meaning "module switched off". Disabled modules are
/// never validated.
pub const PROVIDER_DISABLED: &str = "disabled";

/// Ordered rule list for one field.
///
/// Order is significant: validators stop at the first failing rule, so
/// presence checks come before shape checks.
#[derive(Debug, Serialize)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// Field rules scoped to one (module, provider) pair.
#[derive(Debug, Serialize)]
pub struct ProviderSchema {
    pub provider: &'static str,
    pub fields: &'static [FieldRules],
}

/// Rules for one module: per-provider schemas plus module-level fields
/// that apply regardless of which provider is active.
#[derive(Debug, Serialize)]
pub struct ModuleSchema {
    pub module: &'static str,
    pub providers: &'static [ProviderSchema],
    pub module_fields: &'static [FieldRules],
}

/// Look up a module's schema. Unknown modules return `None`, which the
/// validators treat as an implicit pass.
pub fn module_schema(module: &str) -> Option<&'static ModuleSchema> {
    REGISTRY.iter().find(|schema| schema.module == module)
}

impl ModuleSchema {
    /// The schema for one of this module's providers, if registered.
    pub fn provider(&self, provider: &str) -> Option<&ProviderSchema> {
        self.providers.iter().find(|p| p.provider == provider)
    }
}

impl ProviderSchema {
    /// The rule list for one of this provider's fields, if declared.
    pub fn field(&self, field: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// The full rule registry, one entry per configurable module.
pub static REGISTRY: &[ModuleSchema] = &[
    ModuleSchema {
        module: "backend",
        providers: &[
            ProviderSchema {
                provider: "openai",
                fields: &[
                    FieldRules {
                        field: "openaiapikey",
                        rules: &[Rule::Required, Rule::ApiKeyShape { provider: "openai" }],
                    },
                    FieldRules {
                        field: "model",
                        rules: &[Rule::Required],
                    },
                    FieldRules {
                        field: "temperature",
                        rules: &[Rule::Range { min: 0.0, max: 2.0 }],
                    },
                    FieldRules {
                        field: "topp",
                        rules: &[Rule::Range { min: 0.0, max: 1.0 }],
                    },
                    FieldRules {
                        field: "maxtokens",
                        rules: &[Rule::PositiveNumber],
                    },
                ],
            },
            ProviderSchema {
                provider: "openrouter",
                fields: &[
                    FieldRules {
                        field: "openrouterapikey",
                        rules: &[
                            Rule::Required,
                            Rule::ApiKeyShape { provider: "openrouter" },
                        ],
                    },
                    FieldRules {
                        field: "model",
                        rules: &[Rule::Required],
                    },
                    FieldRules {
                        field: "temperature",
                        rules: &[Rule::Range { min: 0.0, max: 2.0 }],
                    },
                ],
            },
            ProviderSchema {
                provider: "ollama",
                fields: &[
                    FieldRules {
                        field: "ollamaurl",
                        rules: &[Rule::Required, Rule::Url],
                    },
                    FieldRules {
                        field: "ollamamodel",
                        rules: &[Rule::Required],
                    },
                ],
            },
            ProviderSchema {
                provider: "llamacpp",
                fields: &[FieldRules {
                    field: "llamacppurl",
                    rules: &[Rule::Required, Rule::Url],
                }],
            },
        ],
        module_fields: &[],
    },
    ModuleSchema {
        module: "tts",
        providers: &[
            ProviderSchema {
                provider: "elevenlabs",
                fields: &[
                    FieldRules {
                        field: "elevenlabsapikey",
                        rules: &[
                            Rule::Required,
                            Rule::ApiKeyShape { provider: "elevenlabs" },
                        ],
                    },
                    FieldRules {
                        field: "elevenlabsvoiceid",
                        rules: &[Rule::Required, Rule::NonEmpty, Rule::MinLength { min: 8 }],
                    },
                    FieldRules {
                        field: "stability",
                        rules: &[Rule::Range { min: 0.0, max: 1.0 }],
                    },
                    FieldRules {
                        field: "similarityboost",
                        rules: &[Rule::Range { min: 0.0, max: 1.0 }],
                    },
                ],
            },
            ProviderSchema {
                provider: "coqui",
                fields: &[
                    FieldRules {
                        field: "coquiurl",
                        rules: &[Rule::Required, Rule::Url],
                    },
                    FieldRules {
                        field: "coquispeakerid",
                        rules: &[Rule::MaxLength { max: 64 }],
                    },
                ],
            },
        ],
        module_fields: &[],
    },
    ModuleSchema {
        module: "stt",
        providers: &[
            ProviderSchema {
                provider: "whispercpp",
                fields: &[FieldRules {
                    field: "whispercppurl",
                    rules: &[Rule::Required, Rule::Url],
                }],
            },
            ProviderSchema {
                provider: "openaiwhisper",
                fields: &[FieldRules {
                    field: "openaiapikey",
                    rules: &[Rule::Required, Rule::ApiKeyShape { provider: "openai" }],
                }],
            },
        ],
        module_fields: &[],
    },
    ModuleSchema {
        module: "vision",
        providers: &[
            ProviderSchema {
                provider: "openai",
                fields: &[
                    FieldRules {
                        field: "openaiapikey",
                        rules: &[Rule::Required, Rule::ApiKeyShape { provider: "openai" }],
                    },
                    FieldRules {
                        field: "model",
                        rules: &[Rule::Required],
                    },
                ],
            },
            ProviderSchema {
                provider: "llamacpp",
                fields: &[FieldRules {
                    field: "llamacppurl",
                    rules: &[Rule::Required, Rule::Url],
                }],
            },
        ],
        module_fields: &[],
    },
    ModuleSchema {
        module: "movement",
        providers: &[],
        module_fields: &[
            FieldRules {
                field: "executionthreshold",
                rules: &[Rule::Range { min: 0.0, max: 1.0 }],
            },
            FieldRules {
                field: "idleinterval",
                rules: &[Rule::PositiveNumber],
            },
        ],
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_module_resolves() {
        assert!(module_schema("backend").is_some());
        assert!(module_schema("movement").is_some());
    }

    #[test]
    fn unknown_module_is_none() {
        assert!(module_schema("hologram").is_none());
    }

    #[test]
    fn provider_lookup_within_module() {
        let backend = module_schema("backend").unwrap();
        assert!(backend.provider("openai").is_some());
        assert!(backend.provider("elevenlabs").is_none());
    }

    #[test]
    fn disabled_sentinel_is_not_a_provider() {
        let backend = module_schema("backend").unwrap();
        assert!(backend.provider(PROVIDER_DISABLED).is_none());
    }

    #[test]
    fn field_lookup_within_provider() {
        let openai = module_schema("backend").unwrap().provider("openai").unwrap();
        assert!(openai.field("temperature").is_some());
        assert!(openai.field("nonexistent").is_none());
    }

    #[test]
    fn presence_rules_come_first() {
        // Short-circuit ordering: a missing key must report "required",
        // not a shape mismatch.
        let openai = module_schema("backend").unwrap().provider("openai").unwrap();
        let key_rules = openai.field("openaiapikey").unwrap();
        assert_eq!(key_rules.rules[0], Rule::Required);
    }

    #[test]
    fn movement_is_module_level_only() {
        let movement = module_schema("movement").unwrap();
        assert!(movement.providers.is_empty());
        assert_eq!(movement.module_fields.len(), 2);
    }

    #[test]
    fn registry_serializes_to_json() {
        let value = serde_json::to_value(REGISTRY).unwrap();
        let backend = &value[0];
        assert_eq!(backend["module"], "backend");
        assert_eq!(
            backend["providers"][0]["fields"][0]["rules"][0]["rule"],
            "required"
        );
    }
}
