//! Kindred domain core.
//!
//! Pure domain logic for the kindred companion platform: the configuration
//! validation engine (module / provider / field rule registry plus the
//! escalating validators) and character naming rules.
//!
//! This crate has no database, network, or UI dependencies, so it can be
//! consumed by the API layer and any future CLI tooling alike. Nothing in
//! here mutates its input; every entry point is a pure function over the
//! static rule registry.

pub mod error;
pub mod naming;
pub mod validation;
