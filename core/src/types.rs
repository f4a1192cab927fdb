//! Shared primitive types used across the crate.

/// Identity assigned by the store when a scenario is saved.
/// Strictly increasing, never reused.
pub type ScenarioId = i64;
