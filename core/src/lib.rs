//! Invoicing ROI simulator core.
//!
//! Two components:
//!   - engine: pure ROI formula, scenario inputs -> savings metrics
//!   - store:  append-only SQLite collection of saved scenario inputs
//!
//! Report assembly pairs the two outputs for an external renderer.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod scenario;
pub mod store;
pub mod types;
