//! Scenario inputs — the unit that is simulated and persisted.
//!
//! A scenario is a flat, fixed-shape record of business-cost assumptions.
//! The engine consumes it as-is; range checks live in `validate()` and are
//! only applied where a caller asks for them.

use crate::{
    error::{RoiError, RoiResult},
    types::ScenarioId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    #[serde(default)]
    pub scenario_name: String,
    pub monthly_invoice_volume: f64,
    pub num_ap_staff: f64,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    /// Fraction of manually processed invoices that contain an error.
    /// Conceptually in [0, 1]; the range is not enforced.
    pub error_rate_manual: f64,
    pub error_cost: f64,
    pub time_horizon_months: f64,
    #[serde(default)]
    pub one_time_implementation_cost: f64,
}

impl ScenarioInput {
    /// Numeric fields in declaration order, paired with their column names.
    /// Used by the store, the report and validation so the three never drift.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("monthly_invoice_volume", self.monthly_invoice_volume),
            ("num_ap_staff", self.num_ap_staff),
            ("avg_hours_per_invoice", self.avg_hours_per_invoice),
            ("hourly_wage", self.hourly_wage),
            ("error_rate_manual", self.error_rate_manual),
            ("error_cost", self.error_cost),
            ("time_horizon_months", self.time_horizon_months),
            ("one_time_implementation_cost", self.one_time_implementation_cost),
        ]
    }

    /// Boundary check for callers that want to reject bad input up front.
    ///
    /// Every numeric field must be finite. Every field except
    /// `error_rate_manual` must also be non-negative.
    pub fn validate(&self) -> RoiResult<()> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(RoiError::Validation {
                    field,
                    reason: format!("must be a finite number, got {value}"),
                });
            }
            if field != "error_rate_manual" && value < 0.0 {
                return Err(RoiError::Validation {
                    field,
                    reason: format!("must be >= 0, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// The name to show to humans. Empty names fall back to `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.scenario_name.is_empty() {
            fallback
        } else {
            &self.scenario_name
        }
    }
}

/// A saved scenario. Immutable once the store has assigned its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: ScenarioId,
    #[serde(flatten)]
    pub input: ScenarioInput,
}
