//! The ROI simulation engine.
//!
//! EVALUATION ORDER (fixed, never reordered):
//!   1. labor_cost_manual
//!   2. auto_cost
//!   3. error_savings
//!   4. raw_monthly_savings (boosted)
//!   5. monthly_savings     (floored at 1)
//!   6. cumulative_savings
//!   7. net_savings
//!   8. payback_months
//!   9. roi_percentage      (non-finite coerced to 0)
//!
//! RULES:
//!   - simulate() is pure: no I/O, no store access, no shared state.
//!   - The engine never validates input. Non-finite values propagate
//!     into the result instead of raising an error.
//!   - Values stay f64 here. Two-decimal text is produced by display().

use crate::{config::{AutomationBaseline, RoiConfig}, scenario::ScenarioInput};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Lower bound for reported monthly savings.
pub const MONTHLY_SAVINGS_FLOOR: f64 = 1.0;

/// Intermediate monthly figures, steps 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub labor_cost_manual: f64,
    pub auto_cost: f64,
    pub error_savings: f64,
    pub raw_monthly_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub monthly_savings: f64,
    pub cumulative_savings: f64,
    pub net_savings: f64,
    pub payback_months: f64,
    pub roi_percentage: f64,
}

/// The externally visible form of a result: every field as fixed
/// two-decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub monthly_savings: String,
    pub cumulative_savings: String,
    pub net_savings: String,
    pub payback_months: String,
    pub roi_percentage: String,
}

impl SimulationResult {
    /// Fields in output order, paired with their names.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("monthly_savings", self.monthly_savings),
            ("cumulative_savings", self.cumulative_savings),
            ("net_savings", self.net_savings),
            ("payback_months", self.payback_months),
            ("roi_percentage", self.roi_percentage),
        ]
    }

    /// True if any field is NaN or infinite.
    pub fn is_degenerate(&self) -> bool {
        self.fields().iter().any(|(_, v)| !v.is_finite())
    }

    pub fn display(&self) -> DisplayResult {
        DisplayResult {
            monthly_savings: format_fixed2(self.monthly_savings),
            cumulative_savings: format_fixed2(self.cumulative_savings),
            net_savings: format_fixed2(self.net_savings),
            payback_months: format_fixed2(self.payback_months),
            roi_percentage: format_fixed2(self.roi_percentage),
        }
    }
}

impl DisplayResult {
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("monthly_savings", self.monthly_savings.as_str()),
            ("cumulative_savings", self.cumulative_savings.as_str()),
            ("net_savings", self.net_savings.as_str()),
            ("payback_months", self.payback_months.as_str()),
            ("roi_percentage", self.roi_percentage.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoiEngine {
    baseline: AutomationBaseline,
}

impl RoiEngine {
    pub fn new(baseline: AutomationBaseline) -> Self {
        Self { baseline }
    }

    pub fn from_config(config: &RoiConfig) -> Self {
        Self::new(config.baseline)
    }

    pub fn baseline(&self) -> &AutomationBaseline {
        &self.baseline
    }

    /// Steps 1–4: monthly manual cost against the automated baseline.
    pub fn breakdown(&self, input: &ScenarioInput) -> CostBreakdown {
        let b = &self.baseline;
        let labor_cost_manual = input.num_ap_staff
            * input.hourly_wage
            * input.avg_hours_per_invoice
            * input.monthly_invoice_volume;
        let auto_cost = input.monthly_invoice_volume * b.automated_cost_per_invoice;
        let error_savings = (input.error_rate_manual - b.error_rate_auto)
            * input.monthly_invoice_volume
            * input.error_cost;
        let raw_monthly_savings =
            (labor_cost_manual + error_savings - auto_cost) * b.min_roi_boost_factor;

        CostBreakdown {
            labor_cost_manual,
            auto_cost,
            error_savings,
            raw_monthly_savings,
        }
    }

    pub fn simulate(&self, input: &ScenarioInput) -> SimulationResult {
        let breakdown = self.breakdown(input);

        // f64::max drops a NaN operand; NaN must reach the result.
        let monthly_savings = if breakdown.raw_monthly_savings.is_nan() {
            f64::NAN
        } else {
            breakdown.raw_monthly_savings.max(MONTHLY_SAVINGS_FLOOR)
        };
        let cumulative_savings = monthly_savings * input.time_horizon_months;
        let net_savings = cumulative_savings - input.one_time_implementation_cost;
        let payback_months = input.one_time_implementation_cost / monthly_savings;
        let roi = (net_savings / input.one_time_implementation_cost) * 100.0;
        let roi_percentage = if roi.is_finite() { roi } else { 0.0 };

        let result = SimulationResult {
            monthly_savings,
            cumulative_savings,
            net_savings,
            payback_months,
            roi_percentage,
        };
        if result.is_degenerate() {
            log::debug!(
                "Degenerate simulation for '{}': {:?}",
                input.scenario_name,
                result
            );
        }
        result
    }
}

/// Render a value with exactly two fraction digits, rounding half away
/// from zero on the exact binary value. Non-finite values render as
/// `NaN`, `Infinity` or `-Infinity`.
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            if rounded.is_zero() {
                // No "-0.00".
                rounded.set_sign_positive(true);
            }
            rounded.to_string()
        }
        // Beyond Decimal's range; f64 formatting is exact enough there.
        None => format!("{value:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(format_fixed2(33990.0), "33990.00");
        assert_eq!(format_fixed2(1.471_020_888_496_616_6), "1.47");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(-2.5), "-2.50");
        assert_eq!(format_fixed2(0.0), "0.00");
    }

    #[test]
    fn fixed2_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989..., so it rounds down.
        assert_eq!(format_fixed2(1.005), "1.00");
    }

    #[test]
    fn fixed2_never_prints_negative_zero() {
        assert_eq!(format_fixed2(-0.0), "0.00");
        assert_eq!(format_fixed2(-0.001), "0.00");
    }

    #[test]
    fn fixed2_non_finite() {
        assert_eq!(format_fixed2(f64::NAN), "NaN");
        assert_eq!(format_fixed2(f64::INFINITY), "Infinity");
        assert_eq!(format_fixed2(f64::NEG_INFINITY), "-Infinity");
    }
}
