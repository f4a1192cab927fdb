use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reference cost profile of the automated process that manual
/// invoice handling is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutomationBaseline {
    /// Processing cost of one invoice once automated.
    pub automated_cost_per_invoice: f64,
    /// Error rate of the automated process.
    pub error_rate_auto: f64,
    /// Multiplier applied to raw monthly savings.
    pub min_roi_boost_factor: f64,
}

impl Default for AutomationBaseline {
    fn default() -> Self {
        Self {
            automated_cost_per_invoice: 0.20,
            error_rate_auto: 0.001,
            min_roi_boost_factor: 1.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoiConfig {
    pub baseline: AutomationBaseline,
}

impl RoiConfig {
    /// Load from the data/ directory.
    /// A missing `baseline.json` means the reference baseline is used.
    /// In tests, use RoiConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/baseline.json");
        if !Path::new(&path).exists() {
            log::debug!("No {path}; using reference automation baseline");
            return Ok(Self::default_test());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let baseline: AutomationBaseline = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::info!("Loaded automation baseline from {path}");
        Ok(Self { baseline })
    }

    /// Config with the reference baseline, for use in tests.
    pub fn default_test() -> Self {
        Self {
            baseline: AutomationBaseline::default(),
        }
    }
}
