//! Report assembly — a scenario's inputs paired with its computed results.
//!
//! The core only guarantees the values. Layout, fonts and delivery belong
//! to whatever renders the report; `render_text()` is the plain fallback.

use crate::{
    engine::{DisplayResult, RoiEngine},
    error::{RoiError, RoiResult},
    scenario::ScenarioInput,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const REPORT_TITLE: &str = "Invoicing ROI Simulator Report";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub email: String,
    pub scenario: ScenarioInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub title: String,
    pub email: String,
    pub scenario_name: String,
    pub generated_at: DateTime<Utc>,
    pub input: ScenarioInput,
    pub results: DisplayResult,
    pub filename: String,
}

/// Simulate `request.scenario` and bundle everything a renderer needs.
pub fn build_report(engine: &RoiEngine, request: &ReportRequest) -> RoiResult<ScenarioReport> {
    build_report_at(engine, request, Utc::now())
}

/// As `build_report`, with a fixed generation time.
pub fn build_report_at(
    engine: &RoiEngine,
    request: &ReportRequest,
    generated_at: DateTime<Utc>,
) -> RoiResult<ScenarioReport> {
    if request.email.trim().is_empty() {
        return Err(RoiError::Validation {
            field: "email",
            reason: "email is required".to_string(),
        });
    }

    let input = request.scenario.clone();
    let results = engine.simulate(&input).display();
    let filename = format!("{}.txt", safe_file_stem(input.display_name("report")));
    log::info!(
        "Built report '{}' for {}",
        input.display_name("N/A"),
        request.email
    );

    Ok(ScenarioReport {
        title: REPORT_TITLE.to_string(),
        email: request.email.clone(),
        scenario_name: input.display_name("N/A").to_string(),
        generated_at,
        input,
        results,
        filename,
    })
}

impl ScenarioReport {
    /// Human-readable artifact: header, raw inputs, then currency-prefixed results.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(self.title.clone());
        lines.push(format!(
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(format!("Prepared for: {}", self.email));
        lines.push(String::new());
        lines.push(format!("Scenario: {}", self.scenario_name));
        for (field, value) in self.input.numeric_fields() {
            lines.push(format!("{}: {value}", label(field)));
        }
        lines.push(String::new());
        for (field, value) in self.results.fields() {
            lines.push(format!("{}: ${value}", label(field)));
        }
        lines.join("\n")
    }
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

/// Scenario names are free-form; the filename must stay a single path
/// component. Separators, `..` and control characters become `_`.
fn safe_file_stem(name: &str) -> String {
    let stem: String = name
        .replace("..", "_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.trim().is_empty() {
        "report".to_string()
    } else {
        stem
    }
}
