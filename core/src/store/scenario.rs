//! Store methods for saved scenarios.
//!
//! The `scenarios` table is append-only: rows are inserted and read,
//! never updated or deleted.

use crate::{
    error::{RoiError, RoiResult},
    scenario::{ScenarioInput, ScenarioRecord},
    types::ScenarioId,
};
use rusqlite::{params, OptionalExtension, Row};

use super::ScenarioStore;

const SELECT_SCENARIO: &str = "SELECT id, scenario_name, monthly_invoice_volume, num_ap_staff,
        avg_hours_per_invoice, hourly_wage, error_rate_manual, error_cost,
        time_horizon_months, one_time_implementation_cost
     FROM scenarios";

impl ScenarioStore {
    /// Persist a scenario and return its newly assigned identity.
    ///
    /// SQLite binds NaN as NULL, so a NaN field is rejected as a
    /// `Validation` error before touching the table. Infinities are stored.
    pub fn create(&self, input: &ScenarioInput) -> RoiResult<ScenarioId> {
        if let Some((field, _)) = input.numeric_fields().into_iter().find(|(_, v)| v.is_nan()) {
            return Err(RoiError::Validation {
                field,
                reason: "NaN cannot be stored".to_string(),
            });
        }
        self.conn.execute(
            "INSERT INTO scenarios (
                scenario_name, monthly_invoice_volume, num_ap_staff,
                avg_hours_per_invoice, hourly_wage, error_rate_manual, error_cost,
                time_horizon_months, one_time_implementation_cost
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                &input.scenario_name,
                input.monthly_invoice_volume,
                input.num_ap_staff,
                input.avg_hours_per_invoice,
                input.hourly_wage,
                input.error_rate_manual,
                input.error_cost,
                input.time_horizon_months,
                input.one_time_implementation_cost,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::info!("Saved scenario {id} ('{}')", input.scenario_name);
        Ok(id)
    }

    /// All saved scenarios, newest identity first.
    pub fn list(&self) -> RoiResult<Vec<ScenarioRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_SCENARIO} ORDER BY id DESC"))?;
        let records = stmt
            .query_map([], scenario_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn get_by_id(&self, id: ScenarioId) -> RoiResult<ScenarioRecord> {
        self.conn
            .query_row(
                &format!("{SELECT_SCENARIO} WHERE id = ?1"),
                params![id],
                scenario_from_row,
            )
            .optional()?
            .ok_or(RoiError::NotFound { id })
    }

    /// Number of saved scenarios (for tests and summaries).
    pub fn scenario_count(&self) -> RoiResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scenarios", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn scenario_from_row(row: &Row<'_>) -> rusqlite::Result<ScenarioRecord> {
    Ok(ScenarioRecord {
        id: row.get(0)?,
        input: ScenarioInput {
            scenario_name: row.get(1)?,
            monthly_invoice_volume: row.get(2)?,
            num_ap_staff: row.get(3)?,
            avg_hours_per_invoice: row.get(4)?,
            hourly_wage: row.get(5)?,
            error_rate_manual: row.get(6)?,
            error_cost: row.get(7)?,
            time_horizon_months: row.get(8)?,
            one_time_implementation_cost: row.get(9)?,
        },
    })
}
