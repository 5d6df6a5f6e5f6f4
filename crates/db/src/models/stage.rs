//! Construction stage row model and write DTOs.

use gantry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `construction_stages` table.
///
/// `start_date`/`end_date` arrive already rendered by the storage
/// projection as `YYYY-MM-DDTHH:MM:SSZ` (UTC, second precision), so the
/// wire representation is fixed at the query, not in handler code.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionStage {
    pub id: DbId,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: Option<f64>,
    pub duration_unit: String,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: String,
}

/// Caller payload for create and full-replace update.
///
/// `duration` is accepted for wire compatibility but never trusted: the
/// record pipeline always recomputes it from the dates. `durationUnit`
/// and `status` stay free-form strings here because out-of-range values
/// are normalized to defaults rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionStageInput {
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: Option<f64>,
    pub duration_unit: Option<String>,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: Option<String>,
}

/// A validated, normalized, derivation-complete record ready to be
/// written. Built by the record pipeline; the repository binds it as-is.
#[derive(Debug, Clone)]
pub struct NewConstructionStage {
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub duration: Option<f64>,
    pub duration_unit: &'static str,
    pub color: Option<String>,
    pub external_id: Option<String>,
    pub status: &'static str,
}
