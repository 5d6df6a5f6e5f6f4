//! Handlers for construction stage records.
//!
//! Create and update run one shared pipeline (`prepare`): fail-fast
//! field validation, enum normalization, duration derivation, then the
//! write. Keeping the pipeline in one place is what guarantees the two
//! paths can never drift apart.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gantry_core::duration::calculate_duration;
use gantry_core::error::CoreError;
use gantry_core::stage::{DurationUnit, StageStatus};
use gantry_core::types::DbId;
use gantry_core::validate;
use gantry_db::models::stage::{ConstructionStageInput, NewConstructionStage};
use gantry_db::repositories::ConstructionStageRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Run the record pipeline on a caller payload.
///
/// Validation is fail-fast: the first violation aborts the operation
/// before anything is written. `durationUnit` and `status` are
/// normalized, never rejected, and `duration` is always recomputed from
/// the dates — the caller-supplied value is ignored.
fn prepare(input: ConstructionStageInput) -> AppResult<NewConstructionStage> {
    validate::validate_name(&input.name)?;
    validate::validate_start_date(&input.start_date)?;
    validate::validate_end_date(&input.start_date, input.end_date.as_deref())?;
    validate::validate_external_id(input.external_id.as_deref())?;
    validate::validate_color(input.color.as_deref())?;

    let unit = DurationUnit::from_input(input.duration_unit.as_deref());
    let duration = calculate_duration(&input.start_date, input.end_date.as_deref(), unit);
    let status = StageStatus::from_input(input.status.as_deref());

    Ok(NewConstructionStage {
        name: input.name,
        start_date: input.start_date,
        end_date: input.end_date,
        duration,
        duration_unit: unit.as_str(),
        color: input.color,
        external_id: input.external_id,
        status: status.as_str(),
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ConstructionStage",
        id,
    })
}

/// GET /construction-stages
///
/// List all stages, soft-deleted ones included.
pub async fn list_stages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stages = ConstructionStageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: stages }))
}

/// GET /construction-stages/{id}
///
/// Get a single stage by ID.
pub async fn get_stage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stage = ConstructionStageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: stage }))
}

/// POST /construction-stages
///
/// Create a new stage. The response is the row as stored, re-read from
/// the database so derived and normalized fields are canonical.
pub async fn create_stage(
    State(state): State<AppState>,
    Json(input): Json<ConstructionStageInput>,
) -> AppResult<impl IntoResponse> {
    let record = prepare(input)?;
    let stage = ConstructionStageRepo::create(&state.pool, &record).await?;

    tracing::info!(
        stage_id = stage.id,
        name = %stage.name,
        status = %stage.status,
        "Construction stage created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: stage })))
}

/// PUT /construction-stages/{id}
///
/// Full-replace update through the same pipeline as create. A deleted
/// stage is terminal and cannot be updated back to life.
pub async fn update_stage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ConstructionStageInput>,
) -> AppResult<impl IntoResponse> {
    let existing = ConstructionStageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if existing.status == StageStatus::Deleted.as_str() {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot update a deleted construction stage".to_string(),
        )));
    }

    let record = prepare(input)?;
    let stage = ConstructionStageRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(stage_id = id, name = %stage.name, "Construction stage updated");

    Ok(Json(DataResponse { data: stage }))
}

/// DELETE /construction-stages/{id}
///
/// Soft delete: writes `status = DELETED` and nothing else. The row
/// stays readable; repeating the call is a no-op that returns the row
/// again.
pub async fn delete_stage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stage = ConstructionStageRepo::set_status(&state.pool, id, StageStatus::Deleted.as_str())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(stage_id = id, "Construction stage soft-deleted");

    Ok(Json(DataResponse { data: stage }))
}
