//! Repository for the `construction_stages` table.

use sqlx::PgPool;

use gantry_core::types::DbId;

use crate::models::stage::{ConstructionStage, NewConstructionStage};

/// Column list for construction_stages queries. Timestamps are rendered
/// here, in UTC at second precision, so every read path returns the same
/// canonical representation.
const COLUMNS: &str = "id, name, \
    to_char(start_date AT TIME ZONE 'UTC', 'YYYY-MM-DD\"T\"HH24:MI:SS\"Z\"') AS start_date, \
    to_char(end_date AT TIME ZONE 'UTC', 'YYYY-MM-DD\"T\"HH24:MI:SS\"Z\"') AS end_date, \
    duration, duration_unit, color, external_id, status";

/// Provides CRUD operations for construction stages.
///
/// Rows are never removed: the delete operation is a status write and
/// list queries intentionally keep deleted rows visible for history.
pub struct ConstructionStageRepo;

impl ConstructionStageRepo {
    /// Insert a new stage, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &NewConstructionStage,
    ) -> Result<ConstructionStage, sqlx::Error> {
        let query = format!(
            "INSERT INTO construction_stages
                (name, start_date, end_date, duration, duration_unit, color, external_id, status)
             VALUES ($1, $2::timestamptz, $3::timestamptz, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConstructionStage>(&query)
            .bind(&input.name)
            .bind(&input.start_date)
            .bind(input.end_date.as_deref())
            .bind(input.duration)
            .bind(input.duration_unit)
            .bind(input.color.as_deref())
            .bind(input.external_id.as_deref())
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a stage by its ID. Deleted rows are still returned; the
    /// status flag is the only tombstone.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ConstructionStage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM construction_stages WHERE id = $1");
        sqlx::query_as::<_, ConstructionStage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stages, including soft-deleted ones, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ConstructionStage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM construction_stages ORDER BY id");
        sqlx::query_as::<_, ConstructionStage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every caller-writable field of the row matched by `id`,
    /// returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewConstructionStage,
    ) -> Result<Option<ConstructionStage>, sqlx::Error> {
        let query = format!(
            "UPDATE construction_stages SET
                name = $2,
                start_date = $3::timestamptz,
                end_date = $4::timestamptz,
                duration = $5,
                duration_unit = $6,
                color = $7,
                external_id = $8,
                status = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConstructionStage>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.start_date)
            .bind(input.end_date.as_deref())
            .bind(input.duration)
            .bind(input.duration_unit)
            .bind(input.color.as_deref())
            .bind(input.external_id.as_deref())
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Write only the status column of the row matched by `id`,
    /// returning the updated row. Used by soft delete.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ConstructionStage>, sqlx::Error> {
        let query = format!(
            "UPDATE construction_stages SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConstructionStage>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
