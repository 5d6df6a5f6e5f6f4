//! Route definitions for construction stages.
//!
//! Mounted at `/construction-stages` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::stages;
use crate::state::AppState;

/// Construction stage routes.
///
/// ```text
/// GET    /          -> list_stages
/// POST   /          -> create_stage
/// GET    /{id}      -> get_stage
/// PUT    /{id}      -> update_stage (full replace)
/// DELETE /{id}      -> delete_stage (soft delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stages::list_stages).post(stages::create_stage))
        .route(
            "/{id}",
            get(stages::get_stage)
                .put(stages::update_stage)
                .delete(stages::delete_stage),
        )
}
