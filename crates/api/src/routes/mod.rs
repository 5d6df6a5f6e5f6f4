pub mod health;
pub mod stages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /construction-stages         GET list, POST create
/// /construction-stages/{id}    GET one, PUT full replace, DELETE soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/construction-stages", stages::router())
}
