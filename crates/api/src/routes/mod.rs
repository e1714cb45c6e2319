pub mod health;
pub mod songs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /songs                      list, create
/// /songs/{id}                 get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/songs", songs::router())
}
