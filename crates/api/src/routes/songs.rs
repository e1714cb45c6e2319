//! Route definitions for songs.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Routes mounted at `/songs`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get
/// PATCH  /{id}   -> patch
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(songs::list).post(songs::create))
        .route(
            "/{id}",
            get(songs::get).patch(songs::patch).delete(songs::delete),
        )
}
