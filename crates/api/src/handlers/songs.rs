//! Handlers for the `/songs` resource.
//!
//! Each handler decodes the request, hands it to the core engines and maps
//! the outcome to a status code. No catalog rules live here.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use musiclib_core::catalog::{list_songs, ListQuery};
use musiclib_core::error::CoreError;
use musiclib_core::mutation::MutationEngine;
use musiclib_core::params::parse_song_id;
use musiclib_core::repository::SongRepository;
use musiclib_core::song::{SongCreateRequest, SongPatchRequest};
use musiclib_core::types::DbId;
use musiclib_core::verses::{paginate_verses, VerseQuery};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{ListSongsParams, VerseParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload returned after a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedSong {
    pub id: DbId,
}

/// Payload returned when a delete targeted a missing song.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub id: DbId,
    pub existed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/songs?sort=&page=&items=
///
/// List songs, ordered by an optional sort key and windowed into a page.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = ListSongsParams::from_pairs(&pairs);
    let query = ListQuery::from_raw(
        params.sort.as_deref(),
        params.page.as_deref(),
        params.items.as_deref(),
    )?;
    let songs = state.songs.fetch_all().await?;
    Ok(Json(DataResponse {
        data: list_songs(songs, &query),
    }))
}

/// GET /api/v1/songs/{id}?offset=&limit=
///
/// Fetch one song with its lyric text split into a window of verses.
pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = VerseParams::from_pairs(&pairs);
    let id = parse_song_id(&raw_id)?;
    let query = VerseQuery::from_raw(params.offset.as_deref(), params.limit.as_deref())?;
    let song = state
        .songs
        .fetch_by_id(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Song", id })?;
    Ok(Json(DataResponse {
        data: paginate_verses(song, &query),
    }))
}

/// POST /api/v1/songs
///
/// Create a song. Every field is required; a duplicate group/name is 409.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SongCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let id = MutationEngine::new(&state.songs).create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedSong { id },
        }),
    ))
}

/// PATCH /api/v1/songs/{id}
///
/// Overwrite the fields supplied as non-empty strings; returns the merged song.
pub async fn patch(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<SongPatchRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let song = MutationEngine::new(&state.songs).patch(&raw_id, input).await?;
    Ok(Json(DataResponse { data: song }))
}

/// DELETE /api/v1/songs/{id}
///
/// 204 when a song was removed, 200 with `existed: false` when there was
/// nothing to remove.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let outcome = MutationEngine::new(&state.songs).delete(&raw_id).await?;
    if outcome.existed {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(DataResponse {
        data: DeleteResult {
            id: outcome.id,
            existed: false,
        },
    })
    .into_response())
}
