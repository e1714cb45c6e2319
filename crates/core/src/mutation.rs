//! Mutation engine: create, patch and delete song records.
//!
//! Stateless between calls; every operation issues a bounded number of
//! repository calls and returns the first failure unchanged.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::params::parse_song_id;
use crate::repository::SongRepository;
use crate::song::{NewSong, Song, SongCreateRequest, SongPatchRequest};
use crate::types::DbId;

/// Result of a delete: the id that was targeted and whether a row existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub id: DbId,
    pub existed: bool,
}

/// Applies create/patch/delete requests through a [`SongRepository`].
pub struct MutationEngine<'a, R> {
    repo: &'a R,
}

impl<'a, R: SongRepository> MutationEngine<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Create a song, returning the id storage assigned to it.
    ///
    /// The existence check rejects known duplicates without a write. It is
    /// not atomic with the insert; a concurrent creator of the same pair is
    /// caught by the repository's uniqueness guard, which also surfaces as
    /// [`CoreError::Conflict`].
    pub async fn create(&self, request: SongCreateRequest) -> Result<DbId, CoreError> {
        let song = NewSong::try_from(request)?;

        if self
            .repo
            .exists_by_group_and_name(&song.group, &song.name)
            .await?
        {
            tracing::info!(group = %song.group, name = %song.name, "Rejected duplicate song");
            return Err(duplicate(&song.group, &song.name));
        }

        let id = self.repo.insert(&song).await.map_err(|err| match err {
            CoreError::Conflict(_) => duplicate(&song.group, &song.name),
            other => other,
        })?;

        tracing::info!(song_id = id, group = %song.group, name = %song.name, "Song created");
        Ok(id)
    }

    /// Merge a partial update into an existing song and persist it.
    ///
    /// The `(group, name)` pair is not re-checked after the merge.
    pub async fn patch(&self, raw_id: &str, request: SongPatchRequest) -> Result<Song, CoreError> {
        let id = parse_song_id(raw_id)?;

        let mut song = self
            .repo
            .fetch_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Song", id })?;

        merge_patch(&mut song, request)?;
        self.repo.update(id, &song).await?;

        tracing::info!(song_id = id, "Song patched");
        Ok(song)
    }

    /// Delete a song by id. Deleting a missing id is not an error.
    pub async fn delete(&self, raw_id: &str) -> Result<DeleteOutcome, CoreError> {
        let id = parse_song_id(raw_id)?;
        let existed = self.repo.delete_by_id(id).await?;

        tracing::info!(song_id = id, existed, "Song delete processed");
        Ok(DeleteOutcome { id, existed })
    }
}

fn duplicate(group: &str, name: &str) -> CoreError {
    CoreError::Conflict(format!("song '{name}' by '{group}' already exists"))
}

/// Overwrite each field of `song` whose patch value is a non-empty string.
///
/// The id is never touched. On error `song` is left unmodified.
pub fn merge_patch(song: &mut Song, patch: SongPatchRequest) -> Result<(), CoreError> {
    let release_date = match supplied(patch.release_date) {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            CoreError::Validation(format!("releaseDate must be YYYY-MM-DD, got '{raw}'"))
        })?),
        None => None,
    };

    if let Some(group) = supplied(patch.group) {
        song.group = group;
    }
    if let Some(name) = supplied(patch.name) {
        song.name = name;
    }
    if let Some(date) = release_date {
        song.release_date = date;
    }
    if let Some(text) = supplied(patch.text) {
        song.text = text;
    }
    if let Some(link) = supplied(patch.link) {
        song.link = link;
    }
    Ok(())
}

/// An empty string is indistinguishable from an absent field.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
