//! Postgres-backed [`SongRepository`].

use musiclib_core::error::CoreError;
use musiclib_core::repository::SongRepository;
use musiclib_core::song::{NewSong, Song};
use musiclib_core::types::DbId;

use crate::repositories::song_repo::UNIQUE_GROUP_NAME;
use crate::repositories::SongRepo;
use crate::DbPool;

/// Song storage on a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgSongStore {
    pool: DbPool,
}

impl PgSongStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl SongRepository for PgSongStore {
    async fn fetch_all(&self) -> Result<Vec<Song>, CoreError> {
        let rows = SongRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Song>, CoreError> {
        let row = SongRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Song::from))
    }

    async fn exists_by_group_and_name(&self, group: &str, name: &str) -> Result<bool, CoreError> {
        SongRepo::exists_by_group_and_name(&self.pool, group, name)
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert(&self, song: &NewSong) -> Result<DbId, CoreError> {
        SongRepo::create(&self.pool, song)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update(&self, id: DbId, song: &Song) -> Result<(), CoreError> {
        let updated = SongRepo::update(&self.pool, id, song)
            .await
            .map_err(map_sqlx_error)?;
        if !updated {
            return Err(CoreError::NotFound { entity: "Song", id });
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        SongRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }
}

/// Translate a sqlx error into the core taxonomy.
///
/// A unique violation (SQLSTATE 23505) on the `(group, name)` constraint is a
/// conflict; anything else is an opaque storage failure. Logging is left to
/// the caller that turns the error into a response.
pub fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(UNIQUE_GROUP_NAME)
        {
            return CoreError::Conflict("song with this group and name already exists".into());
        }
    }
    CoreError::storage(err)
}
