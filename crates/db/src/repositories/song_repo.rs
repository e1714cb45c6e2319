//! Repository for the `songs` table.

use musiclib_core::song::{NewSong, Song};
use musiclib_core::types::DbId;
use sqlx::PgPool;

use crate::models::song::SongRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "song_id, group_name, song_name, release_date, song_text, song_link";

/// Unique constraint guarding the `(group_name, song_name)` pair.
pub const UNIQUE_GROUP_NAME: &str = "uq_songs_group_name";

/// Raw SQL access to songs.
pub struct SongRepo;

impl SongRepo {
    /// List every song in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SongRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs ORDER BY song_id");
        sqlx::query_as::<_, SongRow>(&query).fetch_all(pool).await
    }

    /// Find a song by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SongRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE song_id = $1");
        sqlx::query_as::<_, SongRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a song with the given group and name already exists.
    pub async fn exists_by_group_and_name(
        pool: &PgPool,
        group: &str,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM songs WHERE group_name = $1 AND song_name = $2)",
        )
        .bind(group)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Insert a new song, returning its generated ID.
    pub async fn create(pool: &PgPool, input: &NewSong) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO songs (group_name, song_name, release_date, song_text, song_link) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING song_id",
        )
        .bind(&input.group)
        .bind(&input.name)
        .bind(input.release_date)
        .bind(&input.text)
        .bind(&input.link)
        .fetch_one(pool)
        .await
    }

    /// Overwrite all mutable columns of a song.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, song: &Song) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE songs SET \
                group_name = $2, \
                song_name = $3, \
                release_date = $4, \
                song_text = $5, \
                song_link = $6 \
             WHERE song_id = $1",
        )
        .bind(id)
        .bind(&song.group)
        .bind(&song.name)
        .bind(song.release_date)
        .bind(&song.text)
        .bind(&song.link)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a song. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE song_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
