//! Row model for the `songs` table.

use chrono::NaiveDate;
use musiclib_core::song::Song;
use musiclib_core::types::DbId;
use sqlx::FromRow;

/// A row from the `songs` table, using the table's column names.
#[derive(Debug, Clone, FromRow)]
pub struct SongRow {
    pub song_id: DbId,
    pub group_name: String,
    pub song_name: String,
    pub release_date: NaiveDate,
    pub song_text: String,
    pub song_link: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: row.song_id,
            group: row.group_name,
            name: row.song_name,
            release_date: row.release_date,
            text: row.song_text,
            link: row.song_link,
        }
    }
}
