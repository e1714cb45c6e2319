//! Verse paginator: splits lyric text into verses and windows them.

use crate::catalog::clamp_window;
use crate::error::CoreError;
use crate::params::parse_or_default;
use crate::song::{PaginatedSongView, Song};

/// Literal two-character token separating verses in stored lyric text.
pub const VERSE_DELIMITER: &str = "\\n";

/// Verse offset used when `offset` is absent or unparsable.
pub const DEFAULT_VERSE_OFFSET: i64 = 0;

/// Verse count used when `limit` is absent or unparsable.
pub const DEFAULT_VERSE_LIMIT: i64 = 3;

/// Validated verse window of a get request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseQuery {
    pub offset: i64,
    pub limit: i64,
}

impl Default for VerseQuery {
    fn default() -> Self {
        Self {
            offset: DEFAULT_VERSE_OFFSET,
            limit: DEFAULT_VERSE_LIMIT,
        }
    }
}

impl VerseQuery {
    /// Build a verse window from raw request values.
    ///
    /// Unparsable values fall back to defaults. A negative `offset` or a
    /// `limit <= 0` is [`CoreError::InvalidRange`].
    pub fn from_raw(offset: Option<&str>, limit: Option<&str>) -> Result<Self, CoreError> {
        let offset = parse_or_default(offset, DEFAULT_VERSE_OFFSET);
        if offset < 0 {
            return Err(CoreError::InvalidRange(format!(
                "offset must not be negative, got {offset}"
            )));
        }

        let limit = parse_or_default(limit, DEFAULT_VERSE_LIMIT);
        if limit <= 0 {
            return Err(CoreError::InvalidRange(format!(
                "limit must be positive, got {limit}"
            )));
        }

        Ok(Self { offset, limit })
    }
}

/// Split lyric text on the literal `\n` token, dropping empty segments.
pub fn split_verses(text: &str) -> Vec<String> {
    text.split(VERSE_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Replace the song's text with the requested window of its verses.
pub fn paginate_verses(song: Song, query: &VerseQuery) -> PaginatedSongView {
    let mut verses = split_verses(&song.text);
    let offset = i128::from(query.offset);
    let window = clamp_window(verses.len(), offset, offset + i128::from(query.limit));
    let text = verses.drain(window).collect();

    PaginatedSongView {
        id: song.id,
        group: song.group,
        name: song.name,
        release_date: song.release_date,
        text,
        link: song.link,
    }
}
