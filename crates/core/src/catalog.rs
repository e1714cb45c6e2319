//! Catalog query engine: ordering and page windows over the song collection.
//!
//! Works on a snapshot already fetched from storage. Sorting is stable and
//! ascending on a single key with no tie-break, so equal keys keep their
//! fetch order. Page windows are half-open `[offset, limit)` ranges clamped
//! to the collection size; a window past the end is empty, not an error.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::CoreError;
use crate::params::parse_or_default;
use crate::song::Song;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page used when `page` is absent or unparsable (1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `items` is absent or unparsable.
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 2;

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

/// Field a song list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Group,
    Name,
    Date,
    Text,
    Link,
}

impl SortKey {
    /// Map a request value to a sort key. Unrecognized values yield `None`,
    /// which leaves the fetch order untouched.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "group" => Some(Self::Group),
            "name" => Some(Self::Name),
            "date" => Some(Self::Date),
            "text" | "lyrics" => Some(Self::Text),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    /// Ascending comparison of two songs on this key.
    pub fn compare(self, a: &Song, b: &Song) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Group => a.group.cmp(&b.group),
            Self::Name => a.name.cmp(&b.name),
            Self::Date => a.release_date.cmp(&b.release_date),
            Self::Text => a.text.cmp(&b.text),
            Self::Link => a.link.cmp(&b.link),
        }
    }
}

/// Stable in-place sort. `None` is a no-op.
pub fn sort_songs(songs: &mut [Song], key: Option<SortKey>) {
    if let Some(key) = key {
        songs.sort_by(|a, b| key.compare(a, b));
    }
}

// ---------------------------------------------------------------------------
// List query
// ---------------------------------------------------------------------------

/// Validated parameters of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortKey>,
    pub page: i64,
    pub items_per_page: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: None,
            page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ListQuery {
    /// Build a query from raw request values.
    ///
    /// Unparsable `page`/`items` fall back to their defaults; values that
    /// parse but are `<= 0` are rejected with [`CoreError::InvalidRange`].
    pub fn from_raw(
        sort: Option<&str>,
        page: Option<&str>,
        items: Option<&str>,
    ) -> Result<Self, CoreError> {
        let page = parse_or_default(page, DEFAULT_PAGE);
        if page <= 0 {
            return Err(CoreError::InvalidRange(format!(
                "page must be positive, got {page}"
            )));
        }

        let items_per_page = parse_or_default(items, DEFAULT_ITEMS_PER_PAGE);
        if items_per_page <= 0 {
            return Err(CoreError::InvalidRange(format!(
                "items must be positive, got {items_per_page}"
            )));
        }

        Ok(Self {
            sort: sort.and_then(SortKey::parse),
            page,
            items_per_page,
        })
    }

    /// Index window of this page within a collection of `len` songs.
    pub fn window(&self, len: usize) -> Range<usize> {
        let items = i128::from(self.items_per_page);
        let offset = items * i128::from(self.page) - items;
        clamp_window(len, offset, offset + items)
    }
}

/// Clamp `offset` and `limit` independently to `[0, len]` and return the
/// half-open range between them (empty when `offset >= limit`).
pub fn clamp_window(len: usize, offset: i128, limit: i128) -> Range<usize> {
    let clamp = |v: i128| usize::try_from(v.max(0)).map_or(len, |v| v.min(len));
    let start = clamp(offset);
    let end = clamp(limit).max(start);
    start..end
}

/// Order the snapshot by the query's sort key and cut out the requested page.
pub fn list_songs(mut songs: Vec<Song>, query: &ListQuery) -> Vec<Song> {
    sort_songs(&mut songs, query.sort);
    let window = query.window(songs.len());
    songs.drain(window).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
