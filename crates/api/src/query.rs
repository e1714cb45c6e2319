//! Query parameter types for the song endpoints.
//!
//! Parameters are read from the raw key/value pairs of the query string.
//! Repeated keys keep their first value, and numbers stay raw strings so an
//! unparsable value falls back to its default instead of failing extraction.

/// First value of `key` among the query pairs.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `GET /songs?sort=&page=&items=`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListSongsParams {
    pub sort: Option<String>,
    pub page: Option<String>,
    pub items: Option<String>,
}

impl ListSongsParams {
    /// `filter` is accepted for `sort`; `sort` wins when both are present.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            sort: first(pairs, "sort").or_else(|| first(pairs, "filter")),
            page: first(pairs, "page"),
            items: first(pairs, "items"),
        }
    }
}

/// `GET /songs/{id}?offset=&limit=`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerseParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl VerseParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            offset: first(pairs, "offset"),
            limit: first(pairs, "limit"),
        }
    }
}
