//! Song entity and request/response shapes.
//!
//! Field names on the wire are camelCase (`releaseDate`); release dates are
//! calendar dates serialized as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A persisted song record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: DbId,
    pub group: String,
    pub name: String,
    pub release_date: NaiveDate,
    /// Lyric text; verses are separated by the literal two-character
    /// token `\n`, not by real line breaks.
    pub text: String,
    pub link: String,
}

/// Fully-populated input for inserting a song. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub name: String,
    pub release_date: NaiveDate,
    pub text: String,
    pub link: String,
}

/// Body of a create request. Every field is mandatory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SongCreateRequest {
    pub group: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub text: Option<String>,
    pub link: Option<String>,
}

/// Pass `value` through, recording `field` as missing when it is absent.
fn required<T>(value: Option<T>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

impl TryFrom<SongCreateRequest> for NewSong {
    type Error = CoreError;

    fn try_from(req: SongCreateRequest) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let group = required(req.group, "group", &mut missing);
        let name = required(req.name, "name", &mut missing);
        let release_date = required(req.release_date, "releaseDate", &mut missing);
        let text = required(req.text, "text", &mut missing);
        let link = required(req.link, "link", &mut missing);

        match (group, name, release_date, text, link) {
            (Some(group), Some(name), Some(release_date), Some(text), Some(link)) => Ok(Self {
                group,
                name,
                release_date,
                text,
                link,
            }),
            _ => Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Body of a patch request.
///
/// Absent fields and empty strings both mean "leave unchanged"; there is no
/// way to clear a field through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPatchRequest {
    pub group: Option<String>,
    pub name: Option<String>,
    /// `YYYY-MM-DD` when supplied.
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

/// A song whose lyric text has been split into verses and windowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedSongView {
    pub id: DbId,
    pub group: String,
    pub name: String,
    pub release_date: NaiveDate,
    pub text: Vec<String>,
    pub link: String,
}
