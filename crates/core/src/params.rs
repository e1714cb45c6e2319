//! Parsing of raw request parameters.
//!
//! Optional numeric parameters never fail to parse: anything that is not an
//! integer silently becomes the documented default. Range checks happen
//! afterwards, in the engine that owns the parameter.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse an optional integer parameter, falling back to `default` when the
/// value is absent or not an integer.
pub fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}

/// Parse a song identifier taken from a request path.
///
/// Only positive integers are accepted.
pub fn parse_song_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => Err(CoreError::Validation(format!(
            "song id must be positive, got {id}"
        ))),
        Err(_) => Err(CoreError::Validation(format!(
            "song id must be an integer, got '{raw}'"
        ))),
    }
}
