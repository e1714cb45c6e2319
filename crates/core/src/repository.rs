//! Storage seam consumed by the engines.
//!
//! Implementations own connections and raw row I/O. Every method is a single
//! bounded round-trip and is expected to be atomic on its own; the engines
//! never retry.

use std::future::Future;

use crate::error::CoreError;
use crate::song::{NewSong, Song};
use crate::types::DbId;

/// Read/write access to the durable song collection.
///
/// Failures are reported as [`CoreError::Storage`], except that `insert` and
/// `update` report a violated `(group, name)` uniqueness guard as
/// [`CoreError::Conflict`].
pub trait SongRepository: Send + Sync {
    /// All songs in fetch (insertion) order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Song>, CoreError>> + Send;

    fn fetch_by_id(&self, id: DbId)
        -> impl Future<Output = Result<Option<Song>, CoreError>> + Send;

    fn exists_by_group_and_name(
        &self,
        group: &str,
        name: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Insert a song and return the id storage assigned to it.
    fn insert(&self, song: &NewSong) -> impl Future<Output = Result<DbId, CoreError>> + Send;

    /// Overwrite every mutable field of the row with the given id.
    ///
    /// A row that no longer exists is [`CoreError::NotFound`].
    fn update(&self, id: DbId, song: &Song)
        -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Delete by id; returns whether a row existed.
    fn delete_by_id(&self, id: DbId) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
