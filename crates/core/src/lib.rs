//! Domain logic for the song catalog.
//!
//! Holds the song types, the list/verse/mutation engines and the
//! [`repository::SongRepository`] seam they call through. Nothing in this
//! crate talks to a database or an HTTP stack directly.

pub mod catalog;
pub mod error;
pub mod mutation;
pub mod params;
pub mod repository;
pub mod song;
pub mod types;
pub mod verses;

#[cfg(test)]
pub(crate) mod testing;
