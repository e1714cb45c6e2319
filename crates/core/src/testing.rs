//! In-memory repository and fixtures for unit tests.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::repository::SongRepository;
use crate::song::{NewSong, Song};
use crate::types::DbId;

pub fn song(id: DbId, group: &str, name: &str, day: u32) -> Song {
    Song {
        id,
        group: group.to_string(),
        name: name.to_string(),
        release_date: NaiveDate::from_ymd_opt(2000, 1, day).unwrap(),
        text: format!("{name} verse one\\n{name} verse two"),
        link: format!("https://example.com/{id}"),
    }
}

/// Six songs inserted in group order C, B, A, D, F, E.
pub fn sample_catalog() -> Vec<Song> {
    vec![
        song(1, "C", "A name", 1),
        song(2, "B", "C name", 3),
        song(3, "A", "B name", 2),
        song(4, "D", "E name", 5),
        song(5, "F", "D name", 6),
        song(6, "E", "F name", 4),
    ]
}

/// Vec-backed repository. Enforces `(group, name)` uniqueness on insert only.
#[derive(Default)]
pub struct MemoryRepo {
    songs: Mutex<Vec<Song>>,
    broken: bool,
    pub inserts: Mutex<usize>,
}

impl MemoryRepo {
    pub fn with(songs: Vec<Song>) -> Self {
        Self {
            songs: Mutex::new(songs),
            ..Self::default()
        }
    }

    /// Repository whose every call fails with a storage error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Song> {
        self.songs.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.broken {
            return Err(CoreError::storage(std::io::Error::other("connection refused")));
        }
        Ok(())
    }
}

impl SongRepository for MemoryRepo {
    async fn fetch_all(&self) -> Result<Vec<Song>, CoreError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn fetch_by_id(&self, id: DbId) -> Result<Option<Song>, CoreError> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|s| s.id == id))
    }

    async fn exists_by_group_and_name(&self, group: &str, name: &str) -> Result<bool, CoreError> {
        self.check()?;
        Ok(self
            .snapshot()
            .iter()
            .any(|s| s.group == group && s.name == name))
    }

    async fn insert(&self, new: &NewSong) -> Result<DbId, CoreError> {
        self.check()?;
        let mut songs = self.songs.lock().unwrap();
        if songs.iter().any(|s| s.group == new.group && s.name == new.name) {
            return Err(CoreError::Conflict("unique guard".into()));
        }
        let id = songs.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        songs.push(Song {
            id,
            group: new.group.clone(),
            name: new.name.clone(),
            release_date: new.release_date,
            text: new.text.clone(),
            link: new.link.clone(),
        });
        *self.inserts.lock().unwrap() += 1;
        Ok(id)
    }

    async fn update(&self, id: DbId, song: &Song) -> Result<(), CoreError> {
        self.check()?;
        let mut songs = self.songs.lock().unwrap();
        let row = songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound { entity: "Song", id })?;
        *row = Song { id, ..song.clone() };
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        self.check()?;
        let mut songs = self.songs.lock().unwrap();
        let before = songs.len();
        songs.retain(|s| s.id != id);
        Ok(songs.len() != before)
    }
}
