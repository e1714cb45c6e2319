use std::sync::Arc;

use musiclib_db::PgSongStore;

use crate::config::ServerConfig;

/// State handed to every handler via `State<AppState>`. Clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Song storage on the shared connection pool.
    pub songs: PgSongStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: musiclib_db::DbPool, config: ServerConfig) -> Self {
        Self {
            songs: PgSongStore::new(pool),
            config: Arc::new(config),
        }
    }
}
