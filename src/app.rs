//! App Core for laterlist.
//!
//! Central struct owning the database and handing out store and settings
//! handles on demand.

use crate::database::Database;
use crate::managers::video_store::{now_ms, VideoStore, VideoStoreTrait};
use crate::services::settings_engine::SettingsEngine;

/// Central application struct owning the persistence layer.
///
/// `VideoStore` and `SettingsEngine` are created on demand via `video_store()`
/// and `settings_engine()` because they borrow the connection with a lifetime
/// parameter.
pub struct App {
    pub db: Database,
}

impl App {
    /// Creates a new App backed by the database at the given path.
    pub fn new(db_path: &str) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            db: Database::open(db_path)?,
        })
    }

    /// Creates a new App backed by an in-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// Returns a store handle borrowing this app's connection.
    pub fn video_store(&self) -> VideoStore<'_> {
        VideoStore::new(self.db.connection())
    }

    /// Returns a settings handle borrowing this app's connection.
    pub fn settings_engine(&self) -> SettingsEngine<'_> {
        SettingsEngine::new(self.db.connection())
    }

    /// Startup sequence: purge records that expired while we were not running.
    pub fn startup(&mut self) {
        let removed = self.video_store().sweep_expired(now_ms());
        if removed > 0 {
            log::info!("startup sweep removed {} expired video(s)", removed);
        }
    }
}
