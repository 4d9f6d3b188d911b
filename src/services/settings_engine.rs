// laterlist Settings Engine
// Manages the persisted user settings: first-access defaulting, reads, and
// overwrites. Settings live in the `userSettings` slot of the same database
// as the video records; they are never deleted, only overwritten.

use rusqlite::Connection;

use crate::database::slots;
use crate::types::errors::StorageError;
use crate::types::settings::UserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    /// Returns the stored settings, or defaults when the slot has never been
    /// written or cannot be read. Never errors.
    fn load_or_default(&self) -> UserSettings;
    /// Overwrites the stored settings. True on success.
    fn save(&mut self, settings: &UserSettings) -> bool;
}

/// Settings engine backed by the slot table of a SQLite connection.
pub struct SettingsEngine<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsEngine<'a> {
    /// Creates a new `SettingsEngine` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn try_load(&self) -> Result<UserSettings, StorageError> {
        Ok(slots::read(self.conn, slots::SETTINGS_SLOT)?.unwrap_or_default())
    }
}

impl SettingsEngineTrait for SettingsEngine<'_> {
    fn load_or_default(&self) -> UserSettings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("loading settings failed: {}", e);
                UserSettings::default()
            }
        }
    }

    fn save(&mut self, settings: &UserSettings) -> bool {
        match slots::write(self.conn, slots::SETTINGS_SLOT, settings) {
            Ok(()) => true,
            Err(e) => {
                log::error!("saving settings failed: {}", e);
                false
            }
        }
    }
}
