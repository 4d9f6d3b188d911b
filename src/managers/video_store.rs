//! Video Store for laterlist.
//!
//! Implements `VideoStoreTrait` — upsert / list / remove / expiration-sweep
//! operations over the `savedVideos` slot. Every public operation degrades to
//! a safe default on a storage fault instead of propagating an error: callers
//! branch on the returned value, and the fault itself is reported through the
//! `log` side channel.

use rusqlite::Connection;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::database::slots;
use crate::types::errors::StorageError;
use crate::types::settings::UserSettings;
use crate::types::video::{SavedVideo, VideoCandidate};

/// Returns the current UNIX timestamp in milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Trait defining video store operations.
///
/// None of these return errors; a persistence fault yields the documented
/// safe default (empty list, `false`, or `0`).
pub trait VideoStoreTrait {
    /// Returns all records in storage order (most-recent-save first).
    fn list_all(&self) -> Vec<SavedVideo>;
    /// Creates or renews the record for `candidate.id`. True on success.
    fn upsert(&mut self, candidate: &VideoCandidate) -> bool;
    /// `upsert` with an explicit clock, for deterministic tests.
    fn upsert_at(&mut self, candidate: &VideoCandidate, now: i64) -> bool;
    /// Deletes the record with the given id. Idempotent: removing an absent
    /// id still returns true.
    fn remove(&mut self, id: &str) -> bool;
    /// Deletes every record with `expires_at <= now`; returns the count removed.
    fn sweep_expired(&mut self, now: i64) -> usize;
    /// True iff a record with that id is stored, expired or not.
    fn exists(&self, id: &str) -> bool;
}

/// Video store backed by the slot table of a SQLite connection.
pub struct VideoStore<'a> {
    conn: &'a Connection,
    renew_moves_to_front: bool,
}

impl<'a> VideoStore<'a> {
    /// Creates a new `VideoStore` using the provided database connection.
    ///
    /// By default a renewal keeps the record's position in the collection;
    /// only delete + re-save changes order.
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            renew_moves_to_front: false,
        }
    }

    /// Makes renewals move the record to the front of the collection,
    /// as if it had been deleted and saved again.
    pub fn with_renew_to_front(mut self, enabled: bool) -> Self {
        self.renew_moves_to_front = enabled;
        self
    }

    fn try_list(&self) -> Result<Vec<SavedVideo>, StorageError> {
        Ok(slots::read(self.conn, slots::VIDEOS_SLOT)?.unwrap_or_default())
    }

    fn expiration_period(&self) -> Result<i64, StorageError> {
        let settings: UserSettings =
            slots::read(self.conn, slots::SETTINGS_SLOT)?.unwrap_or_default();
        Ok(settings.expiration_period)
    }

    fn try_upsert(&mut self, candidate: &VideoCandidate, now: i64) -> Result<(), StorageError> {
        let mut videos = self.try_list()?;
        let expires_at = now + self.expiration_period()?;

        if let Some(index) = videos.iter().position(|v| v.id == candidate.id) {
            videos[index].saved_at = now;
            videos[index].expires_at = expires_at;
            if self.renew_moves_to_front {
                let renewed = videos.remove(index);
                videos.insert(0, renewed);
            }
        } else {
            videos.insert(0, SavedVideo::from_candidate(candidate, now, expires_at));
        }

        slots::write(self.conn, slots::VIDEOS_SLOT, &videos)
    }

    fn try_remove(&mut self, id: &str) -> Result<(), StorageError> {
        let videos = self.try_list()?;
        let before = videos.len();
        let remaining: Vec<SavedVideo> = videos.into_iter().filter(|v| v.id != id).collect();

        // Absent id is a no-op, not an error
        if remaining.len() != before {
            slots::write(self.conn, slots::VIDEOS_SLOT, &remaining)?;
        }
        Ok(())
    }

    fn try_sweep(&mut self, now: i64) -> Result<usize, StorageError> {
        let videos = self.try_list()?;
        let before = videos.len();
        let remaining: Vec<SavedVideo> =
            videos.into_iter().filter(|v| v.expires_at > now).collect();
        let removed = before - remaining.len();

        // Skip the write when nothing expired
        if removed > 0 {
            slots::write(self.conn, slots::VIDEOS_SLOT, &remaining)?;
        }
        Ok(removed)
    }
}

impl VideoStoreTrait for VideoStore<'_> {
    fn list_all(&self) -> Vec<SavedVideo> {
        match self.try_list() {
            Ok(videos) => videos,
            Err(e) => {
                log::error!("listing saved videos failed: {}", e);
                Vec::new()
            }
        }
    }

    fn upsert(&mut self, candidate: &VideoCandidate) -> bool {
        self.upsert_at(candidate, now_ms())
    }

    fn upsert_at(&mut self, candidate: &VideoCandidate, now: i64) -> bool {
        match self.try_upsert(candidate, now) {
            Ok(()) => true,
            Err(e) => {
                log::error!("saving video {} failed: {}", candidate.id, e);
                false
            }
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.try_remove(id) {
            Ok(()) => true,
            Err(e) => {
                log::error!("deleting video {} failed: {}", id, e);
                false
            }
        }
    }

    fn sweep_expired(&mut self, now: i64) -> usize {
        match self.try_sweep(now) {
            Ok(removed) => removed,
            Err(e) => {
                log::error!("expiration sweep failed: {}", e);
                0
            }
        }
    }

    fn exists(&self, id: &str) -> bool {
        match self.try_list() {
            Ok(videos) => videos.iter().any(|v| v.id == id),
            Err(e) => {
                log::error!("checking for video {} failed: {}", id, e);
                false
            }
        }
    }
}
