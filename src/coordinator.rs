//! Coordination layer between page-context requesters and the store.
//!
//! The store-owning context runs as a single task that owns the [`App`] and
//! processes requests from an mpsc queue, so every mutation of the persisted
//! collection is serialized through one writer — two saves for different ids
//! can never interleave their read-modify-write cycles. Replies travel over
//! oneshot channels; a requester that disconnects before the response arrives
//! only drops its receiver, and the store operation still completes and
//! persists.

use tokio::sync::{mpsc, oneshot};

use crate::app::App;
use crate::managers::video_store::VideoStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::RequestError;
use crate::types::settings::UserSettings;
use crate::types::video::{SavedVideo, VideoCandidate};

/// Result of a save-or-renew request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    /// Echo of the requester's prior `checkVideoSaved` answer, so its UI can
    /// distinguish a fresh save from a renewal.
    pub already_existed: bool,
}

/// Requests accepted by the store-owning task.
pub enum StoreRequest {
    SaveOrRenew {
        candidate: VideoCandidate,
        already_existed: bool,
        reply: oneshot::Sender<SaveOutcome>,
    },
    CheckSaved {
        video_id: String,
        reply: oneshot::Sender<bool>,
    },
    ListVideos {
        reply: oneshot::Sender<Vec<SavedVideo>>,
    },
    DeleteVideo {
        video_id: String,
        reply: oneshot::Sender<bool>,
    },
    SweepExpired {
        now: i64,
        reply: oneshot::Sender<usize>,
    },
    GetSettings {
        reply: oneshot::Sender<UserSettings>,
    },
    SaveSettings {
        settings: UserSettings,
        reply: oneshot::Sender<bool>,
    },
}

/// Clonable handle to the store-owning task.
#[derive(Clone)]
pub struct Coordinator {
    tx: mpsc::Sender<StoreRequest>,
}

impl Coordinator {
    /// Spawns the store task around the given app and returns a handle to it.
    pub fn spawn(app: App) -> Self {
        let (tx, mut rx) = mpsc::channel::<StoreRequest>(64);
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                handle_request(&app, request);
            }
        });
        Self { tx }
    }

    /// Saves or renews a video, awaiting the acknowledgment.
    pub async fn save_or_renew(
        &self,
        candidate: VideoCandidate,
        already_existed: bool,
    ) -> Result<SaveOutcome, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::SaveOrRenew {
            candidate,
            already_existed,
            reply,
        })
        .await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Saves or renews a video without waiting for the acknowledgment.
    ///
    /// The operation still persists; the reply is discarded. Returns an error
    /// only when the request could not be enqueued at all.
    pub async fn save_or_renew_detached(
        &self,
        candidate: VideoCandidate,
        already_existed: bool,
    ) -> Result<(), RequestError> {
        let (reply, _discarded) = oneshot::channel();
        self.send(StoreRequest::SaveOrRenew {
            candidate,
            already_existed,
            reply,
        })
        .await
    }

    /// Asks whether a video id is currently stored.
    pub async fn check_saved(&self, video_id: String) -> Result<bool, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::CheckSaved { video_id, reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Returns all records in storage order.
    pub async fn list_videos(&self) -> Result<Vec<SavedVideo>, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::ListVideos { reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Deletes a video by id. Idempotent.
    pub async fn delete_video(&self, video_id: String) -> Result<bool, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::DeleteVideo { video_id, reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Purges records expired as of `now`; returns the count removed.
    pub async fn sweep_expired(&self, now: i64) -> Result<usize, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::SweepExpired { now, reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Returns the persisted settings, defaulted on first access.
    pub async fn get_settings(&self) -> Result<UserSettings, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::GetSettings { reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    /// Overwrites the persisted settings.
    pub async fn save_settings(&self, settings: UserSettings) -> Result<bool, RequestError> {
        let (reply, rx) = oneshot::channel();
        self.send(StoreRequest::SaveSettings { settings, reply }).await?;
        rx.await
            .map_err(|_| RequestError::Dropped("store task closed the reply channel".to_string()))
    }

    async fn send(&self, request: StoreRequest) -> Result<(), RequestError> {
        self.tx
            .send(request)
            .await
            .map_err(|_| RequestError::Dropped("store task is gone".to_string()))
    }
}

/// Executes one request against the store. Replies are best-effort: a dropped
/// receiver must never abort a store operation that already ran.
fn handle_request(app: &App, request: StoreRequest) {
    match request {
        StoreRequest::SaveOrRenew {
            candidate,
            already_existed,
            reply,
        } => {
            let success = app.video_store().upsert(&candidate);
            let _ = reply.send(SaveOutcome {
                success,
                already_existed,
            });
        }
        StoreRequest::CheckSaved { video_id, reply } => {
            let _ = reply.send(app.video_store().exists(&video_id));
        }
        StoreRequest::ListVideos { reply } => {
            let _ = reply.send(app.video_store().list_all());
        }
        StoreRequest::DeleteVideo { video_id, reply } => {
            let _ = reply.send(app.video_store().remove(&video_id));
        }
        StoreRequest::SweepExpired { now, reply } => {
            let _ = reply.send(app.video_store().sweep_expired(now));
        }
        StoreRequest::GetSettings { reply } => {
            let _ = reply.send(app.settings_engine().load_or_default());
        }
        StoreRequest::SaveSettings { settings, reply } => {
            let _ = reply.send(app.settings_engine().save(&settings));
        }
    }
}
