//! RPC method handler for the laterlist JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches method calls from the page agent
//! and the list/settings views to the store via the [`Coordinator`].

use serde_json::{json, Value};

use crate::coordinator::Coordinator;
use crate::managers::video_store::now_ms;
use crate::services::lifecycle_policy::{order_for_display, remaining_label, urgency};
use crate::types::settings::UserSettings;
use crate::types::video::VideoCandidate;

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Store faults never surface as `Err` for the page-agent methods: `saveVideo`
/// reports them inside the result (`success: false` plus an `error` field) and
/// `checkVideoSaved` answers `isSaved: false`, so a flaky store degrades the
/// page UI instead of breaking it.
pub async fn handle_method(
    coordinator: &Coordinator,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        // ─── Page agent ───
        "saveVideo" => {
            let video_data = params.get("videoData").ok_or("missing videoData")?;
            let candidate: VideoCandidate = serde_json::from_value(video_data.clone())
                .map_err(|e| format!("invalid videoData: {}", e))?;
            if candidate.id.is_empty() {
                return Err("videoData.id must not be empty".to_string());
            }
            let already_existed = params
                .get("alreadyExisted")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            match coordinator.save_or_renew(candidate, already_existed).await {
                Ok(outcome) => Ok(json!({
                    "success": outcome.success,
                    "alreadyExisted": outcome.already_existed,
                })),
                Err(e) => Ok(json!({
                    "success": false,
                    "alreadyExisted": already_existed,
                    "error": e.to_string(),
                })),
            }
        }
        "checkVideoSaved" => {
            let video_id = params
                .get("videoId")
                .and_then(|v| v.as_str())
                .ok_or("missing videoId")?;
            let is_saved = coordinator
                .check_saved(video_id.to_string())
                .await
                .unwrap_or(false);
            Ok(json!({"isSaved": is_saved}))
        }

        // ─── List view ───
        "listVideos" => {
            let now = now_ms();
            // Expired records must be gone before anything is rendered
            let _ = coordinator.sweep_expired(now).await;

            let settings = coordinator
                .get_settings()
                .await
                .map_err(|e| e.to_string())?;
            let videos = coordinator.list_videos().await.map_err(|e| e.to_string())?;

            let ordered = order_for_display(videos, settings.sort_newest_first);
            let arr: Vec<Value> = ordered
                .iter()
                .map(|v| {
                    json!({
                        "id": v.id,
                        "title": v.title,
                        "sourceName": v.source_name,
                        "thumbnailUrl": v.thumbnail_url,
                        "pageUrl": v.page_url,
                        "savedAt": v.saved_at,
                        "expiresAt": v.expires_at,
                        "remaining": remaining_label(v.expires_at, now),
                        "urgency": urgency(v.saved_at, v.expires_at, now),
                    })
                })
                .collect();
            Ok(json!({"videos": arr}))
        }
        "deleteVideo" => {
            let video_id = params
                .get("videoId")
                .and_then(|v| v.as_str())
                .ok_or("missing videoId")?;
            let success = coordinator
                .delete_video(video_id.to_string())
                .await
                .map_err(|e| e.to_string())?;
            Ok(json!({"success": success}))
        }
        "sweepExpired" => {
            let now = params
                .get("now")
                .and_then(|v| v.as_i64())
                .unwrap_or_else(now_ms);
            let removed = coordinator
                .sweep_expired(now)
                .await
                .map_err(|e| e.to_string())?;
            Ok(json!({"removed": removed}))
        }

        // ─── Settings view ───
        "getSettings" => {
            let settings = coordinator
                .get_settings()
                .await
                .map_err(|e| e.to_string())?;
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "saveSettings" => {
            let settings_val = params.get("settings").ok_or("missing settings")?;
            let settings: UserSettings = serde_json::from_value(settings_val.clone())
                .map_err(|e| format!("invalid settings: {}", e))?;
            if settings.expiration_period <= 0 {
                return Err("expirationPeriod must be positive".to_string());
            }
            let success = coordinator
                .save_settings(settings)
                .await
                .map_err(|e| e.to_string())?;
            Ok(json!({"success": success}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
