//! Unit tests for the coordination layer: request/response round trips,
//! serialization of mutations through the single store task, and
//! fire-and-forget saves.

use laterlist::app::App;
use laterlist::coordinator::Coordinator;
use laterlist::types::settings::UserSettings;
use laterlist::types::video::VideoCandidate;

fn candidate(id: &str) -> VideoCandidate {
    VideoCandidate {
        id: id.to_string(),
        title: format!("Title {}", id),
        source_name: "Channel".to_string(),
        thumbnail_url: "th".to_string(),
        page_url: "u".to_string(),
    }
}

fn spawn_coordinator() -> Coordinator {
    let app = App::open_in_memory().expect("Failed to init App");
    Coordinator::spawn(app)
}

#[tokio::test]
async fn test_save_then_check_round_trip() {
    let coordinator = spawn_coordinator();

    assert!(!coordinator.check_saved("v1".to_string()).await.unwrap());

    let outcome = coordinator
        .save_or_renew(candidate("v1"), false)
        .await
        .unwrap();
    assert!(outcome.success);
    assert!(!outcome.already_existed);

    assert!(coordinator.check_saved("v1".to_string()).await.unwrap());
}

#[tokio::test]
async fn test_already_existed_flag_is_echoed() {
    let coordinator = spawn_coordinator();
    coordinator
        .save_or_renew(candidate("v1"), false)
        .await
        .unwrap();

    let outcome = coordinator
        .save_or_renew(candidate("v1"), true)
        .await
        .unwrap();
    assert!(outcome.success);
    assert!(outcome.already_existed);

    let videos = coordinator.list_videos().await.unwrap();
    assert_eq!(videos.len(), 1);
}

#[tokio::test]
async fn test_detached_save_still_persists() {
    let coordinator = spawn_coordinator();

    // No one awaits the acknowledgment, the write must happen anyway.
    // The queue is FIFO, so the check below runs after the save.
    coordinator
        .save_or_renew_detached(candidate("v1"), false)
        .await
        .unwrap();

    assert!(coordinator.check_saved("v1".to_string()).await.unwrap());
}

#[tokio::test]
async fn test_concurrent_saves_for_different_ids_all_land() {
    let coordinator = spawn_coordinator();

    let mut handles = Vec::new();
    for i in 0..10 {
        let coordinator = coordinator.clone();
        handles.push(tokio::spawn(async move {
            coordinator
                .save_or_renew(candidate(&format!("v{}", i)), false)
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().success);
    }

    // No lost updates: every id survived the interleaving
    let videos = coordinator.list_videos().await.unwrap();
    assert_eq!(videos.len(), 10);
}

#[tokio::test]
async fn test_delete_and_sweep_through_coordinator() {
    let coordinator = spawn_coordinator();
    coordinator
        .save_settings(UserSettings {
            expiration_period: 60_000,
            sort_newest_first: true,
        })
        .await
        .unwrap();

    coordinator
        .save_or_renew(candidate("v1"), false)
        .await
        .unwrap();
    coordinator
        .save_or_renew(candidate("v2"), false)
        .await
        .unwrap();

    assert!(coordinator.delete_video("v1".to_string()).await.unwrap());
    assert!(!coordinator.check_saved("v1".to_string()).await.unwrap());

    // Far-future sweep purges the remaining record
    let removed = coordinator.sweep_expired(i64::MAX).await.unwrap();
    assert_eq!(removed, 1);
    assert!(coordinator.list_videos().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_settings_round_trip() {
    let coordinator = spawn_coordinator();

    let defaults = coordinator.get_settings().await.unwrap();
    assert_eq!(defaults, UserSettings::default());

    let custom = UserSettings {
        expiration_period: 1_234,
        sort_newest_first: false,
    };
    assert!(coordinator.save_settings(custom.clone()).await.unwrap());
    assert_eq!(coordinator.get_settings().await.unwrap(), custom);
}
