//! Integration tests for the settings engine against the video store:
//! settings persistence and how a period change affects future saves only.

use laterlist::app::App;
use laterlist::managers::video_store::VideoStoreTrait;
use laterlist::services::settings_engine::SettingsEngineTrait;
use laterlist::types::settings::{UserSettings, DEFAULT_EXPIRATION_MS};
use laterlist::types::video::VideoCandidate;

fn candidate(id: &str) -> VideoCandidate {
    VideoCandidate {
        id: id.to_string(),
        title: "T".to_string(),
        source_name: "C".to_string(),
        thumbnail_url: "th".to_string(),
        page_url: "u".to_string(),
    }
}

#[test]
fn test_defaults_on_first_access() {
    let app = App::open_in_memory().unwrap();
    let settings = app.settings_engine().load_or_default();
    assert_eq!(settings.expiration_period, DEFAULT_EXPIRATION_MS);
    assert!(settings.sort_newest_first);
}

#[test]
fn test_settings_persist_on_disk() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("laterlist.db");
    let path = path.to_str().unwrap();

    {
        let app = App::new(path).unwrap();
        let mut engine = app.settings_engine();
        assert!(engine.save(&UserSettings {
            expiration_period: 42_000,
            sort_newest_first: false,
        }));
    }

    let app = App::new(path).unwrap();
    let settings = app.settings_engine().load_or_default();
    assert_eq!(settings.expiration_period, 42_000);
    assert!(!settings.sort_newest_first);
}

#[test]
fn test_period_change_affects_future_saves_not_stored_records() {
    let app = App::open_in_memory().unwrap();
    let mut engine = app.settings_engine();
    engine.save(&UserSettings {
        expiration_period: 10_000,
        sort_newest_first: true,
    });

    let mut store = app.video_store();
    store.upsert_at(&candidate("v1"), 0);
    assert_eq!(store.list_all()[0].expires_at, 10_000);

    let mut engine = app.settings_engine();
    engine.save(&UserSettings {
        expiration_period: 99_000,
        sort_newest_first: true,
    });

    // Already-stored expiration is untouched until the record is renewed
    let mut store = app.video_store();
    assert_eq!(store.list_all()[0].expires_at, 10_000);

    store.upsert_at(&candidate("v2"), 0);
    let all = store.list_all();
    assert_eq!(all[0].id, "v2");
    assert_eq!(all[0].expires_at, 99_000);
}
