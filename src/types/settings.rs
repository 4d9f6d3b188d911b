use serde::{Deserialize, Serialize};

/// Default expiration period applied to new saves: one week, in milliseconds.
pub const DEFAULT_EXPIRATION_MS: i64 = 604_800_000;

/// User settings persisted in the `userSettings` slot.
///
/// `expiration_period` applies to every future save or renewal; changing it
/// never rewrites already-stored expirations. `sort_newest_first` is a display
/// preference only and is independent of storage order.
///
/// Per-field defaults keep older stored blobs readable: a slot written before
/// a field existed deserializes with that field at its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default = "default_expiration_period")]
    pub expiration_period: i64,
    #[serde(default = "default_sort_newest_first")]
    pub sort_newest_first: bool,
}

fn default_expiration_period() -> i64 {
    DEFAULT_EXPIRATION_MS
}

fn default_sort_newest_first() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            expiration_period: DEFAULT_EXPIRATION_MS,
            sort_newest_first: true,
        }
    }
}
