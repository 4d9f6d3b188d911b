// laterlist Lifecycle Policy
// Pure functions over record timestamps: remaining-time labels, urgency tiers,
// and display ordering. No I/O — everything derives from the two stored
// instants and the caller-supplied clock, so nothing here is ever persisted.

use serde::Serialize;

use crate::types::video::SavedVideo;

pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Coarse display-emphasis bucket derived from the remaining-time percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Safe,
    Warning,
    Critical,
    Expired,
}

/// Remaining-window proportion plus its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Urgency {
    pub percentage: f64,
    pub tier: UrgencyTier,
}

/// Human-readable time remaining until `expires_at`, evaluated at `now`.
///
/// Returns `"expired"` once the instant has passed, otherwise the largest
/// whole unit among days / hours / minutes, as `"in N unit(s)"`. A zero count
/// in a coarser unit falls through to the next finer one.
pub fn remaining_label(expires_at: i64, now: i64) -> String {
    let remaining = expires_at - now;
    if remaining < 0 {
        return "expired".to_string();
    }

    let days = remaining / MS_PER_DAY;
    if days > 0 {
        return format!("in {} day{}", days, plural(days));
    }

    let hours = remaining / MS_PER_HOUR;
    if hours > 0 {
        return format!("in {} hour{}", hours, plural(hours));
    }

    let minutes = remaining / MS_PER_MINUTE;
    format!("in {} minute{}", minutes, plural(minutes))
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Proportion of the `[saved_at, expires_at]` window still remaining at `now`,
/// clamped to `[0, 100]`, with its tier.
///
/// Tier boundaries are exclusive: exactly 25.0 is `Warning`, exactly 50.0 is
/// `Safe`. A record whose instant has passed is `Expired` regardless of the
/// percentage arithmetic.
pub fn urgency(saved_at: i64, expires_at: i64, now: i64) -> Urgency {
    if now > expires_at {
        return Urgency {
            percentage: 0.0,
            tier: UrgencyTier::Expired,
        };
    }

    let window = expires_at - saved_at;
    let percentage = if window <= 0 {
        0.0
    } else {
        let remaining = (expires_at - now) as f64 / window as f64 * 100.0;
        remaining.clamp(0.0, 100.0)
    };

    let tier = if percentage < 25.0 {
        UrgencyTier::Critical
    } else if percentage < 50.0 {
        UrgencyTier::Warning
    } else {
        UrgencyTier::Safe
    };

    Urgency { percentage, tier }
}

/// Applies the display-order preference to records in storage order.
///
/// Storage order is most-recent-save first, so `newest_first` keeps the list
/// as-is and the opposite preference reverses it. Never touches storage.
pub fn order_for_display(mut videos: Vec<SavedVideo>, newest_first: bool) -> Vec<SavedVideo> {
    if !newest_first {
        videos.reverse();
    }
    videos
}
