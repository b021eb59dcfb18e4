//! Room selection.
//!
//! Sorts rooms by last activity and keeps only those active within the
//! lookback window. The scan relies on sortedness for early exit instead of
//! filtering the whole set, so inactive rooms cost nothing downstream.

use chrono::{DateTime, Utc};
use roomfeed_core::Room;
use tracing::debug;

use crate::ROOM_LOOKBACK;

/// Sort rooms newest-first and truncate at the first room older than the
/// lookback cutoff. Equal `last_activity` timestamps keep their relative
/// order (stable sort, comparator returns Equal).
///
/// A room whose `last_activity` equals the cutoff exactly is kept; only
/// strictly older rooms are dropped.
pub fn select_active_rooms(mut rooms: Vec<Room>, now: DateTime<Utc>) -> Vec<Room> {
    rooms.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));

    let cutoff = now - ROOM_LOOKBACK;
    if let Some(stale) = rooms.iter().position(|r| r.last_activity < cutoff) {
        debug!(
            kept = stale,
            dropped = rooms.len() - stale,
            "Truncating room list at lookback cutoff"
        );
        rooms.truncate(stale);
    }

    rooms
}
