//! Room domain types.
//!
//! A room is a conversation container on the platform — either a 1:1
//! direct conversation or a group space. Rooms are read-only within the
//! feed flow; they come off `GET /rooms` as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a room is a 1:1 conversation or a group space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// 1:1 conversation
    Direct,
    /// Multi-person space
    Group,
}

/// A conversation container as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Platform-assigned room ID
    pub id: String,

    /// Room title (for direct rooms, the counterpart's display name)
    pub title: String,

    /// Direct or group
    #[serde(rename = "type")]
    pub room_type: RoomType,

    /// Timestamp of the most recent activity in the room
    pub last_activity: DateTime<Utc>,
}
