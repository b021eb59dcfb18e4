//! Message domain types.
//!
//! Raw messages as returned by `GET /messages?roomId=...`, newest-first.
//! The recency filter and the aggregator both consume this shape; the raw
//! message also rides along inside each feed item for downstream renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::room::RoomType;

/// A single message as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Platform-assigned message ID
    pub id: String,

    /// Room this message belongs to
    pub room_id: String,

    /// Direct or group, echoed by the API on each message
    pub room_type: RoomType,

    /// Plain text body. Empty for file-only messages.
    #[serde(default)]
    pub text: String,

    /// HTML body, present when the message carries markup (mentions etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Author's person ID
    pub person_id: String,

    /// Person IDs @-mentioned in this message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_people: Vec<String>,
}

impl Message {
    /// True when the message has no text body (file-only messages).
    pub fn is_empty_text(&self) -> bool {
        self.text.is_empty()
    }

    /// True when `person_id` appears in this message's mention list.
    pub fn mentions(&self, person_id: &str) -> bool {
        self.mentioned_people.iter().any(|p| p == person_id)
    }
}
