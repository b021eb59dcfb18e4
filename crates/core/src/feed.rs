//! Feed payload types.
//!
//! `FeedItem` is the display-ready projection of a raw message. The
//! aggregator creates items, the enricher and mention styler mutate them in
//! place, and the assembled `Feed` is serialized as the response body.
//! Items live for one feed build only; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Positional tag marking an item as the first or last visible entry in a
/// room's truncated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMarker {
    First,
    Last,
}

/// A display-ready feed entry derived from one raw message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Message ID this item was built from
    pub id: String,

    /// Primary label (the message text)
    pub title: String,

    /// Body shown in the widget; the mention styler rewrites this in place
    pub description: String,

    /// Message timestamp
    pub date: DateTime<Utc>,

    /// Author's person ID
    pub person_id: String,

    /// The raw message, carried for downstream renderers
    pub raw: Message,

    /// First/last marker within the item's room group
    #[serde(rename = "gtype", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<GroupMarker>,

    /// Room title, resolved on `first` items only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    /// Room avatar URL, set on `first` items of direct rooms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_avatar: Option<String>,

    /// Fallback initials computed from the room title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,

    /// Count of messages truncated away, set on `last` items when positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_count: Option<i64>,

    /// Author's display name ("You" for the caller), set by the enricher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Author's avatar URL, set by the enricher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl FeedItem {
    /// Build the bare item for a raw message. Enrichment fields start unset.
    pub fn from_message(msg: &Message) -> Self {
        Self {
            id: msg.id.clone(),
            title: msg.text.clone(),
            description: msg.text.clone(),
            date: msg.created,
            person_id: msg.person_id.clone(),
            raw: msg.clone(),
            marker: None,
            room_name: None,
            room_avatar: None,
            initials: None,
            hidden_count: None,
            display_name: None,
            avatar: None,
        }
    }
}

/// One half of the feed payload: a count plus the truncated item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSection {
    pub count: usize,
    pub items: Vec<FeedItem>,
}

impl FeedSection {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// The full response payload: recent messages and mentions of the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    pub messages: FeedSection,
    pub mentions: FeedSection,
}
