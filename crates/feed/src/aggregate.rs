//! Item construction and mention extraction.
//!
//! Walks each selected room's recency-filtered messages twice: once to
//! build up to three display items (skipping file-only messages with no
//! text), once to build up to three items for messages that @-mention the
//! caller. Both passes tag the first and last visible item of the room
//! group and record author IDs for the deduplicated person fan-out.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use roomfeed_core::{FeedItem, GroupMarker, Message, Room};

use crate::recency::recent_prefix;
use crate::{MAX_ITEMS_PER_ROOM, MESSAGE_WINDOW};

/// Items collected across all rooms, plus the distinct author IDs that
/// still need an identity fetch.
#[derive(Debug, Default)]
pub(crate) struct CollectedItems {
    pub messages: Vec<FeedItem>,
    pub mentions: Vec<FeedItem>,
    pub authors: HashSet<String>,
}

/// Build message and mention items for every selected room.
///
/// `per_room` is aligned with `rooms`: `per_room[i]` holds the messages
/// fetched for `rooms[i]`, newest-first.
pub(crate) fn collect_items(
    rooms: &[Room],
    per_room: &[Vec<Message>],
    me_id: &str,
    now: DateTime<Utc>,
) -> CollectedItems {
    let cutoff = now - MESSAGE_WINDOW;
    let mut collected = CollectedItems::default();

    for (room, messages) in rooms.iter().zip(per_room) {
        let filtered = recent_prefix(messages, cutoff);
        collect_room_messages(rooms, room, filtered, &mut collected);
        collect_room_mentions(rooms, room, filtered, me_id, &mut collected);
    }

    collected
}

/// Up to three display items per room, skipping empty-text messages.
///
/// The last filtered message carries the `last` tag; if it has no text the
/// tag is never assigned, matching the position-based scan.
fn collect_room_messages(
    rooms: &[Room],
    room: &Room,
    filtered: &[Message],
    collected: &mut CollectedItems,
) {
    let total = filtered.len();
    let mut built = 0;

    for (i, msg) in filtered.iter().enumerate() {
        if msg.is_empty_text() {
            continue;
        }

        let mut item = FeedItem::from_message(msg);
        built += 1;

        if built == 1 {
            item.marker = Some(GroupMarker::First);
            item.room_name = resolve_room_name(rooms, &room.id);
        } else if built == MAX_ITEMS_PER_ROOM || i == total - 1 {
            item.marker = Some(GroupMarker::Last);
            item.hidden_count = hidden_count(total);
        }

        collected.authors.insert(msg.person_id.clone());
        collected.messages.push(item);

        if built == MAX_ITEMS_PER_ROOM {
            break;
        }
    }
}

/// Up to three items for messages that @-mention the caller. A message
/// matches as soon as the caller appears anywhere in its mention list.
fn collect_room_mentions(
    rooms: &[Room],
    room: &Room,
    filtered: &[Message],
    me_id: &str,
    collected: &mut CollectedItems,
) {
    let matched: Vec<&Message> = filtered.iter().filter(|m| m.mentions(me_id)).collect();
    let total = matched.len();
    let visible = total.min(MAX_ITEMS_PER_ROOM);

    for (i, msg) in matched.into_iter().take(MAX_ITEMS_PER_ROOM).enumerate() {
        let mut item = FeedItem::from_message(msg);

        if i == 0 {
            item.marker = Some(GroupMarker::First);
            item.room_name = resolve_room_name(rooms, &room.id);
        } else if i + 1 == visible {
            item.marker = Some(GroupMarker::Last);
            item.hidden_count = hidden_count(total);
        }

        collected.authors.insert(msg.person_id.clone());
        collected.mentions.push(item);
    }
}

/// Truncation count for a `last` item. Suppressed unless positive.
fn hidden_count(total: usize) -> Option<i64> {
    let hidden = total as i64 - MAX_ITEMS_PER_ROOM as i64;
    (hidden > 0).then_some(hidden)
}

/// First room with a matching ID wins; the scan stops there.
fn resolve_room_name(rooms: &[Room], room_id: &str) -> Option<String> {
    rooms.iter().find(|r| r.id == room_id).map(|r| r.title.clone())
}
