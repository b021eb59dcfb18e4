//! Identity enrichment.
//!
//! Runs after the deduplicated person fan-out resolves. Items authored by
//! the caller are labeled "You"; other items receive the resolved display
//! name and avatar. `first` items additionally receive a room avatar (for
//! direct rooms whose title is the counterpart's name) or fallback
//! initials computed from the room title.

use std::collections::HashMap;

use roomfeed_core::{FeedItem, GroupMarker, Person, RoomType};

/// Merge resolved identities onto a list of feed items, in place.
///
/// A person missing from `people` (their detail fetch failed) simply
/// leaves the item without a display name.
pub fn enrich_items(items: &mut [FeedItem], me: &Person, people: &HashMap<String, Person>) {
    for item in items.iter_mut() {
        if item.person_id == me.id {
            item.display_name = Some("You".into());
        } else if let Some(person) = people.get(&item.person_id) {
            item.display_name = Some(person.display_name.clone());
            item.avatar = person.avatar.clone();
        }

        if item.marker == Some(GroupMarker::First) {
            apply_room_identity(item, people);
        }
    }
}

/// Room avatar or initials for a group's leading item.
fn apply_room_identity(item: &mut FeedItem, people: &HashMap<String, Person>) {
    let Some(room_name) = item.room_name.clone() else {
        return;
    };

    if item.raw.room_type == RoomType::Direct {
        // A direct room is titled with the counterpart's name; when that
        // person resolved, their avatar doubles as the room avatar.
        if let Some(person) = people.values().find(|p| p.display_name == room_name) {
            item.room_avatar = person.avatar.clone();
            return;
        }
    }

    item.initials = Some(initials(&room_name, item.raw.room_type));
}

/// Initials from a room title: first characters of the first two words for
/// direct rooms, first word only for group rooms. Uppercased.
fn initials(name: &str, room_type: RoomType) -> String {
    let take = match room_type {
        RoomType::Direct => 2,
        RoomType::Group => 1,
    };
    name.split_whitespace()
        .take(take)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
