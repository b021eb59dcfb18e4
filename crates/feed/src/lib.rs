//! # roomfeed Feed
//!
//! Builds the display-ready feed payload from the platform API: select
//! recently-active rooms, fan-out fetch their messages, filter to the
//! recency window, construct capped per-room items with first/last
//! markers, extract @-mentions of the caller, resolve author identities
//! once per distinct person, and style mention markup.
//!
//! The pipeline is two-phase: phase 1 gathers the caller identity, rooms,
//! and per-room messages (all fatal on failure, no partial feed); phase 2
//! constructs and enriches items, tolerating individual person-lookup
//! failures.

mod aggregate;
mod enrich;
mod mentions;
mod recency;
mod select;

pub use enrich::enrich_items;
pub use mentions::style_mentions;
pub use recency::recent_prefix;
pub use select::select_active_rooms;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use roomfeed_client::RoomsApi;
use roomfeed_core::{Feed, FeedError, FeedSection, Result};
use tracing::{info, warn};

use crate::aggregate::collect_items;

/// Rooms idle longer than this are excluded from the fetch fan-out.
pub const ROOM_LOOKBACK: Duration = Duration::hours(1200);

/// Messages older than this never reach the feed.
pub const MESSAGE_WINDOW: Duration = Duration::hours(2);

/// Per-room cap for both the message and mention sections.
pub const MAX_ITEMS_PER_ROOM: usize = 3;

/// Build the full feed payload as of `now`.
///
/// Room, message, and caller-identity failures abort the build and
/// discard any partial results. Person-detail failures are logged and
/// skipped; the affected items simply stay unenriched.
pub async fn build_feed(api: &dyn RoomsApi, now: DateTime<Utc>) -> Result<Feed> {
    // Phase 1: caller identity, rooms, per-room messages.
    let me = api
        .me()
        .await
        .map_err(|e| FeedError::IdentityUnavailable(e.to_string()))?;
    let rooms = api.list_rooms().await?;
    let selected = select_active_rooms(rooms, now);
    info!(rooms = selected.len(), "Fetching messages for active rooms");

    let results = join_all(selected.iter().map(|room| api.list_messages(&room.id))).await;
    let mut per_room = Vec::with_capacity(results.len());
    for (room, result) in selected.iter().zip(results) {
        let messages = result.map_err(|e| FeedError::RoomFetchFailed {
            room_id: room.id.clone(),
            reason: e.to_string(),
        })?;
        per_room.push(messages);
    }

    // Phase 2: item construction, person fan-out, enrichment, styling.
    let mut collected = collect_items(&selected, &per_room, &me.id, now);

    let author_ids: Vec<String> = collected.authors.iter().cloned().collect();
    let resolved = join_all(author_ids.iter().map(|id| api.person(id))).await;

    let mut people = HashMap::new();
    for (id, result) in author_ids.iter().zip(resolved) {
        match result {
            Ok(person) => {
                people.insert(person.id.clone(), person);
            }
            Err(e) => {
                warn!(person_id = %id, error = %e, "Person lookup failed, skipping enrichment");
            }
        }
    }

    enrich_items(&mut collected.messages, &me, &people);
    enrich_items(&mut collected.mentions, &me, &people);

    for item in collected
        .messages
        .iter_mut()
        .chain(collected.mentions.iter_mut())
    {
        style_mentions(item);
    }

    info!(
        messages = collected.messages.len(),
        mentions = collected.mentions.len(),
        "Feed assembled"
    );

    Ok(Feed {
        messages: FeedSection::new(collected.messages),
        mentions: FeedSection::new(collected.mentions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use roomfeed_core::{ApiError, GroupMarker, Message, Person, Room, RoomType};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-process fake platform, with call recording for dedup assertions.
    #[derive(Default)]
    struct FakeApi {
        me: Option<Person>,
        rooms: Vec<Room>,
        messages: HashMap<String, Vec<Message>>,
        people: HashMap<String, Person>,
        failing_rooms: HashSet<String>,
        failing_people: HashSet<String>,
        message_calls: Mutex<Vec<String>>,
        person_calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RoomsApi for FakeApi {
        async fn list_rooms(&self) -> std::result::Result<Vec<Room>, ApiError> {
            Ok(self.rooms.clone())
        }

        async fn list_messages(
            &self,
            room_id: &str,
        ) -> std::result::Result<Vec<Message>, ApiError> {
            self.message_calls.lock().unwrap().push(room_id.into());
            if self.failing_rooms.contains(room_id) {
                return Err(ApiError::Status {
                    status_code: 500,
                    message: "boom".into(),
                });
            }
            Ok(self.messages.get(room_id).cloned().unwrap_or_default())
        }

        async fn me(&self) -> std::result::Result<Person, ApiError> {
            self.me
                .clone()
                .ok_or_else(|| ApiError::AuthenticationFailed("no identity".into()))
        }

        async fn person(&self, person_id: &str) -> std::result::Result<Person, ApiError> {
            self.person_calls.lock().unwrap().push(person_id.into());
            if self.failing_people.contains(person_id) {
                return Err(ApiError::Status {
                    status_code: 404,
                    message: "not found".into(),
                });
            }
            self.people
                .get(person_id)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status_code: 404,
                    message: "not found".into(),
                })
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap()
    }

    fn room(id: &str, title: &str, hours_idle: i64) -> Room {
        Room {
            id: id.into(),
            title: title.into(),
            room_type: RoomType::Group,
            last_activity: now() - Duration::hours(hours_idle),
        }
    }

    fn msg(id: &str, room_id: &str, text: &str, person: &str, minutes_ago: i64) -> Message {
        Message {
            id: id.into(),
            room_id: room_id.into(),
            room_type: RoomType::Group,
            text: text.into(),
            html: None,
            created: now() - Duration::minutes(minutes_ago),
            person_id: person.into(),
            mentioned_people: vec![],
        }
    }

    fn caller() -> Person {
        Person {
            id: "me".into(),
            display_name: "Caller".into(),
            avatar: None,
        }
    }

    fn fake() -> FakeApi {
        FakeApi {
            me: Some(caller()),
            ..FakeApi::default()
        }
    }

    #[tokio::test]
    async fn inactive_rooms_get_no_message_fetch() {
        let mut api = fake();
        api.rooms = vec![room("r-active", "Ops", 2), room("r-stale", "Archive", 1300)];
        api.messages
            .insert("r-active".into(), vec![msg("m-1", "r-active", "hi", "p-1", 5)]);
        api.people.insert(
            "p-1".into(),
            Person {
                id: "p-1".into(),
                display_name: "Ana".into(),
                avatar: None,
            },
        );

        build_feed(&api, now()).await.unwrap();

        let calls = api.message_calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["r-active".to_string()]);
    }

    #[tokio::test]
    async fn person_fetch_issued_once_per_distinct_author() {
        let mut api = fake();
        api.rooms = vec![room("r-1", "Ops", 1), room("r-2", "Design", 2)];
        api.messages.insert(
            "r-1".into(),
            vec![
                msg("m-1", "r-1", "one", "p-1", 5),
                msg("m-2", "r-1", "two", "p-1", 10),
            ],
        );
        api.messages
            .insert("r-2".into(), vec![msg("m-3", "r-2", "three", "p-1", 7)]);
        api.people.insert(
            "p-1".into(),
            Person {
                id: "p-1".into(),
                display_name: "Ana".into(),
                avatar: None,
            },
        );

        build_feed(&api, now()).await.unwrap();

        let calls = api.person_calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["p-1".to_string()]);
    }

    #[tokio::test]
    async fn any_room_fetch_failure_aborts_the_build() {
        let mut api = fake();
        api.rooms = vec![room("r-ok", "Ops", 1), room("r-bad", "Design", 2)];
        api.messages
            .insert("r-ok".into(), vec![msg("m-1", "r-ok", "hi", "p-1", 5)]);
        api.failing_rooms.insert("r-bad".into());

        let result = build_feed(&api, now()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_identity_aborts_the_build() {
        let mut api = fake();
        api.me = None;
        api.rooms = vec![room("r-1", "Ops", 1)];

        assert!(build_feed(&api, now()).await.is_err());
    }

    #[tokio::test]
    async fn person_lookup_failure_is_tolerated() {
        let mut api = fake();
        api.rooms = vec![room("r-1", "Ops", 1)];
        api.messages.insert(
            "r-1".into(),
            vec![
                msg("m-1", "r-1", "one", "p-ok", 5),
                msg("m-2", "r-1", "two", "p-broken", 10),
            ],
        );
        api.people.insert(
            "p-ok".into(),
            Person {
                id: "p-ok".into(),
                display_name: "Ana".into(),
                avatar: None,
            },
        );
        api.failing_people.insert("p-broken".into());

        let feed = build_feed(&api, now()).await.unwrap();
        assert_eq!(feed.messages.count, 2);

        let ok_item = feed
            .messages
            .items
            .iter()
            .find(|i| i.person_id == "p-ok")
            .unwrap();
        assert_eq!(ok_item.display_name.as_deref(), Some("Ana"));

        let broken_item = feed
            .messages
            .items
            .iter()
            .find(|i| i.person_id == "p-broken")
            .unwrap();
        assert!(broken_item.display_name.is_none());
    }

    #[tokio::test]
    async fn caller_authored_items_say_you() {
        let mut api = fake();
        api.rooms = vec![room("r-1", "Ops", 1)];
        api.messages
            .insert("r-1".into(), vec![msg("m-1", "r-1", "note to self", "me", 5)]);

        let feed = build_feed(&api, now()).await.unwrap();
        assert_eq!(feed.messages.items[0].display_name.as_deref(), Some("You"));
    }

    #[tokio::test]
    async fn worked_example_five_messages_no_mentions() {
        let mut api = fake();
        api.rooms = vec![room("r-a", "Room A", 1)];
        api.messages.insert(
            "r-a".into(),
            (1..=5)
                .map(|i| msg(&format!("m-{i}"), "r-a", "text", "p-1", i * 5))
                .collect(),
        );
        api.people.insert(
            "p-1".into(),
            Person {
                id: "p-1".into(),
                display_name: "Ana".into(),
                avatar: None,
            },
        );

        let feed = build_feed(&api, now()).await.unwrap();

        assert_eq!(feed.messages.count, 3);
        assert_eq!(feed.messages.items[2].marker, Some(GroupMarker::Last));
        assert_eq!(feed.messages.items[2].hidden_count, Some(2));
        assert_eq!(feed.mentions.count, 0);
    }

    #[tokio::test]
    async fn mention_of_caller_lands_in_mention_section_styled() {
        let mut api = fake();
        api.rooms = vec![room("r-1", "Ops", 1)];
        let mut mention = msg("m-1", "r-1", "Caller take a look", "p-1", 5);
        mention.mentioned_people = vec!["me".into()];
        mention.html = Some(
            r#"<p><spark-mention data-object-id="me">Caller</spark-mention> take a look</p>"#
                .into(),
        );
        api.messages.insert("r-1".into(), vec![mention]);
        api.people.insert(
            "p-1".into(),
            Person {
                id: "p-1".into(),
                display_name: "Ana".into(),
                avatar: None,
            },
        );

        let feed = build_feed(&api, now()).await.unwrap();

        assert_eq!(feed.mentions.count, 1);
        let item = &feed.mentions.items[0];
        assert_eq!(item.marker, Some(GroupMarker::First));
        assert!(item
            .description
            .contains("<span class=\"feed-mention\">Caller</span>"));
    }

    #[tokio::test]
    async fn empty_room_list_yields_empty_feed() {
        let api = fake();
        let feed = build_feed(&api, now()).await.unwrap();
        assert_eq!(feed.messages.count, 0);
        assert_eq!(feed.mentions.count, 0);
    }
}
