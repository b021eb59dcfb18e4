//! Recency filtering.
//!
//! The platform returns a room's messages newest-first, so the recent set
//! is a prefix: walk from the start and stop at the first message at or
//! older than the cutoff. A single non-monotonic entry can truncate the
//! prefix early; that matches the platform's ordering contract and is an
//! accepted approximation, not something to paper over here.

use chrono::{DateTime, Utc};
use roomfeed_core::Message;

/// The prefix of `messages` strictly newer than `cutoff`.
///
/// Boundary equality is NOT recent: a message created exactly at the
/// cutoff instant is excluded.
pub fn recent_prefix(messages: &[Message], cutoff: DateTime<Utc>) -> &[Message] {
    let end = messages
        .iter()
        .position(|m| m.created <= cutoff)
        .unwrap_or(messages.len());
    &messages[..end]
}
