//! REST API client for the collaboration platform.
//!
//! Defines the `RoomsApi` trait — the seam the feed pipeline is written
//! against — and `RestRoomsApi`, the reqwest implementation. Tests and the
//! pipeline's own unit tests substitute in-process fakes for the trait.

mod rest;

pub use rest::RestRoomsApi;

use async_trait::async_trait;
use roomfeed_core::{ApiError, Message, Person, Room};

/// The platform operations the feed build needs.
///
/// Four read-only endpoints; authentication is the implementation's
/// concern (the reqwest client carries a bearer token).
#[async_trait]
pub trait RoomsApi: Send + Sync {
    /// `GET /rooms` — all rooms visible to the caller.
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError>;

    /// `GET /messages?roomId=...` — a room's messages, newest-first.
    async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError>;

    /// `GET /people/me` — the caller's own identity.
    async fn me(&self) -> Result<Person, ApiError>;

    /// `GET /people/{id}` — a specific user's identity.
    async fn person(&self, person_id: &str) -> Result<Person, ApiError>;
}
