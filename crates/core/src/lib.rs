//! # roomfeed Core
//!
//! Domain types and error definitions for the roomfeed aggregator.
//! This crate has **zero framework dependencies** — it defines the value
//! objects that flow through the pipeline (rooms, messages, people, feed
//! items) and the error taxonomy every other crate maps into.
//!
//! All wire-facing types use the platform's camelCase field names so they
//! deserialize straight off the REST API and serialize straight into the
//! response payload.

pub mod error;
pub mod feed;
pub mod message;
pub mod person;
pub mod room;

// Re-export key types at crate root for ergonomics
pub use error::{ApiError, Error, FeedError, Result};
pub use feed::{Feed, FeedItem, FeedSection, GroupMarker};
pub use message::Message;
pub use person::Person;
pub use room::{Room, RoomType};
