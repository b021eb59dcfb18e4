//! Person identity type.
//!
//! Returned by `GET /people/me` (the caller) and `GET /people/{id}`
//! (message authors). Fetched at most once per distinct person per
//! feed build.

use serde::{Deserialize, Serialize};

/// A resolved user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Platform-assigned person ID
    pub id: String,

    /// Display name
    pub display_name: String,

    /// Avatar URL, when the user has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
