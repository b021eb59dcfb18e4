//! Error types for the roomfeed domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all roomfeed operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- API client errors ---
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    // --- Feed assembly errors ---
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Errors from the collaboration platform's REST API.
///
/// Room, message, and caller-identity failures are fatal to a feed build;
/// individual person-detail failures are tolerated by the enricher.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("API request failed: {message} (status: {status_code})")]
    Status { status_code: u16, message: String },

    #[error("Rate limited by platform, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Room fetch failed for {room_id}: {reason}")]
    RoomFetchFailed { room_id: String, reason: String },

    #[error("Caller identity unavailable: {0}")]
    IdentityUnavailable(String),
}
