//! Reqwest implementation of `RoomsApi`.
//!
//! Bearer-token authentication, per-request timeout, and uniform status
//! mapping: 401/403 → AuthenticationFailed, 429 → RateLimited, other
//! non-2xx → Status with the response body attached.

use async_trait::async_trait;
use roomfeed_core::{ApiError, Message, Person, Room};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::RoomsApi;

const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// List endpoints wrap their payload in an `items` envelope.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Reqwest-backed platform client.
pub struct RestRoomsApi {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl RestRoomsApi {
    /// Create a new client with the default base URL and timeout.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(token, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new client with a custom per-request timeout.
    pub fn with_timeout(token: impl Into<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: token.into(),
            client,
        })
    }

    /// Use a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Issue a GET and decode the JSON body after status mapping.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Platform API request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(e.to_string())
                } else {
                    ApiError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(5);
            return Err(ApiError::RateLimited { retry_after_secs });
        }
        if status == 401 || status == 403 {
            return Err(ApiError::AuthenticationFailed(
                "Invalid or expired platform token".into(),
            ));
        }
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "Platform API error");
            return Err(ApiError::Status {
                status_code: status,
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl RoomsApi for RestRoomsApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        let envelope: ItemsEnvelope<Room> = self.get_json("/rooms", &[]).await?;
        Ok(envelope.items)
    }

    async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError> {
        let envelope: ItemsEnvelope<Message> =
            self.get_json("/messages", &[("roomId", room_id)]).await?;
        Ok(envelope.items)
    }

    async fn me(&self) -> Result<Person, ApiError> {
        self.get_json("/people/me", &[]).await
    }

    async fn person(&self, person_id: &str) -> Result<Person, ApiError> {
        let path = format!("/people/{person_id}");
        self.get_json(&path, &[]).await
    }
}
