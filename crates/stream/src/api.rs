//! REST client for the live-input endpoints.
//!
//! Wraps `POST /accounts/{account}/stream/live_inputs` and
//! `DELETE /accounts/{account}/stream/live_inputs/{uid}` using [`reqwest`].
//! Each call is a single request. There are no retries.

use serde::de::DeserializeOwned;

use crate::config::{StreamCredentials, StreamSettings};
use crate::models::{Envelope, LiveInput, LiveSession};

/// Errors from the live-input API layer.
#[derive(Debug, thiserror::Error)]
pub enum StreamApiError {
    /// Account id or API token is not configured.
    #[error("Missing Cloudflare credentials")]
    MissingCredentials,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The platform answered with `success: false`.
    #[error("Video platform rejected the request ({status}): {errors}")]
    Upstream {
        /// HTTP status code of the upstream response.
        status: u16,
        /// The upstream `errors` array, passed through unchanged.
        errors: serde_json::Value,
    },

    /// The response could not be interpreted.
    #[error("Malformed response from video platform: {0}")]
    MalformedResponse(String),
}

/// HTTP client for the video platform.
pub struct StreamApi {
    client: reqwest::Client,
    settings: StreamSettings,
}

impl StreamApi {
    /// Create a client with the configured request timeout.
    pub fn new(settings: StreamSettings) -> Result<Self, StreamApiError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.settings.credentials.is_some()
    }

    /// Create a live input named `title`, tagged with the broadcaster's id.
    ///
    /// Recording is set to automatic so the broadcast is kept as a VOD.
    pub async fn create_live_input(
        &self,
        title: &str,
        user_id: &str,
    ) -> Result<LiveSession, StreamApiError> {
        let creds = self.credentials()?;

        let body = serde_json::json!({
            "meta": { "name": title, "user_id": user_id },
            "recording": { "mode": "automatic" },
        });

        let response = self
            .client
            .post(self.live_inputs_url(creds))
            .bearer_auth(&creds.api_token)
            .json(&body)
            .send()
            .await?;

        let input: LiveInput = Self::parse_envelope(response).await?.ok_or_else(|| {
            StreamApiError::MalformedResponse("live input response has no result".to_string())
        })?;

        tracing::info!(uid = %input.uid, user_id, "Created live input");
        Ok(LiveSession::from_input(input, &creds.customer_code))
    }

    /// Delete a live input, ending any broadcast on it.
    pub async fn delete_live_input(&self, live_input_id: &str) -> Result<(), StreamApiError> {
        let creds = self.credentials()?;

        let response = self
            .client
            .delete(format!("{}/{}", self.live_inputs_url(creds), live_input_id))
            .bearer_auth(&creds.api_token)
            .send()
            .await?;

        Self::parse_envelope::<serde_json::Value>(response).await?;

        tracing::info!(live_input_id, "Deleted live input");
        Ok(())
    }

    // ---- private helpers ----

    fn credentials(&self) -> Result<&StreamCredentials, StreamApiError> {
        self.settings
            .credentials
            .as_ref()
            .ok_or(StreamApiError::MissingCredentials)
    }

    fn live_inputs_url(&self, creds: &StreamCredentials) -> String {
        format!(
            "{}/accounts/{}/stream/live_inputs",
            self.settings.api_base.trim_end_matches('/'),
            creds.account_id
        )
    }

    /// Interpret an upstream response envelope.
    ///
    /// A `success: false` envelope (or any non-2xx status) becomes
    /// [`StreamApiError::Upstream`] carrying the upstream `errors`. An empty
    /// 2xx body counts as success with no result.
    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, StreamApiError> {
        let status = response.status();
        let text = response.text().await?;

        if text.trim().is_empty() {
            if status.is_success() {
                return Ok(None);
            }
            return Err(StreamApiError::Upstream {
                status: status.as_u16(),
                errors: serde_json::json!([{ "message": format!("HTTP {status}") }]),
            });
        }

        let envelope: Envelope<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(StreamApiError::Upstream {
                    status: status.as_u16(),
                    errors: serde_json::json!([{ "message": text }]),
                })
            }
            Err(e) => return Err(StreamApiError::MalformedResponse(e.to_string())),
        };

        if !envelope.success || !status.is_success() {
            let errors = match envelope.errors {
                serde_json::Value::Null => serde_json::json!([]),
                errors => errors,
            };
            tracing::warn!(status = status.as_u16(), %errors, "Video platform returned failure");
            return Err(StreamApiError::Upstream {
                status: status.as_u16(),
                errors,
            });
        }

        Ok(envelope.result)
    }
}
