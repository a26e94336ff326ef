//! Handlers for the live-input proxy functions.
//!
//! These forward a single request to the video platform using the
//! server-held credentials. They keep no state and never touch the
//! database.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::Json;
use roast_core::error::CoreError;
use roast_core::live::validate_live_input_id;
use roast_core::streams::title_or_default;
use roast_core::types::UserId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{LiveError, LiveResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Body extractor
// ---------------------------------------------------------------------------

/// JSON body for the proxy functions.
///
/// A missing or blank body reads as `T::default()`, so absent fields reach
/// the handler's own validation. Malformed JSON is rejected as a
/// [`LiveError`] and keeps the `{ "success": false, "error" }` shape.
/// The `Content-Type` header is not required.
#[derive(Debug)]
pub struct LiveJson<T>(pub T);

impl<T, S> FromRequest<S> for LiveJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = LiveError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| CoreError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected live function body");
            CoreError::Validation(format!("Invalid request body: {e}")).into()
        })
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /functions/v1/start-live`.
#[derive(Debug, Default, Deserialize)]
pub struct StartLiveRequest {
    pub title: Option<String>,
    pub user_id: Option<String>,
}

/// Body of `POST /functions/v1/stop-live`.
#[derive(Debug, Default, Deserialize)]
pub struct StopLiveRequest {
    pub live_input_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StreamRef {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct StartLiveResponse {
    pub success: bool,
    pub stream: StreamRef,
    pub ingest_url: String,
    pub stream_key: String,
    pub rtc_publish_url: Option<String>,
    pub playback_url: String,
}

#[derive(Debug, Serialize)]
pub struct StopLiveResponse {
    pub success: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /functions/v1/start-live
///
/// Create a live input for the authenticated broadcaster and return the
/// ingest credentials and playback URL.
pub async fn start_live(
    auth: AuthUser,
    State(state): State<AppState>,
    LiveJson(input): LiveJson<StartLiveRequest>,
) -> LiveResult<Json<StartLiveResponse>> {
    let title = title_or_default(input.title.as_deref())?;

    if let Some(requested) = input.user_id.as_deref() {
        let requested = UserId::parse_str(requested.trim())
            .map_err(|_| CoreError::Validation("user_id is not a valid UUID".to_string()))?;
        if requested != auth.user_id {
            return Err(CoreError::Forbidden(
                "user_id does not match the authenticated user".to_string(),
            )
            .into());
        }
    }

    let user_id = auth.user_id.to_string();
    tracing::info!(user_id = %user_id, title = %title, "Starting live input");

    let session = state.stream_api.create_live_input(&title, &user_id).await?;

    Ok(Json(StartLiveResponse {
        success: true,
        stream: StreamRef { id: session.uid },
        ingest_url: session.ingest_url,
        stream_key: session.stream_key,
        rtc_publish_url: session.rtc_publish_url,
        playback_url: session.playback_url,
    }))
}

/// POST /functions/v1/stop-live
///
/// Delete the given live input, ending the broadcast on the platform.
pub async fn stop_live(
    auth: AuthUser,
    State(state): State<AppState>,
    LiveJson(input): LiveJson<StopLiveRequest>,
) -> LiveResult<Json<StopLiveResponse>> {
    let live_input_id = validate_live_input_id(input.live_input_id.as_deref())?;

    tracing::info!(user_id = %auth.user_id, live_input_id, "Stopping live input");

    state.stream_api.delete_live_input(live_input_id).await?;

    Ok(Json(StopLiveResponse {
        success: true,
        message: format!("Live input {live_input_id} deleted"),
    }))
}
