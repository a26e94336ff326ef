//! Handlers for the `/streams` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roast_core::error::CoreError;
use roast_core::live::validate_live_input_id;
use roast_core::notifications::KIND_STREAM_STARTED;
use roast_core::streams::{validate_can_end, validate_title};
use roast_core::types::DbId;
use roast_db::models::stream::{CreateStream, Stream};
use roast_db::repositories::{NotificationRepo, StreamRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::moderation::load_standing;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/streams
///
/// Record a broadcast the caller started through `start-live`. Followers
/// are notified that the stream is on air.
pub async fn create_stream(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateStream>,
) -> AppResult<(StatusCode, Json<DataResponse<Stream>>)> {
    let title = validate_title(&input.title)?;
    let live_input_id = validate_live_input_id(Some(input.live_input_id.as_str()))?;

    let standing = load_standing(&state.pool, auth.user_id).await?;
    if !standing.can_broadcast {
        return Err(AppError::Core(CoreError::Forbidden(
            "Your account is suspended from broadcasting".into(),
        )));
    }

    let stream = StreamRepo::create(
        &state.pool,
        auth.user_id,
        live_input_id,
        &title,
        input.playback_url.as_deref(),
    )
    .await?;

    tracing::info!(stream_id = stream.id, user_id = %auth.user_id, "Stream recorded");

    let data = serde_json::json!({ "stream_id": stream.id });
    match NotificationRepo::create_for_followers(
        &state.pool,
        auth.user_id,
        KIND_STREAM_STARTED,
        "Live now",
        &stream.title,
        &data,
    )
    .await
    {
        Ok(count) => tracing::debug!(stream_id = stream.id, count, "Followers notified"),
        Err(e) => tracing::warn!(stream_id = stream.id, error = %e, "Failed to notify followers"),
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: stream })))
}

/// GET /api/v1/streams
///
/// List streams that are currently live, newest first.
pub async fn list_live_streams(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Stream>>>> {
    let streams = StreamRepo::list_live(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: streams }))
}

/// GET /api/v1/streams/{id}
pub async fn get_stream(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(stream_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Stream>>> {
    let stream = find_stream(&state, stream_id).await?;
    Ok(Json(DataResponse { data: stream }))
}

/// POST /api/v1/streams/{id}/end
///
/// End one of the caller's own live streams.
pub async fn end_stream(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(stream_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Stream>>> {
    let stream = find_stream(&state, stream_id).await?;
    if stream.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the broadcaster can end this stream".into(),
        )));
    }
    validate_can_end(&stream.status)?;

    // A concurrent end may win the race between the read and the update.
    let ended = StreamRepo::end(&state.pool, stream_id)
        .await?
        .ok_or_else(|| CoreError::Conflict("Stream has already ended".into()))?;

    tracing::info!(stream_id, user_id = %auth.user_id, "Stream ended");
    Ok(Json(DataResponse { data: ended }))
}

/// Load a stream or fail with 404.
pub(crate) async fn find_stream(state: &AppState, stream_id: DbId) -> AppResult<Stream> {
    StreamRepo::find_by_id(&state.pool, stream_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stream",
            id: stream_id,
        }))
}
