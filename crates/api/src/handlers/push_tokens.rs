//! Handlers for device push-token registration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roast_core::push::{validate_platform, validate_token};
use roast_db::models::push_token::{PushToken, RegisterPushToken};
use roast_db::repositories::PushTokenRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/push-tokens
///
/// Register a device token. Re-registering the same token refreshes it.
pub async fn register_token(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RegisterPushToken>,
) -> AppResult<Json<DataResponse<PushToken>>> {
    validate_platform(&input.platform)?;
    let token = validate_token(&input.token)?;

    let registered = PushTokenRepo::upsert(&state.pool, auth.user_id, &token, &input.platform).await?;
    tracing::debug!(user_id = %auth.user_id, platform = %registered.platform, "Push token registered");
    Ok(Json(DataResponse { data: registered }))
}

/// GET /api/v1/push-tokens
pub async fn list_tokens(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PushToken>>>> {
    let tokens = PushTokenRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: tokens }))
}

/// DELETE /api/v1/push-tokens/{token}
///
/// Unregistering a token that is not registered still succeeds.
pub async fn unregister_token(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<StatusCode> {
    let removed = PushTokenRepo::delete(&state.pool, auth.user_id, &token).await?;
    tracing::debug!(user_id = %auth.user_id, removed, "Push token unregistered");
    Ok(StatusCode::NO_CONTENT)
}
