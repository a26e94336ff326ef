//! Handlers for the `/appeals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roast_core::appeals::{resolve_target, validate_reason, validate_transition, AppealTarget};
use roast_core::error::CoreError;
use roast_core::notifications::KIND_APPEAL_RESOLVED;
use roast_core::types::DbId;
use roast_db::models::appeal::{Appeal, CreateAppeal, ResolveAppeal};
use roast_db::models::notification::NewNotification;
use roast_db::repositories::{AppealRepo, ModerationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireModerator;
use crate::notify::notify;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/appeals
///
/// Appeal one of the caller's own strikes or violations.
pub async fn submit_appeal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAppeal>,
) -> AppResult<(StatusCode, Json<DataResponse<Appeal>>)> {
    let target = resolve_target(input.strike_id, input.violation_id)?;
    let reason = validate_reason(&input.reason)?;

    // The target must exist and belong to the caller. Someone else's record
    // is reported as missing.
    let owner = match target {
        AppealTarget::Strike(id) => ModerationRepo::find_strike(&state.pool, id)
            .await?
            .map(|s| s.user_id)
            .ok_or(CoreError::NotFound { entity: "Strike", id })?,
        AppealTarget::Violation(id) => ModerationRepo::find_violation(&state.pool, id)
            .await?
            .map(|v| v.user_id)
            .ok_or(CoreError::NotFound {
                entity: "Violation",
                id,
            })?,
    };
    if owner != auth.user_id {
        let (entity, id) = match target {
            AppealTarget::Strike(id) => ("Strike", id),
            AppealTarget::Violation(id) => ("Violation", id),
        };
        return Err(AppError::Core(CoreError::NotFound { entity, id }));
    }

    let appeal = AppealRepo::create(&state.pool, auth.user_id, target, &reason).await?;
    tracing::info!(appeal_id = appeal.id, user_id = %auth.user_id, "Appeal submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: appeal })))
}

/// GET /api/v1/appeals
pub async fn my_appeals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Appeal>>>> {
    let appeals = AppealRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: appeals }))
}

/// GET /api/v1/appeals/pending (moderator only)
pub async fn pending_appeals(
    _moderator: RequireModerator,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Appeal>>>> {
    let appeals = AppealRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: appeals }))
}

/// PUT /api/v1/appeals/{id} (moderator only)
///
/// Approve or reject a pending appeal. Approving a strike appeal lifts the
/// strike. The appellant is notified either way.
pub async fn resolve_appeal(
    RequireModerator(moderator): RequireModerator,
    State(state): State<AppState>,
    Path(appeal_id): Path<DbId>,
    Json(input): Json<ResolveAppeal>,
) -> AppResult<Json<DataResponse<Appeal>>> {
    let current = AppealRepo::find_by_id(&state.pool, appeal_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Appeal",
            id: appeal_id,
        })?;
    validate_transition(&current.status, &input.status)?;

    let notes = input
        .reviewer_notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let appeal = AppealRepo::resolve(&state.pool, appeal_id, &input.status, notes)
        .await?
        .ok_or_else(|| CoreError::Conflict("Appeal has already been resolved".into()))?;

    tracing::info!(
        appeal_id,
        status = %appeal.status,
        moderator = %moderator.user_id,
        "Appeal resolved"
    );

    let body = format!("Your appeal was {}", appeal.status);
    notify(
        &state.pool,
        NewNotification {
            user_id: appeal.user_id,
            kind: KIND_APPEAL_RESOLVED,
            title: "Appeal decision",
            body: &body,
            data: serde_json::json!({ "appeal_id": appeal.id, "status": appeal.status }),
        },
    )
    .await;

    Ok(Json(DataResponse { data: appeal }))
}
