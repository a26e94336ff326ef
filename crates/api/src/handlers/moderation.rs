//! Handlers for content-safety records and account standing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roast_core::moderation::{
    can_broadcast, standing, validate_description, validate_severity, validate_violation_type,
    MAX_DESCRIPTION_LENGTH,
};
use roast_core::notifications::KIND_STRIKE_ISSUED;
use roast_core::types::UserId;
use roast_core::validation::trimmed_text;
use roast_db::models::moderation::{CreateStrike, CreateViolation, Standing, Strike, Violation};
use roast_db::models::notification::NewNotification;
use roast_db::repositories::ModerationRepo;
use roast_db::DbPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireModerator;
use crate::notify::notify;
use crate::response::DataResponse;
use crate::state::AppState;

/// Compute a user's standing from their active strikes.
pub async fn load_standing(pool: &DbPool, user_id: UserId) -> Result<Standing, sqlx::Error> {
    let severities = ModerationRepo::active_strike_severities(pool, user_id).await?;
    let status = standing(&severities);
    Ok(Standing {
        user_id,
        active_strikes: severities.len(),
        status,
        can_broadcast: can_broadcast(status),
    })
}

/// GET /api/v1/moderation/standing
pub async fn my_standing(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Standing>>> {
    let standing = load_standing(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: standing }))
}

/// GET /api/v1/moderation/strikes
pub async fn my_strikes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Strike>>>> {
    let strikes = ModerationRepo::list_strikes_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: strikes }))
}

/// GET /api/v1/moderation/violations
pub async fn my_violations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Violation>>>> {
    let violations = ModerationRepo::list_violations_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: violations }))
}

/// POST /api/v1/moderation/violations (moderator only)
pub async fn record_violation(
    RequireModerator(moderator): RequireModerator,
    State(state): State<AppState>,
    Json(mut input): Json<CreateViolation>,
) -> AppResult<(StatusCode, Json<DataResponse<Violation>>)> {
    validate_violation_type(&input.violation_type)?;
    input.description = validate_description(&input.description)?;

    let violation = ModerationRepo::create_violation(&state.pool, &input).await?;
    tracing::info!(
        violation_id = violation.id,
        user_id = %violation.user_id,
        violation_type = %violation.violation_type,
        moderator = %moderator.user_id,
        "Violation recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: violation })))
}

/// POST /api/v1/moderation/strikes (moderator only)
///
/// Issue a strike and notify the user.
pub async fn issue_strike(
    RequireModerator(moderator): RequireModerator,
    State(state): State<AppState>,
    Json(mut input): Json<CreateStrike>,
) -> AppResult<(StatusCode, Json<DataResponse<Strike>>)> {
    validate_severity(&input.severity)?;
    input.reason = trimmed_text("reason", &input.reason, 1, MAX_DESCRIPTION_LENGTH)?;

    let strike = ModerationRepo::create_strike(&state.pool, &input).await?;
    tracing::info!(
        strike_id = strike.id,
        user_id = %strike.user_id,
        severity = %strike.severity,
        moderator = %moderator.user_id,
        "Strike issued"
    );

    notify(
        &state.pool,
        NewNotification {
            user_id: strike.user_id,
            kind: KIND_STRIKE_ISSUED,
            title: "Community guidelines strike",
            body: &strike.reason,
            data: serde_json::json!({ "strike_id": strike.id, "severity": strike.severity }),
        },
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: strike })))
}
