//! Handlers for premium subscriptions and badges.

use axum::extract::{Path, State};
use axum::Json;
use roast_core::error::CoreError;
use roast_core::premium::{badge_for_tier, is_premium, validate_tier};
use roast_core::types::UserId;
use roast_db::models::premium::{PremiumBadge, PremiumSubscription, Subscribe};
use roast_db::repositories::PremiumRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/premium
///
/// The caller's subscription, or `null` when they never subscribed.
pub async fn my_subscription(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<PremiumSubscription>>>> {
    let subscription = PremiumRepo::find_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: subscription }))
}

/// POST /api/v1/premium
pub async fn subscribe(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<Subscribe>,
) -> AppResult<Json<DataResponse<PremiumSubscription>>> {
    validate_tier(&input.tier)?;
    if input.expires_at.is_some_and(|exp| exp <= chrono::Utc::now()) {
        return Err(CoreError::Validation("expires_at must be in the future".into()).into());
    }

    let subscription =
        PremiumRepo::subscribe(&state.pool, auth.user_id, &input.tier, input.expires_at).await?;
    tracing::info!(user_id = %auth.user_id, tier = %subscription.tier, "Premium subscription activated");
    Ok(Json(DataResponse { data: subscription }))
}

/// DELETE /api/v1/premium
pub async fn cancel(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PremiumSubscription>>> {
    let subscription = PremiumRepo::cancel(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No premium subscription to cancel".into()))?;
    tracing::info!(user_id = %auth.user_id, "Premium subscription cancelled");
    Ok(Json(DataResponse { data: subscription }))
}

/// GET /api/v1/users/{id}/badge
///
/// Public badge for any user. Cancelled or expired subscriptions show no badge.
pub async fn user_badge(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<DataResponse<PremiumBadge>>> {
    let now = chrono::Utc::now();
    let active = PremiumRepo::find_for_user(&state.pool, user_id)
        .await?
        .filter(|s| is_premium(&s.status, s.expires_at, now));

    let badge = match active {
        Some(s) => PremiumBadge {
            user_id,
            is_premium: true,
            badge: badge_for_tier(&s.tier),
            tier: Some(s.tier),
        },
        None => PremiumBadge {
            user_id,
            is_premium: false,
            tier: None,
            badge: None,
        },
    };
    Ok(Json(DataResponse { data: badge }))
}
