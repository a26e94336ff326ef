//! Handlers for the follower graph.

use axum::extract::{Path, Query, State};
use axum::Json;
use roast_core::follow::validate_follow;
use roast_core::notifications::KIND_NEW_FOLLOWER;
use roast_core::types::UserId;
use roast_db::models::follower::{FollowCounts, Follower};
use roast_db::models::notification::NewNotification;
use roast_db::repositories::FollowerRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::notify::notify;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FollowState {
    pub following: bool,
}

#[derive(Debug, Serialize)]
pub struct Unfollowed {
    pub removed: bool,
}

/// POST /api/v1/users/{id}/follow
///
/// Follow a user. Following someone you already follow succeeds without
/// sending a second notification.
pub async fn follow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(target): Path<UserId>,
) -> AppResult<Json<DataResponse<FollowState>>> {
    validate_follow(auth.user_id, target)?;

    let created = FollowerRepo::follow(&state.pool, auth.user_id, target).await?;
    if created {
        tracing::info!(follower = %auth.user_id, following = %target, "New follow");
        notify(
            &state.pool,
            NewNotification {
                user_id: target,
                kind: KIND_NEW_FOLLOWER,
                title: "New follower",
                body: "Someone new is following you",
                data: serde_json::json!({ "follower_id": auth.user_id }),
            },
        )
        .await;
    }

    Ok(Json(DataResponse {
        data: FollowState { following: true },
    }))
}

/// DELETE /api/v1/users/{id}/follow
pub async fn unfollow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(target): Path<UserId>,
) -> AppResult<Json<DataResponse<Unfollowed>>> {
    let removed = FollowerRepo::unfollow(&state.pool, auth.user_id, target).await?;
    Ok(Json(DataResponse {
        data: Unfollowed { removed },
    }))
}

/// GET /api/v1/users/{id}/follow
///
/// Whether the caller follows the user.
pub async fn follow_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(target): Path<UserId>,
) -> AppResult<Json<DataResponse<FollowState>>> {
    let following = FollowerRepo::is_following(&state.pool, auth.user_id, target).await?;
    Ok(Json(DataResponse {
        data: FollowState { following },
    }))
}

/// GET /api/v1/users/{id}/followers
pub async fn list_followers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Follower>>>> {
    let rows =
        FollowerRepo::list_followers(&state.pool, user_id, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/users/{id}/following
pub async fn list_following(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Follower>>>> {
    let rows =
        FollowerRepo::list_following(&state.pool, user_id, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/users/{id}/follow-counts
pub async fn follow_counts(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<DataResponse<FollowCounts>>> {
    let counts = FollowerRepo::counts(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: counts }))
}
