//! Route definitions for per-user resources: follows and premium badges.

use axum::routing::get;
use axum::Router;

use crate::handlers::{followers, premium};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{id}/follow               -> follow_status
/// POST   /{id}/follow               -> follow_user
/// DELETE /{id}/follow               -> unfollow_user
/// GET    /{id}/followers            -> list_followers
/// GET    /{id}/following            -> list_following
/// GET    /{id}/follow-counts        -> follow_counts
/// GET    /{id}/badge                -> user_badge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/follow",
            get(followers::follow_status)
                .post(followers::follow_user)
                .delete(followers::unfollow_user),
        )
        .route("/{id}/followers", get(followers::list_followers))
        .route("/{id}/following", get(followers::list_following))
        .route("/{id}/follow-counts", get(followers::follow_counts))
        .route("/{id}/badge", get(premium::user_badge))
}
