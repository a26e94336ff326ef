//! Route definitions for the `/clubs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::clubs;
use crate::state::AppState;

/// Routes mounted at `/clubs`.
///
/// ```text
/// GET    /                          -> list_clubs
/// POST   /                          -> create_club
/// GET    /{id}                      -> get_club
/// POST   /{id}/join                 -> join_club
/// POST   /{id}/leave                -> leave_club
/// GET    /{id}/members              -> list_members
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clubs::list_clubs).post(clubs::create_club))
        .route("/{id}", get(clubs::get_club))
        .route("/{id}/join", post(clubs::join_club))
        .route("/{id}/leave", post(clubs::leave_club))
        .route("/{id}/members", get(clubs::list_members))
}
