use axum::routing::{get, put};
use axum::Router;

use crate::handlers::appeals;
use crate::state::AppState;

/// Routes mounted at `/appeals`.
///
/// ```text
/// GET    /                          -> my_appeals
/// POST   /                          -> submit_appeal
/// GET    /pending                   -> pending_appeals (moderator)
/// PUT    /{id}                      -> resolve_appeal (moderator)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appeals::my_appeals).post(appeals::submit_appeal))
        .route("/pending", get(appeals::pending_appeals))
        .route("/{id}", put(appeals::resolve_appeal))
}
