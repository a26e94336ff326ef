use axum::routing::delete;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// DELETE /{id}                      -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(comments::delete_comment))
}
