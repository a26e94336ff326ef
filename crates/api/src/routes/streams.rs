//! Route definitions for the `/streams` resource and its live chat.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, streams};
use crate::state::AppState;

/// Routes mounted at `/streams`.
///
/// ```text
/// GET    /                          -> list_live_streams
/// POST   /                          -> create_stream
/// GET    /{id}                      -> get_stream
/// POST   /{id}/end                  -> end_stream
/// GET    /{id}/comments             -> list_comments
/// POST   /{id}/comments             -> post_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(streams::list_live_streams).post(streams::create_stream),
        )
        .route("/{id}", get(streams::get_stream))
        .route("/{id}/end", post(streams::end_stream))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::post_comment),
        )
}
