use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::push_tokens;
use crate::state::AppState;

/// Routes mounted at `/push-tokens`.
///
/// ```text
/// GET    /                          -> list_tokens
/// POST   /                          -> register_token
/// DELETE /{token}                   -> unregister_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(push_tokens::list_tokens).post(push_tokens::register_token),
        )
        .route("/{token}", delete(push_tokens::unregister_token))
}
