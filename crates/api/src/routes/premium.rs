use axum::routing::get;
use axum::Router;

use crate::handlers::premium;
use crate::state::AppState;

/// Routes mounted at `/premium`.
///
/// ```text
/// GET    /                          -> my_subscription
/// POST   /                          -> subscribe
/// DELETE /                          -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(premium::my_subscription)
            .post(premium::subscribe)
            .delete(premium::cancel),
    )
}
