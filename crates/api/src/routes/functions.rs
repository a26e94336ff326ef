//! Route definitions for the live-input proxy functions.

use axum::routing::post;
use axum::Router;

use crate::handlers::live;
use crate::state::AppState;

/// Routes mounted at `/functions/v1`.
///
/// ```text
/// POST   /start-live                -> start_live
/// POST   /stop-live                 -> stop_live
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start-live", post(live::start_live))
        .route("/stop-live", post(live::stop_live))
}
