//! Route definitions for the `/moderation` resource.
//!
//! Reads are for the caller's own records. Writes require the moderator role.

use axum::routing::get;
use axum::Router;

use crate::handlers::moderation;
use crate::state::AppState;

/// Routes mounted at `/moderation`.
///
/// ```text
/// GET    /standing                  -> my_standing
/// GET    /strikes                   -> my_strikes
/// POST   /strikes                   -> issue_strike (moderator)
/// GET    /violations                -> my_violations
/// POST   /violations                -> record_violation (moderator)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/standing", get(moderation::my_standing))
        .route(
            "/strikes",
            get(moderation::my_strikes).post(moderation::issue_strike),
        )
        .route(
            "/violations",
            get(moderation::my_violations).post(moderation::record_violation),
        )
}
