//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roast_core::error::CoreError;
use roast_core::roles::is_moderator;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `service_role` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn moderate(RequireModerator(user): RequireModerator) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireModerator(pub AuthUser);

impl FromRequestParts<AppState> for RequireModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !is_moderator(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Moderator role required".into(),
            )));
        }
        Ok(RequireModerator(user))
    }
}
