//! Handlers for the `/clubs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roast_core::clubs::{normalize_description, validate_can_leave, validate_name};
use roast_core::error::CoreError;
use roast_core::types::DbId;
use roast_db::models::club::{Club, ClubMember, ClubSummary, CreateClub};
use roast_db::repositories::ClubRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Membership {
    pub joined: bool,
}

/// POST /api/v1/clubs
///
/// Create a club. The creator becomes its owner and first member.
pub async fn create_club(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClub>,
) -> AppResult<(StatusCode, Json<DataResponse<Club>>)> {
    let name = validate_name(&input.name)?;
    let description = normalize_description(input.description.as_deref())?;

    let club = ClubRepo::create(&state.pool, auth.user_id, &name, description.as_deref()).await?;
    tracing::info!(club_id = club.id, owner = %auth.user_id, "Club created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: club })))
}

/// GET /api/v1/clubs
pub async fn list_clubs(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<ClubSummary>>>> {
    let clubs = ClubRepo::list(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: clubs }))
}

/// GET /api/v1/clubs/{id}
pub async fn get_club(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Club>>> {
    let club = find_club(&state, club_id).await?;
    Ok(Json(DataResponse { data: club }))
}

/// POST /api/v1/clubs/{id}/join
///
/// Idempotent: joining a club twice reports `joined: false`.
pub async fn join_club(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Membership>>> {
    find_club(&state, club_id).await?;
    let joined = ClubRepo::join(&state.pool, club_id, auth.user_id).await?;
    if joined {
        tracing::debug!(club_id, user_id = %auth.user_id, "Joined club");
    }
    Ok(Json(DataResponse {
        data: Membership { joined },
    }))
}

/// POST /api/v1/clubs/{id}/leave
pub async fn leave_club(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let member = ClubRepo::find_member(&state.pool, club_id, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Club membership",
            id: club_id,
        })?;
    validate_can_leave(&member.role)?;

    ClubRepo::leave(&state.pool, club_id, auth.user_id).await?;
    tracing::debug!(club_id, user_id = %auth.user_id, "Left club");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/clubs/{id}/members
pub async fn list_members(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(club_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ClubMember>>>> {
    find_club(&state, club_id).await?;
    let members = ClubRepo::list_members(&state.pool, club_id).await?;
    Ok(Json(DataResponse { data: members }))
}

async fn find_club(state: &AppState, club_id: DbId) -> AppResult<Club> {
    ClubRepo::find_by_id(&state.pool, club_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Club",
            id: club_id,
        }))
}
