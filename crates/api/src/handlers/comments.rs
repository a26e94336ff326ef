//! Handlers for live chat comments under `/streams/{id}/comments`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roast_core::comments::{clamp_limit, validate_message};
use roast_core::error::CoreError;
use roast_core::streams::STATUS_LIVE;
use roast_core::types::DbId;
use roast_db::models::comment::{CreateComment, LiveComment};
use roast_db::repositories::CommentRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::streams::find_stream;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /streams/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    /// Only return comments with an id greater than this.
    pub after: Option<DbId>,
    /// Defaults to 50, capped at 200.
    pub limit: Option<i64>,
}

/// POST /api/v1/streams/{id}/comments
pub async fn post_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(stream_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<LiveComment>>)> {
    let message = validate_message(&input.message)?;

    let stream = find_stream(&state, stream_id).await?;
    if stream.status != STATUS_LIVE {
        return Err(AppError::Core(CoreError::Conflict(
            "Comments are closed on a stream that has ended".into(),
        )));
    }

    let comment = CommentRepo::create(&state.pool, stream_id, auth.user_id, &message).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /api/v1/streams/{id}/comments
///
/// Comments in posting order. Clients poll with `after` set to the last id
/// they have seen.
pub async fn list_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(stream_id): Path<DbId>,
    Query(params): Query<CommentQuery>,
) -> AppResult<Json<DataResponse<Vec<LiveComment>>>> {
    let comments = CommentRepo::list_for_stream(
        &state.pool,
        stream_id,
        params.after,
        clamp_limit(params.limit),
    )
    .await?;
    Ok(Json(DataResponse { data: comments }))
}

/// DELETE /api/v1/comments/{id}
///
/// The author or the stream's broadcaster may delete a comment.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        })
    };

    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or_else(not_found)?;

    if comment.user_id != auth.user_id {
        let stream = find_stream(&state, comment.stream_id).await?;
        if stream.user_id != auth.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only the author or the broadcaster can delete this comment".into(),
            )));
        }
    }

    if !CommentRepo::delete(&state.pool, comment_id).await? {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}
