use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roast_core::error::CoreError;
use roast_stream::StreamApiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roast_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A missing resource that has no numeric id (e.g. a per-user singleton).
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on a `uq_` constraint or index map to 409.
/// - Foreign key violations map to 400 (the referenced row does not exist).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique_violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // PostgreSQL foreign_key_violation
                Some("23503") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "INVALID_REFERENCE",
                        format!("Referenced record does not exist: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Live-input proxy errors
// ---------------------------------------------------------------------------

/// Error type for the live-input proxy functions.
///
/// Responds with `{ "success": false, "error": ... }` rather than the
/// `{ "error", "code" }` body used by the service endpoints.
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    /// Request validation failed before any upstream call.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The video platform client failed.
    #[error(transparent)]
    Stream(#[from] StreamApiError),
}

/// Convenience type alias for proxy function return values.
pub type LiveResult<T> = Result<T, LiveError>;

impl IntoResponse for LiveError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            LiveError::Core(CoreError::Forbidden(msg)) => (StatusCode::FORBIDDEN, json!(msg)),
            LiveError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, json!(msg))
            }
            LiveError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error in live function");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(msg))
            }
            LiveError::Core(other) => (StatusCode::BAD_REQUEST, json!(core_message(other))),
            LiveError::Stream(StreamApiError::MissingCredentials) => {
                tracing::error!("Live function called without Cloudflare credentials configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(StreamApiError::MissingCredentials.to_string()),
                )
            }
            // Upstream rejections pass through with the platform's own errors.
            LiveError::Stream(StreamApiError::Upstream { errors, .. }) => {
                (StatusCode::BAD_REQUEST, errors)
            }
            LiveError::Stream(err) => {
                tracing::error!(error = %err, "Video platform request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(err.to_string()))
            }
        };

        let body = json!({
            "success": false,
            "error": error,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Bare message of a validation-style [`CoreError`], without the
/// `Display` prefix.
fn core_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg)
        | CoreError::Conflict(msg)
        | CoreError::Unauthorized(msg)
        | CoreError::Forbidden(msg)
        | CoreError::Internal(msg) => msg,
        other @ CoreError::NotFound { .. } => other.to_string(),
    }
}
