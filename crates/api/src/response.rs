//! Shared response envelope types for API handlers.
//!
//! Service endpoints respond with a `{ "data": ... }` envelope. The
//! live-input proxy functions keep their own `{ "success": ... }` shape.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
