use std::sync::Arc;

use roast_stream::StreamApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roast_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Video platform client used by the live-input proxy functions.
    pub stream_api: Arc<StreamApi>,
}
