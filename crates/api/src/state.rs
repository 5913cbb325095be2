use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only shared resource; handlers hold no per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stayview_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
