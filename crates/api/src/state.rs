use std::sync::Arc;

use keepsake_assets::AssetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Constructed explicitly at startup and passed in; there are no globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: keepsake_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Media file storage.
    pub assets: Arc<AssetStore>,
}
