//! Route tree for the `/api` surface.
//!
//! ```text
//! /sections                       list (GET), create (POST)
//! /sections/{id}                  get, update (PUT), delete
//! /sections/{id}/background       replace background photo (POST, multipart)
//! /sections/{id}/photos           append overlay photos (POST, multipart)
//! /sections/{id}/photos/{index}   remove overlay photo (DELETE)
//! /settings                       get (lazy seed), update (PUT)
//! /settings/music                 replace background music (POST, multipart)
//! /auth/verify                    password check (POST)
//! ```

pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sections",
            get(handlers::section::list).post(handlers::section::create),
        )
        .route(
            "/sections/{id}",
            get(handlers::section::get_by_id)
                .put(handlers::section::update)
                .delete(handlers::section::delete),
        )
        .route(
            "/sections/{id}/background",
            post(handlers::section::upload_background),
        )
        .route(
            "/sections/{id}/photos",
            post(handlers::section::upload_overlay_photos),
        )
        .route(
            "/sections/{id}/photos/{index}",
            delete(handlers::section::remove_overlay_photo),
        )
        .route(
            "/settings",
            get(handlers::settings::get).put(handlers::settings::update),
        )
        .route("/settings/music", post(handlers::settings::upload_music))
        .route("/auth/verify", post(handlers::auth::verify))
}
