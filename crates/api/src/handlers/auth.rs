//! Password gate for the published site.
//!
//! A single shared token stored in settings; there are no user accounts.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::handlers::settings::get_or_seed;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyPassword {
    pub password: String,
}

/// POST /api/auth/verify
///
/// Case-sensitive exact match against the stored password. Seeds the
/// default settings first, so a missing settings document never surfaces
/// as an error here.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyPassword>,
) -> AppResult<Json<Value>> {
    let settings = get_or_seed(&state).await?;
    if input.password == settings.password {
        Ok(Json(json!({ "success": true, "message": "Access granted" })))
    } else {
        Ok(Json(json!({ "success": false, "message": "Incorrect password" })))
    }
}
