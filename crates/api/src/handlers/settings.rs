//! Handlers for the singleton `/settings` resource.
//!
//! Settings are lazily seeded: every entry point first ensures the
//! singleton document exists, so callers never observe "no settings".

use axum::extract::{Multipart, State};
use axum::Json;

use keepsake_core::types;
use keepsake_db::models::settings::{Settings, UpdateSettings};
use keepsake_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::read_file_part;
use crate::seed;
use crate::state::AppState;

/// Filename prefix for background music uploads.
const MUSIC_PREFIX: &str = "music_";

/// Fetch the settings document, seeding the default one if none exists.
///
/// The seed insert is guarded in SQL, so two racing first reads both end
/// up re-reading the single winner row.
pub(crate) async fn get_or_seed(state: &AppState) -> AppResult<Settings> {
    if let Some(settings) = SettingsRepo::find(&state.pool).await? {
        return Ok(settings);
    }
    seed::seed_default_settings(&state.pool).await?;
    SettingsRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::Internal("Settings row missing after seed".into()))
}

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    Ok(Json(get_or_seed(&state).await?))
}

/// PUT /api/settings
///
/// Partial update: only fields present in the body are applied.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<Settings>> {
    let current = get_or_seed(&state).await?;
    let updated = SettingsRepo::update(&state.pool, &current.id, &input, types::now())
        .await?
        .ok_or_else(|| AppError::Internal("Settings row vanished during update".into()))?;
    Ok(Json(updated))
}

/// POST /api/settings/music
///
/// Multipart form with a single `file` part. Audio is stored byte-for-byte
/// (never transcoded); the previous music file is deleted before the new
/// one is stored.
pub async fn upload_music(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Settings>> {
    let current = get_or_seed(&state).await?;

    let (filename, bytes) = read_file_part(&mut multipart, "file")
        .await?
        .ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if !current.background_music_file.is_empty() {
        if let Err(error) = state.assets.delete(&current.background_music_file).await {
            tracing::warn!(
                %error,
                filename = %current.background_music_file,
                "Failed to delete old music file; leaving orphan"
            );
        }
    }

    let stored = state.assets.store_raw(bytes, &filename, MUSIC_PREFIX).await?;
    let updated = SettingsRepo::set_music(&state.pool, &current.id, &stored, types::now())
        .await?
        .ok_or_else(|| AppError::Internal("Settings row vanished during update".into()))?;
    Ok(Json(updated))
}
