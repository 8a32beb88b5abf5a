//! Handlers for the `/sections` resource: CRUD plus the media lifecycle.
//!
//! Media fields and stored files move in lockstep: replacing a background
//! deletes the old file first, removing an overlay deletes its file, and
//! deleting a section removes every file it owns before the row goes away.
//! File cleanup is best effort; a failed delete is logged as an orphan and
//! never blocks the document mutation.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde_json::{json, Value};

use keepsake_core::error::CoreError;
use keepsake_core::section::{ensure_overlay_capacity, validate_overlay_index};
use keepsake_core::types;
use keepsake_db::models::section::{CreateSection, Section, UpdateSection};
use keepsake_db::repositories::SectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{read_file_part, read_file_parts};
use crate::state::AppState;

/// Filename prefix for background photos.
const BACKGROUND_PREFIX: &str = "bg_";

/// Filename prefix for overlay photos.
const OVERLAY_PREFIX: &str = "overlay_";

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Section",
        id: id.to_string(),
    })
}

/// GET /api/sections
///
/// All sections ordered by `order` ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Section>>> {
    let sections = SectionRepo::list(&state.pool).await?;
    Ok(Json(sections))
}

/// GET /api/sections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Section>> {
    let section = SectionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(section))
}

/// POST /api/sections
///
/// Creates a section with empty media fields; the id is assigned here.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSection>,
) -> AppResult<Json<Section>> {
    let id = types::new_entity_id();
    let section = SectionRepo::create(&state.pool, &id, &input, types::now()).await?;
    Ok(Json(section))
}

/// PUT /api/sections/{id}
///
/// Partial update: only fields present in the body are applied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<Section>> {
    let section = SectionRepo::update(&state.pool, &id, &input, types::now())
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(section))
}

/// DELETE /api/sections/{id}
///
/// Deletes the background and overlay files, then the document. The row
/// delete proceeds even if a file delete fails.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let section = SectionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    if !section.background_photo.is_empty() {
        delete_logged(&state, &section.background_photo).await;
    }
    for photo in section.overlay_photos.iter() {
        delete_logged(&state, photo).await;
    }

    SectionRepo::delete(&state.pool, &id).await?;
    Ok(Json(json!({ "message": "Section deleted" })))
}

/// POST /api/sections/{id}/background
///
/// Multipart form with a single `file` part. The previous background file
/// is deleted before the replacement is stored, so a replace never leaves
/// an orphan behind.
pub async fn upload_background(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<Section>> {
    let section = SectionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    let (filename, bytes) = read_file_part(&mut multipart, "file")
        .await?
        .ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if !section.background_photo.is_empty() {
        delete_logged(&state, &section.background_photo).await;
    }

    let stored = state.assets.store(bytes, &filename, BACKGROUND_PREFIX).await?;
    let section = SectionRepo::set_background(&state.pool, &id, &stored, types::now())
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(section))
}

/// POST /api/sections/{id}/photos
///
/// Multipart form with one or more `files` parts, appended in input order.
/// The whole batch is rejected before anything is stored if it would push
/// the section past the overlay cap.
pub async fn upload_overlay_photos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<Section>> {
    let section = SectionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    let uploads = read_file_parts(&mut multipart, "files").await?;
    if uploads.is_empty() {
        return Err(AppError::BadRequest("No 'files' parts in upload".into()));
    }

    let mut photos = section.overlay_photos.0;
    ensure_overlay_capacity(photos.len(), uploads.len())?;

    for (original_name, bytes) in uploads {
        let stored = state.assets.store(bytes, &original_name, OVERLAY_PREFIX).await?;
        photos.push(stored);
    }

    let section = SectionRepo::set_overlay_photos(&state.pool, &id, &photos, types::now())
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(section))
}

/// DELETE /api/sections/{id}/photos/{index}
///
/// Positional removal: later photos shift down by one, so callers must
/// re-fetch indices after any mutation.
pub async fn remove_overlay_photo(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, i64)>,
) -> AppResult<Json<Value>> {
    let section = SectionRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    let mut photos = section.overlay_photos.0;
    let index = validate_overlay_index(index, photos.len())?;

    let removed = photos.remove(index);
    delete_logged(&state, &removed).await;

    SectionRepo::set_overlay_photos(&state.pool, &id, &photos, types::now()).await?;
    Ok(Json(json!({ "message": "Photo deleted" })))
}

/// Delete a stored file, logging (not propagating) any failure.
async fn delete_logged(state: &AppState, filename: &str) {
    if let Err(error) = state.assets.delete(filename).await {
        tracing::warn!(%error, filename, "Failed to delete asset file; leaving orphan");
    }
}
