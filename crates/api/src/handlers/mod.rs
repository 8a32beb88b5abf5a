//! HTTP request handlers.

pub mod auth;
pub mod section;
pub mod settings;

use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// Collect every part named `field` from a multipart body as
/// `(original_filename, bytes)` pairs, in arrival order. Other fields are
/// ignored.
pub(crate) async fn read_file_parts(
    multipart: &mut Multipart,
    field: &str,
) -> AppResult<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();
    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if part.name() != Some(field) {
            continue;
        }
        let filename = part.file_name().unwrap_or("upload.bin").to_string();
        let bytes = part
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        files.push((filename, bytes.to_vec()));
    }
    Ok(files)
}

/// Read the first part named `field`, if any.
pub(crate) async fn read_file_part(
    multipart: &mut Multipart,
    field: &str,
) -> AppResult<Option<(String, Vec<u8>)>> {
    Ok(read_file_parts(multipart, field).await?.into_iter().next())
}
