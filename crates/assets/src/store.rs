//! Flat-directory storage for uploaded media files.

use std::path::{Path, PathBuf};

use keepsake_core::error::CoreError;

use crate::image::{normalize, NormalizeOutcome};

/// Extensions treated as raster images and normalized to JPEG on upload.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Stores uploaded media files in a single flat directory.
///
/// Filenames are `{prefix}{uuid4-hex}.{ext}`, unique by construction, so no
/// collision handling is needed beyond generation. Every stored file is
/// owned by exactly one document field; callers delete the old file before
/// storing a replacement.
#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
}

impl AssetStore {
    /// Open the storage directory, creating it if missing.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a stored filename.
    pub fn path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Store an uploaded file, normalizing raster images to JPEG.
    ///
    /// Raster uploads (`.jpg`, `.jpeg`, `.png`, `.webp`) are flattened,
    /// downscaled, and stored under a `.jpg` name. If normalization fails
    /// the original bytes are stored under the original extension instead;
    /// a compression failure never fails the upload. Returns the generated
    /// filename.
    pub async fn store(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        prefix: &str,
    ) -> Result<String, CoreError> {
        let ext = extension_of(original_name);
        let (bytes, ext) = if RASTER_EXTENSIONS.contains(&ext.as_str()) {
            match normalize(&bytes) {
                NormalizeOutcome::Normalized(jpeg) => (jpeg, "jpg".to_string()),
                NormalizeOutcome::Original { reason } => {
                    tracing::warn!(
                        %reason,
                        original_name,
                        "Image normalization failed, storing original bytes"
                    );
                    (bytes, ext)
                }
            }
        } else {
            (bytes, ext)
        };
        self.write(bytes, prefix, &ext).await
    }

    /// Store a file byte-for-byte under its original extension.
    ///
    /// Used for audio, which is never transcoded.
    pub async fn store_raw(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        prefix: &str,
    ) -> Result<String, CoreError> {
        let ext = extension_of(original_name);
        self.write(bytes, prefix, &ext).await
    }

    /// Delete a stored file. Deleting a name that is not on disk is a no-op.
    pub async fn delete(&self, filename: &str) -> Result<(), CoreError> {
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::AssetWrite(e)),
        }
    }

    async fn write(&self, bytes: Vec<u8>, prefix: &str, ext: &str) -> Result<String, CoreError> {
        let stem = uuid::Uuid::new_v4().simple();
        let filename = if ext.is_empty() {
            format!("{prefix}{stem}")
        } else {
            format!("{prefix}{stem}.{ext}")
        };
        tokio::fs::write(self.dir.join(&filename), &bytes).await?;
        Ok(filename)
    }
}

/// Lowercased extension without the dot; empty when the name has none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
