//! Section entity model and DTOs.

use keepsake_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `sections` table: one content card of the presentation.
///
/// `background_photo` is a stored asset filename, or empty for none.
/// `overlay_photos` holds up to four asset filenames in display order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: EntityId,
    pub section_type: String,
    pub order: i64,
    pub title: String,
    pub caption: String,
    pub background_photo: String,
    pub overlay_photos: Json<Vec<String>>,
    pub animation_style: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new section. Media fields always start empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    #[serde(default = "default_section_type")]
    pub section_type: String,
    #[serde(default = "default_order")]
    pub order: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default = "default_animation_style")]
    pub animation_style: String,
}

fn default_section_type() -> String {
    "memory".to_string()
}

fn default_order() -> i64 {
    1
}

fn default_animation_style() -> String {
    "Floating Polaroids".to_string()
}

/// DTO for partial updates. `None` (absent or JSON `null`) leaves a field
/// untouched; an empty string is applied. Media fields change only through
/// their upload/remove endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    pub section_type: Option<String>,
    pub order: Option<i64>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub animation_style: Option<String>,
}
