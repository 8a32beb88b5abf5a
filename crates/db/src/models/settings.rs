//! Settings entity model and DTOs.

use keepsake_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The singleton settings row: site metadata, the password gate token, and
/// the background music asset reference (empty string for none).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    pub id: EntityId,
    pub couple_names: String,
    pub relationship_start_date: String,
    pub password: String,
    pub background_music_file: String,
    pub love_letter_text: String,
    pub intro_title: String,
    pub intro_subtitle: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for partial updates. `None` leaves a field untouched. The music file
/// reference changes only through the music upload endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettings {
    pub couple_names: Option<String>,
    pub relationship_start_date: Option<String>,
    pub password: Option<String>,
    pub love_letter_text: Option<String>,
    pub intro_title: Option<String>,
    pub intro_subtitle: Option<String>,
    pub is_published: Option<bool>,
}
