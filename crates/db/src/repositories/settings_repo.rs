//! Repository for the singleton `settings` collection.

use keepsake_core::types::Timestamp;

use crate::models::settings::{Settings, UpdateSettings};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, couple_names, relationship_start_date, password, \
                       background_music_file, love_letter_text, intro_title, \
                       intro_subtitle, is_published, created_at, updated_at";

/// Provides access to the singleton settings document.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row, if one exists.
    pub async fn find(pool: &DbPool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings LIMIT 1");
        sqlx::query_as::<_, Settings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert `settings` only when the collection is empty.
    ///
    /// The `WHERE NOT EXISTS` guard keeps concurrent lazy seeds from ever
    /// producing a second row; the loser's insert is a no-op.
    pub async fn insert_if_empty(pool: &DbPool, settings: &Settings) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings
                (id, couple_names, relationship_start_date, password,
                 background_music_file, love_letter_text, intro_title,
                 intro_subtitle, is_published, created_at, updated_at)
             SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11
             WHERE NOT EXISTS (SELECT 1 FROM settings)",
        )
        .bind(&settings.id)
        .bind(&settings.couple_names)
        .bind(&settings.relationship_start_date)
        .bind(&settings.password)
        .bind(&settings.background_music_file)
        .bind(&settings.love_letter_text)
        .bind(&settings.intro_title)
        .bind(&settings.intro_subtitle)
        .bind(settings.is_published)
        .bind(settings.created_at)
        .bind(settings.updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Update the settings row. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateSettings,
        now: Timestamp,
    ) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                couple_names = COALESCE(?2, couple_names),
                relationship_start_date = COALESCE(?3, relationship_start_date),
                password = COALESCE(?4, password),
                love_letter_text = COALESCE(?5, love_letter_text),
                intro_title = COALESCE(?6, intro_title),
                intro_subtitle = COALESCE(?7, intro_subtitle),
                is_published = COALESCE(?8, is_published),
                updated_at = ?9
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(id)
            .bind(&input.couple_names)
            .bind(&input.relationship_start_date)
            .bind(&input.password)
            .bind(&input.love_letter_text)
            .bind(&input.intro_title)
            .bind(&input.intro_subtitle)
            .bind(input.is_published)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Atomically set the background music reference, refreshing `updated_at`.
    pub async fn set_music(
        pool: &DbPool,
        id: &str,
        filename: &str,
        now: Timestamp,
    ) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET background_music_file = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(id)
            .bind(filename)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Number of settings documents (zero or one by construction).
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM settings")
            .fetch_one(pool)
            .await
    }
}
