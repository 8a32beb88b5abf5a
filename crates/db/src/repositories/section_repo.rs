//! Repository for the `sections` collection.

use keepsake_core::types::Timestamp;
use sqlx::types::Json;

use crate::models::section::{CreateSection, Section, UpdateSection};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_type, \"order\", title, caption, background_photo, \
                       overlay_photos, animation_style, created_at, updated_at";

/// Sections are a small, bounded collection by design; listing caps here.
const LIST_LIMIT: i64 = 100;

/// Provides CRUD operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section with empty media fields, returning the row.
    pub async fn create(
        pool: &DbPool,
        id: &str,
        input: &CreateSection,
        now: Timestamp,
    ) -> Result<Section, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections
                (id, section_type, \"order\", title, caption, background_photo,
                 overlay_photos, animation_style, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, '', '[]', ?6, ?7, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.section_type)
            .bind(input.order)
            .bind(&input.title)
            .bind(&input.caption)
            .bind(&input.animation_style)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a section by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = ?1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sections ordered by `order` ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections ORDER BY \"order\" ASC LIMIT {LIST_LIMIT}"
        );
        sqlx::query_as::<_, Section>(&query).fetch_all(pool).await
    }

    /// Update a section. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateSection,
        now: Timestamp,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET
                section_type = COALESCE(?2, section_type),
                \"order\" = COALESCE(?3, \"order\"),
                title = COALESCE(?4, title),
                caption = COALESCE(?5, caption),
                animation_style = COALESCE(?6, animation_style),
                updated_at = ?7
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.section_type)
            .bind(input.order)
            .bind(&input.title)
            .bind(&input.caption)
            .bind(&input.animation_style)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Atomically set the background photo reference, refreshing `updated_at`.
    pub async fn set_background(
        pool: &DbPool,
        id: &str,
        filename: &str,
        now: Timestamp,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET background_photo = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(filename)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Atomically replace the overlay photo list, refreshing `updated_at`.
    pub async fn set_overlay_photos(
        pool: &DbPool,
        id: &str,
        photos: &[String],
        now: Timestamp,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET overlay_photos = ?2, updated_at = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(Json(photos))
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of section documents.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sections")
            .fetch_one(pool)
            .await
    }
}
