//! Tests for the startup seeder.

use keepsake_api::seed;
use keepsake_core::types;
use keepsake_db::models::section::CreateSection;
use keepsake_db::repositories::{SectionRepo, SettingsRepo};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn seeds_ten_sections_and_default_settings(pool: SqlitePool) {
    seed::seed_database(&pool).await.unwrap();

    let sections = SectionRepo::list(&pool).await.unwrap();
    assert_eq!(sections.len(), 10);

    // Ordered deck: intro first, final last, memories in between.
    assert_eq!(sections[0].section_type, "intro");
    assert_eq!(sections[9].section_type, "final");
    assert!(sections[1..9].iter().all(|s| s.section_type == "memory"));

    // Every seeded card starts without media.
    assert!(sections.iter().all(|s| s.background_photo.is_empty()));
    assert!(sections.iter().all(|s| s.overlay_photos.is_empty()));

    let settings = SettingsRepo::find(&pool).await.unwrap().unwrap();
    assert_eq!(settings.password, "143");
    assert!(settings.is_published);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn seeding_twice_does_not_duplicate(pool: SqlitePool) {
    seed::seed_database(&pool).await.unwrap();
    seed::seed_database(&pool).await.unwrap();

    assert_eq!(SectionRepo::count(&pool).await.unwrap(), 10);
    assert_eq!(SettingsRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn any_existing_section_suppresses_section_seeding(pool: SqlitePool) {
    let input = CreateSection {
        section_type: "memory".to_string(),
        order: 5,
        title: "hand made".to_string(),
        caption: String::new(),
        animation_style: String::new(),
    };
    SectionRepo::create(&pool, &types::new_entity_id(), &input, types::now())
        .await
        .unwrap();

    seed::seed_database(&pool).await.unwrap();

    // The lone pre-existing section blocks the deck; settings still seed.
    assert_eq!(SectionRepo::count(&pool).await.unwrap(), 1);
    assert_eq!(SettingsRepo::count(&pool).await.unwrap(), 1);
}
