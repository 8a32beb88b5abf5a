//! Startup seeding of demo content.
//!
//! Runs once at process start: inserts the fixed ten-card deck when the
//! sections collection is empty, and the default settings document when
//! the settings collection is empty. Both are existence checks only -- a
//! database holding any document, however incomplete, is never re-seeded.

use keepsake_core::section::{
    ANIMATION_STYLES, SECTION_TYPE_FINAL, SECTION_TYPE_INTRO, SECTION_TYPE_MEMORY,
};
use keepsake_core::types;
use keepsake_db::models::section::CreateSection;
use keepsake_db::models::settings::Settings;
use keepsake_db::repositories::{SectionRepo, SettingsRepo};
use keepsake_db::DbPool;

/// Password of the seeded settings document.
const DEFAULT_PASSWORD: &str = "143";

/// Love letter shown on the final card until the owner writes their own.
const DEFAULT_LOVE_LETTER: &str = "My Dearest Love,\n\nFrom the very first message to this \
very moment, every second with you has been the best part of my life. You are my sunshine, \
my midnight thought, my forever person.\n\nI love you more than words could ever express.\n\n\
Forever yours,\nYour Love";

struct SeedSection {
    order: i64,
    section_type: &'static str,
    title: &'static str,
    caption: &'static str,
    animation_style: &'static str,
}

/// The fixed deck: an intro, eight memories (one per animation style, in
/// palette order), and a closing card.
const SAMPLE_SECTIONS: [SeedSection; 10] = [
    SeedSection {
        order: 0,
        section_type: SECTION_TYPE_INTRO,
        title: "Our Love Story",
        caption: "Every moment with you is a memory I treasure forever...",
        animation_style: "",
    },
    SeedSection {
        order: 1,
        section_type: SECTION_TYPE_MEMORY,
        title: "Our First Chat",
        caption: "The message that started it all...",
        animation_style: ANIMATION_STYLES[0],
    },
    SeedSection {
        order: 2,
        section_type: SECTION_TYPE_MEMORY,
        title: "First Date",
        caption: "Nervous hearts, magical moments...",
        animation_style: ANIMATION_STYLES[1],
    },
    SeedSection {
        order: 3,
        section_type: SECTION_TYPE_MEMORY,
        title: "Our Silly Moments",
        caption: "Because love is also about laughing until it hurts...",
        animation_style: ANIMATION_STYLES[2],
    },
    SeedSection {
        order: 4,
        section_type: SECTION_TYPE_MEMORY,
        title: "Late Night Calls",
        caption: "When the world sleeps, we talk about forever...",
        animation_style: ANIMATION_STYLES[3],
    },
    SeedSection {
        order: 5,
        section_type: SECTION_TYPE_MEMORY,
        title: "Adventures Together",
        caption: "Every place is perfect when you're beside me...",
        animation_style: ANIMATION_STYLES[4],
    },
    SeedSection {
        order: 6,
        section_type: SECTION_TYPE_MEMORY,
        title: "Festivals & Celebrations",
        caption: "Every celebration is brighter with you...",
        animation_style: ANIMATION_STYLES[5],
    },
    SeedSection {
        order: 7,
        section_type: SECTION_TYPE_MEMORY,
        title: "Our Songs & Vibes",
        caption: "Every song reminds me of you...",
        animation_style: ANIMATION_STYLES[6],
    },
    SeedSection {
        order: 8,
        section_type: SECTION_TYPE_MEMORY,
        title: "Our Last Trip",
        caption: "Miles traveled, memories made, love deepened...",
        animation_style: ANIMATION_STYLES[7],
    },
    SeedSection {
        order: 9,
        section_type: SECTION_TYPE_FINAL,
        title: "My Heart Is Yours, Forever",
        caption: "Every love story is beautiful, but ours is my favorite.",
        animation_style: "",
    },
];

/// The default settings document, freshly stamped.
pub fn default_settings() -> Settings {
    let now = types::now();
    Settings {
        id: types::new_entity_id(),
        couple_names: "You & Your Love".to_string(),
        relationship_start_date: "2023-02-14T00:00:00Z".to_string(),
        password: DEFAULT_PASSWORD.to_string(),
        background_music_file: String::new(),
        love_letter_text: DEFAULT_LOVE_LETTER.to_string(),
        intro_title: "Our Love Story".to_string(),
        intro_subtitle: "Every heartbeat is yours...".to_string(),
        is_published: true,
        created_at: now,
        updated_at: now,
    }
}

/// Insert the default settings document if the collection is empty.
pub async fn seed_default_settings(pool: &DbPool) -> Result<(), sqlx::Error> {
    SettingsRepo::insert_if_empty(pool, &default_settings()).await
}

/// Seed demo content into empty collections.
pub async fn seed_database(pool: &DbPool) -> Result<(), sqlx::Error> {
    if SectionRepo::count(pool).await? == 0 {
        tracing::info!("Seeding database with sample sections");
        for seed in &SAMPLE_SECTIONS {
            let input = CreateSection {
                section_type: seed.section_type.to_string(),
                order: seed.order,
                title: seed.title.to_string(),
                caption: seed.caption.to_string(),
                animation_style: seed.animation_style.to_string(),
            };
            let id = types::new_entity_id();
            SectionRepo::create(pool, &id, &input, types::now()).await?;
        }
        tracing::info!(count = SAMPLE_SECTIONS.len(), "Seeded sample sections");
    }

    if SettingsRepo::count(pool).await? == 0 {
        seed_default_settings(pool).await?;
        tracing::info!("Seeded default settings");
    }

    Ok(())
}
