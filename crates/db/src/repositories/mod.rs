//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod section_repo;
pub mod settings_repo;

pub use section_repo::SectionRepo;
pub use settings_repo::SettingsRepo;
