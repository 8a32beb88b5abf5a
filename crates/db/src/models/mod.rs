//! Document models and DTOs.

pub mod section;
pub mod settings;
