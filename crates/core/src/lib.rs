//! Domain types, errors, and section rules shared across the keepsake crates.

pub mod error;
pub mod section;
pub mod types;
