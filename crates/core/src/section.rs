//! Section rules: overlay photo capacity and positional-removal validation,
//! plus the fixed tags and palettes the seeder assigns.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of overlay photos a section may carry.
pub const MAX_OVERLAY_PHOTOS: usize = 4;

/// Section type of the opening card.
pub const SECTION_TYPE_INTRO: &str = "intro";

/// Section type of a memory card.
pub const SECTION_TYPE_MEMORY: &str = "memory";

/// Section type of the closing card.
pub const SECTION_TYPE_FINAL: &str = "final";

/// The eight seeded animation styles. `animation_style` is free text on the
/// wire; this palette is only what the seeder hands out.
pub const ANIMATION_STYLES: [&str; 8] = [
    "Floating Polaroids",
    "3D Carousel",
    "Scattered Desk",
    "Glowing Film Strip",
    "Photo Cube",
    "Floating Bubbles",
    "Vinyl Records",
    "Gallery Wall",
];

// ---------------------------------------------------------------------------
// Overlay rules
// ---------------------------------------------------------------------------

/// Check that appending `adding` photos to a section holding `current` stays
/// within [`MAX_OVERLAY_PHOTOS`].
///
/// The whole batch is accepted or rejected; callers must not store any file
/// of a rejected batch.
pub fn ensure_overlay_capacity(current: usize, adding: usize) -> Result<(), CoreError> {
    if current + adding > MAX_OVERLAY_PHOTOS {
        return Err(CoreError::CapacityExceeded(format!(
            "Maximum {MAX_OVERLAY_PHOTOS} overlay photos allowed (have {current}, adding {adding})"
        )));
    }
    Ok(())
}

/// Validate a positional overlay index against the current sequence length,
/// returning it as a `usize`.
pub fn validate_overlay_index(index: i64, len: usize) -> Result<usize, CoreError> {
    if index < 0 || index as usize >= len {
        return Err(CoreError::InvalidIndex { index, len });
    }
    Ok(index as usize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn capacity_allows_exactly_four() {
        assert!(ensure_overlay_capacity(0, 4).is_ok());
        assert!(ensure_overlay_capacity(2, 2).is_ok());
        assert!(ensure_overlay_capacity(4, 0).is_ok());
    }

    #[test]
    fn capacity_rejects_batch_past_four() {
        assert_matches!(
            ensure_overlay_capacity(2, 3),
            Err(CoreError::CapacityExceeded(_))
        );
        assert_matches!(
            ensure_overlay_capacity(4, 1),
            Err(CoreError::CapacityExceeded(_))
        );
        assert_matches!(
            ensure_overlay_capacity(0, 5),
            Err(CoreError::CapacityExceeded(_))
        );
    }

    #[test]
    fn index_valid_within_bounds() {
        assert_eq!(validate_overlay_index(0, 3).unwrap(), 0);
        assert_eq!(validate_overlay_index(2, 3).unwrap(), 2);
    }

    #[test]
    fn index_rejects_negative() {
        assert_matches!(
            validate_overlay_index(-1, 3),
            Err(CoreError::InvalidIndex { index: -1, len: 3 })
        );
    }

    #[test]
    fn index_rejects_at_length() {
        assert_matches!(
            validate_overlay_index(3, 3),
            Err(CoreError::InvalidIndex { index: 3, len: 3 })
        );
        assert_matches!(
            validate_overlay_index(0, 0),
            Err(CoreError::InvalidIndex { .. })
        );
    }

    #[test]
    fn palette_has_eight_distinct_styles() {
        let mut styles: Vec<_> = ANIMATION_STYLES.to_vec();
        styles.sort_unstable();
        styles.dedup();
        assert_eq!(styles.len(), 8);
    }
}
