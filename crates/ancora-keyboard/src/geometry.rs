//! Pure scroll geometry.
//!
//! Scalar functions deciding how far to shift the scroll position for a
//! keyboard transition. No state, no side effects; all policy about *when*
//! to apply them lives in the controller.
//!
//! Sign convention: a negative return value counteracts a positive content
//! transform, keeping on-screen content visually stationary.

use crate::constants::{BOTTOM_ANCHOR_TOLERANCE, SCROLL_FAR_AWAY_THRESHOLD};

/// Whether the scroll position is far from the end of the list.
///
/// Strictly greater than the threshold; a distance of exactly
/// [`SCROLL_FAR_AWAY_THRESHOLD`] still counts as near.
pub fn is_scroll_far_away(content_height: f32, scroll_offset: f32) -> bool {
    content_height - scroll_offset > SCROLL_FAR_AWAY_THRESHOLD
}

/// Scroll shift to apply while the keyboard opens.
///
/// The default is full counteraction (`-transform`), which keeps visible
/// content stationary while the list container shifts up. When the user is
/// already near the bottom, blank space below the last message is collapsed
/// first so messages rise toward the keyboard edge without overshooting it:
///
/// - inside the blank region (`dist_from_end < blank_size`): collapse the
///   remaining blank space, never more than the transform;
/// - near the bottom with less blank space than the transform: counteract
///   only the part of the transform the blank space cannot absorb;
/// - otherwise: fully counteract.
pub fn offset_when_opening(
    dist_from_end: f32,
    blank_size: f32,
    transform: f32,
    dist_from_end_threshold: f32,
    max_blank_threshold: f32,
) -> f32 {
    if dist_from_end < blank_size {
        if blank_size < max_blank_threshold {
            (-(blank_size - dist_from_end)).max(-transform)
        } else {
            -transform
        }
    } else if dist_from_end < dist_from_end_threshold && blank_size < transform {
        if blank_size > 0.0 {
            (-(transform - blank_size)).max(-transform)
        } else {
            0.0
        }
    } else {
        -transform
    }
}

/// Scroll shift to apply while the keyboard closes.
///
/// Anchored at the bottom (within [`BOTTOM_ANCHOR_TOLERANCE`]), only the
/// blank space that reappears under the last message needs compensating.
/// Anywhere else the full transform is counteracted so the view does not
/// jump while the keyboard slides away.
pub fn offset_when_closing(dist_from_end: f32, blank_size_full: f32, transform: f32) -> f32 {
    if dist_from_end <= BOTTOM_ANCHOR_TOLERANCE {
        -blank_size_full.min(transform)
    } else {
        -transform
    }
}
