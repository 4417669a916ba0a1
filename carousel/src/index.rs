//! Index arithmetic for the tripled ("expanded") index space.
//!
//! A carousel over `count` logical items lays out three back-to-back copies of the sequence.
//! Expanded index `e` shows logical item `e % count`. The viewport is kept inside the middle
//! copy by silently jumping one third whenever it drifts into an outer copy, which makes the
//! list look endless without ever wrapping content.

use core::ops::Range;

use crate::CarouselError;

/// Number of back-to-back copies in the expanded index space.
pub const COPIES: usize = 3;

/// Returns the expanded index range for `count` logical items.
pub fn expand(count: usize) -> Range<usize> {
    0..expanded_count(count)
}

pub fn expanded_count(count: usize) -> usize {
    count.saturating_mul(COPIES)
}

/// Maps an expanded index back to its logical index.
pub fn to_logical(expanded: usize, count: usize) -> Result<usize, CarouselError> {
    if count == 0 {
        return Err(CarouselError::InvalidState {
            index: expanded,
            count,
        });
    }
    Ok(expanded % count)
}

/// Returns `true` when `offset` lies in one of the outer thirds of the content.
///
/// Both thirds boundaries count as crossing; only the open middle third does not.
pub fn is_boundary_crossing(offset: f32, total_width: f32) -> bool {
    offset >= total_width * 2.0 / 3.0 || offset <= total_width / 3.0
}

/// Returns the offset one third closer to the middle copy, if `offset` is crossing a boundary.
///
/// The host should apply the result without animation; the same logical items stay under the
/// viewport so the jump is invisible.
pub fn recenter(offset: f32, total_width: f32) -> Option<f32> {
    if total_width <= 0.0 || !is_boundary_crossing(offset, total_width) {
        return None;
    }
    let third = total_width / 3.0;
    if offset >= total_width * 2.0 / 3.0 {
        Some(offset - third)
    } else {
        Some(offset + third)
    }
}

/// Limits a move from `from` to `to` to at most `max_steps` items, then wraps the result into
/// `0..count`.
///
/// Clamping can step past either end of the logical range, hence the wrap.
pub fn clamp_step(
    from: usize,
    to: usize,
    max_steps: usize,
    count: usize,
) -> Result<usize, CarouselError> {
    if count == 0 {
        return Err(CarouselError::InvalidState { index: to, count });
    }
    let from = from as i64;
    let to = to as i64;
    let max_steps = max_steps as i64;

    let target = if (to - from).abs() > max_steps {
        if to > from {
            from + max_steps
        } else {
            from - max_steps
        }
    } else {
        to
    };

    Ok(target.rem_euclid(count as i64) as usize)
}

/// Picks the copy of `logical` whose expanded index is closest to `near`.
///
/// Ties go to the lower copy.
pub fn nearest_copy(logical: usize, near: usize, count: usize) -> Option<usize> {
    if logical >= count {
        return None;
    }
    (0..COPIES)
        .map(|copy| copy * count + logical)
        .min_by_key(|&expanded| expanded.abs_diff(near))
}
