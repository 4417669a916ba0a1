//! Point → item resolution over a [`Layout`].
//!
//! Frames are sorted by `x` and never overlap, so direct hits are a binary search. Points in
//! the spacing between items are resolved by probing outward until an item is found on each
//! side.

use crate::{Layout, Point, ResizePolicy};

/// Returns the expanded index of the item whose frame contains `point`.
pub fn index_at(layout: &Layout, point: Point) -> Option<usize> {
    let index = index_at_x(layout, point.x)?;
    let frame = layout.frame(index)?;
    frame.contains(point).then_some(index)
}

/// Returns the expanded index of the item spanning `x`, ignoring the cross axis.
pub fn index_at_x(layout: &Layout, x: f32) -> Option<usize> {
    let frames = layout.frames();
    let index = frames.partition_point(|frame| frame.max_x() <= x);
    let frame = frames.get(index)?;
    frame.contains_x(x).then_some(index)
}

/// Distance between probes when searching for the nearest item.
pub fn probe_step(policy: ResizePolicy) -> f32 {
    match policy.spacing() {
        Some(spacing) if spacing > 0.0 => spacing,
        _ => 1.0,
    }
}

/// Returns the expanded index of the item containing `point`, or else the closest item on
/// either side of it.
///
/// Margins are measured from `point.x` to the facing edge of each candidate; the right-hand
/// item wins ties. Returns `None` for an empty layout or a non-finite `point.x`.
pub fn nearest_index(layout: &Layout, point: Point, step: f32) -> Option<usize> {
    if !point.x.is_finite() {
        return None;
    }
    if let Some(index) = index_at(layout, point).or_else(|| index_at_x(layout, point.x)) {
        return Some(index);
    }

    let step = if step.is_finite() && step > 0.0 {
        step
    } else {
        1.0
    };
    let left = probe(layout, point.x, -step);
    let right = probe(layout, point.x, step);
    ctrace!(x = point.x, ?left, ?right, "nearest_index probe");

    match (left, right) {
        (Some(left), Some(right)) => {
            let left_margin = point.x - layout.frame(left)?.max_x();
            let right_margin = layout.frame(right)?.min_x() - point.x;
            if right_margin <= left_margin {
                Some(right)
            } else {
                Some(left)
            }
        }
        (left, right) => right.or(left),
    }
}

fn probe(layout: &Layout, from: f32, step: f32) -> Option<usize> {
    if !from.is_finite() || !step.is_finite() || step == 0.0 {
        return None;
    }
    let frames = layout.frames();
    let start = frames.first()?.min_x();
    let end = frames.last()?.max_x();

    let mut x = from.clamp(start, end);
    loop {
        x += step;
        if (step < 0.0 && x < start) || (step > 0.0 && x >= end) {
            return None;
        }
        if let Some(index) = index_at_x(layout, x) {
            return Some(index);
        }
    }
}
