// SPDX-License-Identifier: MIT
//! # Background Canvas Geometry
//!
//! Geometry for the blurred-background variant: the photo is kept at its own
//! size and a blurred, darkened copy of itself is stretched behind it to a
//! 4:5 frame. Also clipping helpers shared by both compositors.

use crate::rect::{Placement, Size};

/// Canvas for the blurred-background variant.
///
/// Portrait sources widen to `w * 5 / 4`, landscape and square sources grow
/// to a height of `w * 5 / 4`. Integer division truncates.
pub fn four_five_bounds(source: Size) -> Size {
    if source.is_vertical() {
        Size::new(scale_five_fourths(source.w), source.h)
    } else {
        Size::new(source.w, scale_five_fourths(source.w))
    }
}

fn scale_five_fourths(v: u32) -> u32 {
    ((v as u64 * 5) / 4) as u32
}

/// Offset that centers `inner` on `canvas`. Negative when `inner` is larger.
pub fn centered_offset(canvas: Size, inner: Size) -> (i64, i64) {
    (
        (canvas.w as i64 - inner.w as i64) / 2,
        (canvas.h as i64 - inner.h as i64) / 2,
    )
}

/// Intersection of `rect` with `(0, 0, canvas.w, canvas.h)`.
///
/// Returns `(x, y, w, h)` in canvas coordinates, `None` if nothing is visible.
pub fn clip_to_canvas(rect: Placement, canvas: Size) -> Option<(u32, u32, u32, u32)> {
    let x0 = (rect.left as i64).max(0);
    let y0 = (rect.top as i64).max(0);
    let x1 = (rect.left as i64 + rect.width as i64).min(canvas.w as i64);
    let y1 = (rect.top as i64 + rect.height as i64).min(canvas.h as i64);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}
