// SPDX-License-Identifier: MIT
//! # Placement Rectangle Computation
//!
//! Given a target canvas, a padding amount and the dimensions of the original
//! photo, compute where the scaled photo lands on the canvas.
//!
//! ## Algorithm
//!
//! 1. Shrink the canvas by `padding` on every side to get the available interior.
//! 2. Portrait canvas: the photo takes the full interior width and the height is
//!    derived through the [`ScaleRule`]. Landscape or square canvas: the photo
//!    takes the full interior height and the width is derived.
//! 3. Center the scaled photo on the *full* canvas, not on the padded interior.
//!
//! Padding therefore only bounds the scale. Any residual margin is split evenly
//! by the centering step.
//!
//! ## Integer Semantics
//!
//! All arithmetic is integer arithmetic with division truncating toward zero.
//! Output files depend on the exact numbers, so nothing is rounded. Inputs
//! outside the documented domain (a padding that swallows the canvas, for
//! instance) yield a degenerate rectangle, never a panic.

/// Width and height of an image or canvas in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Portrait orientation, see [`is_vertical`].
    pub const fn is_vertical(self) -> bool {
        is_vertical(self.w as i64, self.h as i64)
    }
}

/// A rectangle is vertical (portrait) iff `width < height`.
///
/// Square is *not* vertical. Every orientation-dependent branch in the crate
/// goes through this predicate.
pub const fn is_vertical(width: i64, height: i64) -> bool {
    width < height
}

/// Where the scaled original is drawn on the canvas.
///
/// `left`/`top` may be negative when the scaled photo overflows the canvas;
/// the compositor clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The rectangle grown by `border` on every side.
    pub const fn border_rect(self, border: i32) -> Placement {
        Placement {
            left: self.left - border,
            top: self.top - border,
            width: self.width + border * 2,
            height: self.height + border * 2,
        }
    }

    /// Size usable for a resize, or `None` when the placement is degenerate.
    pub fn size(self) -> Option<Size> {
        if self.width > 0 && self.height > 0 {
            Some(Size::new(self.width as u32, self.height as u32))
        } else {
            None
        }
    }
}

/// Derives the complementary dimension from the one bounded by the canvas.
#[derive(Clone, Copy)]
pub enum ScaleRule<'a> {
    /// Keep the original photo's aspect ratio.
    Proportional,
    /// Fixed ratio: `x * num / den`, independent of the original.
    Ratio { num: i32, den: i32 },
    /// Caller supplied mapping.
    Custom(&'a dyn Fn(i32) -> i32),
}

impl Default for ScaleRule<'_> {
    fn default() -> Self {
        Self::Proportional
    }
}

impl core::fmt::Debug for ScaleRule<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScaleRule::Proportional => write!(f, "Proportional"),
            ScaleRule::Ratio { num, den } => write!(f, "Ratio({num}:{den})"),
            ScaleRule::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl ScaleRule<'_> {
    /// Apply the rule to the bounded dimension `x`.
    ///
    /// `numer`/`denom` are the original dimensions in the order that maps `x`
    /// onto the derived axis; they are only consulted by `Proportional`.
    fn apply(&self, x: i64, numer: i64, denom: i64) -> i64 {
        match *self {
            ScaleRule::Proportional => div_trunc(x * numer, denom),
            ScaleRule::Ratio { num, den } => div_trunc(x * num as i64, den as i64),
            ScaleRule::Custom(f) => f(x as i32) as i64,
        }
    }
}

// A zero denominator only comes from inputs outside the documented domain.
fn div_trunc(a: i64, b: i64) -> i64 {
    if b == 0 { 0 } else { a / b }
}

/// Compute the placement of the original photo on the target canvas.
///
/// ```
/// use ig_layout::rect::{calculate_internal_image_rectangle, Placement, ScaleRule};
///
/// let p = calculate_internal_image_rectangle(10, 1080, 1350, 2048, 1363, ScaleRule::Ratio { num: 3, den: 4 });
/// assert_eq!(p, Placement::new(10, 277, 1060, 795));
/// ```
pub fn calculate_internal_image_rectangle(
    padding: i32,
    target_width: i32,
    target_height: i32,
    original_width: i32,
    original_height: i32,
    rule: ScaleRule<'_>,
) -> Placement {
    let (tw, th) = (target_width as i64, target_height as i64);
    let (ow, oh) = (original_width as i64, original_height as i64);
    let pad = padding as i64;

    let avail_w = tw - 2 * pad;
    let avail_h = th - 2 * pad;

    let (width, height) = if is_vertical(tw, th) {
        (avail_w, rule.apply(avail_w, oh, ow))
    } else {
        (rule.apply(avail_h, ow, oh), avail_h)
    };

    Placement {
        left: ((tw - width) / 2) as i32,
        top: ((th - height) / 2) as i32,
        width: width as i32,
        height: height as i32,
    }
}

/// [`calculate_internal_image_rectangle`] over [`Size`] values.
pub fn place(padding: u32, target: Size, original: Size, rule: ScaleRule<'_>) -> Placement {
    calculate_internal_image_rectangle(
        padding as i32,
        target.w as i32,
        target.h as i32,
        original.w as i32,
        original.h as i32,
        rule,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_FOUR: ScaleRule<'static> = ScaleRule::Ratio { num: 3, den: 4 };

    #[test]
    fn reference_landscape_on_portrait_canvas() {
        let p = calculate_internal_image_rectangle(10, 1080, 1350, 2048, 1363, THREE_FOUR);
        assert_eq!(p, Placement::new(10, 277, 1060, 795));
    }

    #[test]
    fn proportional_landscape_on_portrait_canvas() {
        let p = calculate_internal_image_rectangle(
            10,
            1080,
            1350,
            2048,
            1363,
            ScaleRule::Proportional,
        );
        // 1060 * 1363 / 2048 = 705.46..
        assert_eq!(p, Placement::new(10, 322, 1060, 705));
    }

    #[test]
    fn proportional_portrait_on_landscape_canvas() {
        let p = calculate_internal_image_rectangle(
            10,
            1350,
            1080,
            1363,
            2048,
            ScaleRule::Proportional,
        );
        assert_eq!(p, Placement::new(322, 10, 705, 1060));
    }

    #[test]
    fn square_canvas_takes_landscape_branch() {
        let p = calculate_internal_image_rectangle(0, 1000, 1000, 400, 800, ScaleRule::Proportional);
        // height is bounded, width derived
        assert_eq!(p.height, 1000);
        assert_eq!(p.width, 500);
        assert_eq!((p.left, p.top), (250, 0));
        assert!(!is_vertical(1000, 1000));
    }

    #[test]
    fn overflow_yields_negative_offset() {
        let p = calculate_internal_image_rectangle(0, 1080, 1080, 2048, 1363, ScaleRule::Proportional);
        assert_eq!(p.width, 1622);
        assert_eq!(p.left, -271);
        assert_eq!(p.top, 0);
    }

    #[test]
    fn padding_wider_than_canvas_is_degenerate_not_a_panic() {
        let p = calculate_internal_image_rectangle(600, 1080, 1350, 2048, 1363, ScaleRule::Proportional);
        assert_eq!(p.width, -120);
        assert_eq!(p.height, -79);
        assert_eq!(p.size(), None);
    }

    #[test]
    fn custom_rule_receives_bounded_dimension() {
        let seen = core::cell::Cell::new(0);
        let f = |x: i32| {
            seen.set(x);
            x / 2
        };
        let p = calculate_internal_image_rectangle(20, 800, 1000, 1, 1, ScaleRule::Custom(&f));
        assert_eq!(seen.get(), 760);
        assert_eq!(p, Placement::new(20, 310, 760, 380));

        let p = calculate_internal_image_rectangle(20, 1000, 800, 1, 1, ScaleRule::Custom(&f));
        assert_eq!(seen.get(), 760);
        assert_eq!(p, Placement::new(310, 20, 380, 760));
    }

    #[test]
    fn zero_ratio_denominator_does_not_panic() {
        let p = calculate_internal_image_rectangle(0, 100, 200, 10, 10, ScaleRule::Ratio { num: 1, den: 0 });
        assert_eq!(p.height, 0);
    }

    #[test]
    fn border_rect_grows_every_side() {
        let p = Placement::new(30, 40, 100, 200).border_rect(10);
        assert_eq!(p, Placement::new(20, 30, 120, 220));
        assert_eq!(Placement::new(30, 40, 100, 200).border_rect(0), Placement::new(30, 40, 100, 200));
    }

    #[test]
    fn centering_and_aspect_hold_across_inputs() {
        let canvases = [(1080, 1350), (1350, 1080), (1080, 1080), (1200, 1600), (641, 999)];
        let originals = [(2048, 1363), (1363, 2048), (3000, 3000), (4000, 3000), (3, 5), (1, 1)];
        for &(tw, th) in &canvases {
            for &(ow, oh) in &originals {
                for padding in [0, 1, 10, 33, 100] {
                    let p = calculate_internal_image_rectangle(
                        padding,
                        tw,
                        th,
                        ow,
                        oh,
                        ScaleRule::Proportional,
                    );
                    let again = calculate_internal_image_rectangle(
                        padding,
                        tw,
                        th,
                        ow,
                        oh,
                        ScaleRule::Proportional,
                    );
                    assert_eq!(p, again);

                    let (w, h) = (p.width as i64, p.height as i64);
                    assert!(w > 0 && h > 0, "{tw}x{th} {ow}x{oh} pad {padding}: {p:?}");

                    let cx = 2 * p.left as i64 + w;
                    let cy = 2 * p.top as i64 + h;
                    assert!((cx - tw as i64).abs() <= 1, "{p:?}");
                    assert!((cy - th as i64).abs() <= 1, "{p:?}");

                    let (ow, oh) = (ow as i64, oh as i64);
                    if is_vertical(tw as i64, th as i64) {
                        let err = w * oh - h * ow;
                        assert!((0..ow).contains(&err), "{p:?}");
                    } else {
                        let err = h * ow - w * oh;
                        assert!((0..oh).contains(&err), "{p:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn place_matches_raw_call() {
        let p = place(10, Size::new(1080, 1350), Size::new(2048, 1363), THREE_FOUR);
        assert_eq!(p, Placement::new(10, 277, 1060, 795));
        assert!(Size::new(1080, 1350).is_vertical());
        assert!(!Size::new(1350, 1080).is_vertical());
    }
}
