// SPDX-License-Identifier: MIT
//! # ig-layout: Placement Geometry for Social Media Re-framing
//!
//! Computes where a photo goes when it is re-framed onto a canvas of a
//! different aspect ratio (typically 2:3 or 3:4 photos onto a 4:5 canvas).
//!
//! ## Key Components
//!
//! - [`rect`]: the placement calculator, orientation predicate and scale rules
//! - [`canvas`]: background-variant bounds, centering and clipping helpers
//! - [`cpu`]: RGBA8 resize kernel built on fast_image_resize
//!
//! Everything in [`rect`] and [`canvas`] is pure integer arithmetic and safe
//! to call from any number of threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use ig_layout::rect::{place, ScaleRule, Size};
//!
//! let p = place(30, Size::new(1080, 1350), Size::new(6000, 4000), ScaleRule::Proportional);
//! assert_eq!((p.width, p.height), (1020, 680));
//! assert_eq!((p.left, p.top), (30, 335));
//! ```

pub mod canvas;
pub mod cpu;
pub mod rect;

pub use rect::{calculate_internal_image_rectangle, is_vertical, place, Placement, ScaleRule, Size};
