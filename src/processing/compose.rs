//! # Output Composition
//!
//! Turns a decoded photo into one of the two output variants. Geometry comes
//! from `ig_layout`; pixels are pushed around with `image` and resized with
//! fast_image_resize.

use image::{imageops, Rgba, RgbaImage};
use ig_layout::canvas::{centered_offset, clip_to_canvas, four_five_bounds};
use ig_layout::cpu::resize_rgba;
use ig_layout::rect::{place, Size};

use crate::config::{BlurConfig, BorderConfig, Job};
use crate::error::{ConvertError, ConvertResult};

pub const WHITE_SMOKE: Rgba<u8> = Rgba([245, 245, 245, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Gaussian sigma of the background blur, in output pixels.
pub const BLUR_SIGMA: f32 = 80.0;

/// The background is blurred at 1/8 resolution and scaled back up.
const BLUR_DOWNSCALE: u32 = 8;

/// Compose the variant selected by `job`.
pub fn compose(source: &RgbaImage, job: &Job) -> ConvertResult<RgbaImage> {
    match job {
        Job::Blurred(config) => compose_blurred(source, config),
        Job::Bordered(config) => compose_bordered(source, config),
    }
}

/// Fixed canvas, WhiteSmoke background, white frame, photo centered.
pub fn compose_bordered(source: &RgbaImage, config: &BorderConfig) -> ConvertResult<RgbaImage> {
    let original = Size::new(source.width(), source.height());
    let canvas_size = config.canvas();
    let placement = place(config.padding, canvas_size, original, config.scale_rule());
    log::debug!(
        "placing {}x{} on {}x{} (padding {}): {:?}",
        original.w,
        original.h,
        canvas_size.w,
        canvas_size.h,
        config.padding,
        placement
    );

    let target = placement.size().ok_or_else(|| {
        ConvertError::processing(
            "placement",
            format!(
                "padding {} leaves no room on a {}x{} canvas",
                config.padding, canvas_size.w, canvas_size.h
            ),
        )
        .with_recovery_suggestion(format!(
            "Use a padding below {}",
            canvas_size.w.min(canvas_size.h).div_ceil(2)
        ))
    })?;
    let resized = resize(source, target)?;

    let mut canvas = RgbaImage::from_pixel(canvas_size.w, canvas_size.h, WHITE_SMOKE);
    if config.border > 0 {
        let frame = placement.border_rect(config.border as i32);
        if let Some((x, y, w, h)) = clip_to_canvas(frame, canvas_size) {
            fill_rect(&mut canvas, x, y, w, h, WHITE);
        }
    }
    imageops::overlay(
        &mut canvas,
        &resized,
        placement.left as i64,
        placement.top as i64,
    );
    Ok(canvas)
}

/// 4:5 canvas, darkened blurred copy behind, photo at its own size centered.
pub fn compose_blurred(source: &RgbaImage, config: &BlurConfig) -> ConvertResult<RgbaImage> {
    let original = Size::new(source.width(), source.height());
    let bounds = four_five_bounds(original);
    log::debug!(
        "background for {}x{}: {}x{}",
        original.w,
        original.h,
        bounds.w,
        bounds.h
    );

    let mut background = blurred_background(source, bounds)?;
    apply_lightness(&mut background, config.lightness);

    let (x, y) = centered_offset(bounds, original);
    imageops::overlay(&mut background, source, x, y);
    Ok(background)
}

fn blurred_background(source: &RgbaImage, bounds: Size) -> ConvertResult<RgbaImage> {
    let small = Size::new(
        (bounds.w / BLUR_DOWNSCALE).max(1),
        (bounds.h / BLUR_DOWNSCALE).max(1),
    );
    let shrunk = resize(source, small)?;
    let blurred = imageops::blur(&shrunk, BLUR_SIGMA / BLUR_DOWNSCALE as f32);
    resize(&blurred, bounds)
}

/// Multiply RGB by `lightness`; `0` is black, `1` is unchanged. Alpha untouched.
pub fn apply_lightness(image: &mut RgbaImage, lightness: f32) {
    if lightness == 1.0 {
        return;
    }
    for px in image.pixels_mut() {
        for c in &mut px.0[..3] {
            *c = (*c as f32 * lightness).round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            image.put_pixel(px, py, color);
        }
    }
}

/// Resize with the SIMD kernel, skipping the work when the size already matches.
pub fn resize(source: &RgbaImage, to: Size) -> ConvertResult<RgbaImage> {
    if source.dimensions() == (to.w, to.h) {
        return Ok(source.clone());
    }
    let from = Size::new(source.width(), source.height());
    let buf = resize_rgba(source.as_raw(), from, to)?;
    RgbaImage::from_raw(to.w, to.h, buf).ok_or_else(|| {
        ConvertError::processing("resize", format!("buffer does not match {}x{}", to.w, to.h))
    })
}
