// SPDX-License-Identifier: MIT
// CPU resize built on fast_image_resize (SIMD-accelerated).
// RGBA8 in → RGBA8 out, direct write into caller-provided dst buffer.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{ResizeOptions, Resizer};

use crate::rect::Size;

#[derive(Debug)]
pub enum ScaleError {
    BufferTooSmall { need: usize, got: usize },
    EmptyTarget,
    Fir(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
}

impl From<fir::ResizeError> for ScaleError { fn from(e: fir::ResizeError) -> Self { Self::Fir(e) } }
impl From<fir::ImageBufferError> for ScaleError { fn from(e: fir::ImageBufferError) -> Self { Self::ImageBuf(e) } }

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::BufferTooSmall { need, got } => {
                write!(f, "Output buffer too small: need {} bytes, got {}", need, got)
            }
            ScaleError::EmptyTarget => write!(f, "Resize target has a zero dimension"),
            ScaleError::Fir(e) => write!(f, "Fast image resize error: {}", e),
            ScaleError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Fir(e) => Some(e),
            ScaleError::ImageBuf(e) => Some(e),
            _ => None,
        }
    }
}

/// Bytes needed for a tightly packed RGBA8 image of `size`.
pub fn rgba_len(size: Size) -> usize {
    (size.w as usize) * (size.h as usize) * 4
}

/// Resize a tightly packed RGBA8 buffer.
/// `dst` must hold at least `out.w * out.h * 4` bytes; only that prefix is written.
pub fn scale_rgba_cpu(
    resizer: &mut Resizer,
    src_rgba: &[u8],
    src: Size,
    out: Size,
    dst: &mut [u8],
) -> Result<(), ScaleError> {
    if out.w == 0 || out.h == 0 {
        return Err(ScaleError::EmptyTarget);
    }
    let dst_len = rgba_len(out);
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall { need: dst_len, got: dst.len() });
    }

    let src_view = TypedImageRef::<U8x4>::from_buffer(src.w, src.h, src_rgba)?;
    let mut dst_image = TypedImage::<U8x4>::from_buffer(out.w, out.h, &mut dst[..dst_len])?;

    // Photos are opaque; skip alpha premultiplication.
    let opts = ResizeOptions::new().use_alpha(false);
    resizer.resize_typed::<U8x4>(&src_view, &mut dst_image, &opts)?;

    Ok(())
}

/// Allocate the output and resize into it.
pub fn resize_rgba(src_rgba: &[u8], src: Size, out: Size) -> Result<Vec<u8>, ScaleError> {
    let mut resizer = Resizer::new();
    let mut dst = vec![0u8; rgba_len(out)];
    scale_rgba_cpu(&mut resizer, src_rgba, src, out, &mut dst)?;
    Ok(dst)
}
