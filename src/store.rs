//! Filesystem collaborator.
//!
//! The conversion code never touches the filesystem directly; it goes through
//! an [`ImageStore`] so tests can swap in an in-memory implementation.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::error::{ConvertError, ConvertResult};

/// Where images and file lists come from and where outputs go.
pub trait ImageStore {
    /// Read a UTF-8 text file (the batch list).
    fn read_to_string(&self, path: &Path) -> ConvertResult<String>;

    /// Load and decode an image.
    fn load(&self, path: &Path) -> ConvertResult<RgbaImage>;

    /// Encode `image` as JPEG at `quality` and write it to `path`.
    fn save_jpeg(&self, path: &Path, image: &RgbaImage, quality: u8) -> ConvertResult<()>;
}

/// [`ImageStore`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl ImageStore for FsStore {
    fn read_to_string(&self, path: &Path) -> ConvertResult<String> {
        std::fs::read_to_string(path).map_err(|e| ConvertError::io_at("read file list", path, e))
    }

    fn load(&self, path: &Path) -> ConvertResult<RgbaImage> {
        let file = File::open(path).map_err(|e| ConvertError::io_at("open", path, e))?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| ConvertError::io_at("read", path, e))?;
        let image = reader.decode().map_err(|e| ConvertError::decode(path, e))?;
        Ok(image.into_rgba8())
    }

    fn save_jpeg(&self, path: &Path, image: &RgbaImage, quality: u8) -> ConvertResult<()> {
        // Encode fully before touching the filesystem so a failed encode leaves no file.
        let mut bytes = Vec::new();
        encode_jpeg(&mut bytes, image, quality).map_err(|e| ConvertError::encode(path, e))?;
        std::fs::write(path, bytes).map_err(|e| ConvertError::io_at("write", path, e))
    }
}

/// JPEG has no alpha channel; the image is flattened to RGB first.
pub fn encode_jpeg<W: Write>(writer: &mut W, image: &RgbaImage, quality: u8) -> image::ImageResult<()> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.encode_image(&rgb)
}
