//! Common test utilities for the conversion tests
//!
//! Synthetic photos and an in-memory image store so the conversion pipeline
//! can run without touching disk.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use igframe::error::{ConvertError, ConvertResult};
use igframe::ImageStore;

pub const RED: Rgba<u8> = Rgba([220, 20, 20, 255]);

/// Solid-color test photo.
pub fn photo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, RED)
}

/// Write a PNG photo into `dir` and return its path.
pub fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    photo(width, height).save(&path).unwrap();
    path
}

/// In-memory [`ImageStore`]: inputs are registered up front, outputs are kept
/// for inspection.
#[derive(Default)]
pub struct MemoryStore {
    pub inputs: HashMap<PathBuf, RgbaImage>,
    pub texts: HashMap<PathBuf, String>,
    pub saved: RefCell<Vec<(PathBuf, RgbaImage, u8)>>,
}

impl MemoryStore {
    pub fn with_photo(mut self, path: &str, image: RgbaImage) -> Self {
        self.inputs.insert(PathBuf::from(path), image);
        self
    }

    pub fn with_text(mut self, path: &str, text: &str) -> Self {
        self.texts.insert(PathBuf::from(path), text.to_string());
        self
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saved.borrow().iter().map(|(p, _, _)| p.clone()).collect()
    }
}

impl ImageStore for MemoryStore {
    fn read_to_string(&self, path: &Path) -> ConvertResult<String> {
        self.texts.get(path).cloned().ok_or_else(|| {
            ConvertError::io_at(
                "read file list",
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such list"),
            )
        })
    }

    fn load(&self, path: &Path) -> ConvertResult<RgbaImage> {
        self.inputs.get(path).cloned().ok_or_else(|| {
            ConvertError::io_at(
                "open",
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn save_jpeg(&self, path: &Path, image: &RgbaImage, quality: u8) -> ConvertResult<()> {
        self.saved
            .borrow_mut()
            .push((path.to_path_buf(), image.clone(), quality));
        Ok(())
    }
}
