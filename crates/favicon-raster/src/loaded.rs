/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use favicon_core::pixels::{PixelErrors, RgbaBuffer};
use image::imageops::FilterType;
use image::RgbaImage;
use log::{debug, info};

use crate::error::RasterErrors;
use crate::source::PixelSource;

/// An existing image, resampled to each requested size
///
/// The image is decoded once and converted to RGBA, every render
/// resamples from that copy with a Lanczos3 filter.
pub struct LoadedImage {
    path:  PathBuf,
    image: RgbaImage
}

impl LoadedImage {
    /// Read and decode the image at `path`
    ///
    /// # Errors
    /// - [`RasterErrors::MissingSource`] if nothing exists at `path`
    /// - [`RasterErrors::DecodeError`] if the file isn't a supported image
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LoadedImage, RasterErrors> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(RasterErrors::MissingSource(path.to_path_buf()));
        }
        let image = image::open(path)
            .map_err(|err| RasterErrors::DecodeError(path.to_path_buf(), err))?
            .to_rgba8();

        info!(
            "Loaded source image {:?}, {}x{}",
            path,
            image.width(),
            image.height()
        );
        Ok(LoadedImage {
            path: path.to_path_buf(),
            image
        })
    }
    /// Use pixels already in memory as the source
    pub fn from_buffer(buffer: &RgbaBuffer) -> Result<LoadedImage, RasterErrors> {
        let width = u32::try_from(buffer.width())
            .map_err(|_| RasterErrors::TooLargeDimensions(buffer.width()))?;
        let height = u32::try_from(buffer.height())
            .map_err(|_| RasterErrors::TooLargeDimensions(buffer.height()))?;

        let image = RgbaImage::from_raw(width, height, buffer.as_bytes().to_vec()).ok_or(
            PixelErrors::WrongInputSize(buffer.width() * buffer.height() * 4, buffer.as_bytes().len())
        )?;

        Ok(LoadedImage {
            path: PathBuf::new(),
            image
        })
    }
    /// Where the image was read from, empty for in memory sources
    pub fn path(&self) -> &Path {
        &self.path
    }
    /// Dimensions of the source image before resampling
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl PixelSource for LoadedImage {
    fn name(&self) -> &'static str {
        "loaded image"
    }

    fn render(&self, size: usize) -> Result<RgbaBuffer, RasterErrors> {
        if size == 0 {
            return Err(PixelErrors::ZeroDimension("size").into());
        }
        let target = u32::try_from(size).map_err(|_| RasterErrors::TooLargeDimensions(size))?;

        let pixels = if self.image.dimensions() == (target, target) {
            self.image.clone()
        } else {
            debug!(
                "Resampling {}x{} source to {size}x{size}",
                self.image.width(),
                self.image.height()
            );
            image::imageops::resize(&self.image, target, target, FilterType::Lanczos3)
        };

        Ok(RgbaBuffer::new(size, size, pixels.into_raw())?)
    }
}
