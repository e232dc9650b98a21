/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when producing pixels
use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use favicon_core::pixels::PixelErrors;

pub enum RasterErrors {
    /// The source image does not exist
    MissingSource(PathBuf),
    /// The source image exists but could not be read
    DecodeError(PathBuf, image::ImageError),
    /// Requested size can't be represented by the resampler
    TooLargeDimensions(usize),
    PixelErrors(PixelErrors)
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RasterErrors::MissingSource(path) => {
                writeln!(f, "Source image {:?} not found", path)
            }
            RasterErrors::DecodeError(path, err) => {
                writeln!(f, "Could not decode source image {:?}: {}", path, err)
            }
            RasterErrors::TooLargeDimensions(size) => {
                writeln!(f, "Cannot render an image of size {size}")
            }
            RasterErrors::PixelErrors(err) => writeln!(f, "{:?}", err)
        }
    }
}

impl Display for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for RasterErrors {}

impl From<PixelErrors> for RasterErrors {
    fn from(value: PixelErrors) -> Self {
        RasterErrors::PixelErrors(value)
    }
}
