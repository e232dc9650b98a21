/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGBA pixel storage
//!
//! Every pixel source produces an [`RgbaBuffer`] and every encoder
//! consumes one, so the dimension checks live here.
use core::fmt::{Debug, Display, Formatter};

/// Number of bytes in a single RGBA pixel
pub const RGBA_COMPONENTS: usize = 4;

/// Errors that occur when building a pixel buffer
pub enum PixelErrors {
    /// Width or height was zero, the string names the dimension
    ZeroDimension(&'static str),
    /// Buffer length doesn't match `width * height * 4`, (expected, found)
    WrongInputSize(usize, usize),
    /// `width * height * 4` doesn't fit in a usize
    Overflow(usize, usize)
}

impl Debug for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelErrors::ZeroDimension(dimension) => {
                writeln!(f, "Invalid dimension, {dimension} cannot be zero")
            }
            PixelErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PixelErrors::Overflow(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the buffer size")
            }
        }
    }
}

impl Display for PixelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PixelErrors {}

/// Calculate the number of bytes needed to store a `width` x `height`
/// RGBA image, rejecting zero dimensions and overflow
pub fn rgba_buffer_size(width: usize, height: usize) -> Result<usize, PixelErrors> {
    if width == 0 {
        return Err(PixelErrors::ZeroDimension("width"));
    }
    if height == 0 {
        return Err(PixelErrors::ZeroDimension("height"));
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(RGBA_COMPONENTS))
        .ok_or(PixelErrors::Overflow(width, height))
}

/// An RGBA image with eight bits per channel
///
/// Pixels are stored row major, top row first, with
/// exactly `width * height * 4` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl RgbaBuffer {
    /// Create a new buffer from raw interleaved RGBA bytes
    ///
    /// # Errors
    /// - Zero width or height
    /// - `data.len()` is not `width * height * 4`
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<RgbaBuffer, PixelErrors> {
        let expected = rgba_buffer_size(width, height)?;

        if data.len() != expected {
            return Err(PixelErrors::WrongInputSize(expected, data.len()));
        }
        Ok(RgbaBuffer {
            width,
            height,
            data
        })
    }
    /// Create a buffer from individual pixels
    pub fn from_pixels(
        width: usize, height: usize, pixels: &[[u8; 4]]
    ) -> Result<RgbaBuffer, PixelErrors> {
        RgbaBuffer::new(width, height, bytemuck::cast_slice(pixels).to_vec())
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return the dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Raw interleaved bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// View the buffer as pixels
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }
    /// Return the pixel at column `x` and row `y`, or `None` if
    /// it lies outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels().get(y * self.width + x).copied()
    }
    /// Iterate over rows of raw bytes, top row first
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width * RGBA_COMPONENTS)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Debug for RgbaBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RgbaBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::pixels::{PixelErrors, RgbaBuffer};

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            RgbaBuffer::new(0, 4, vec![]),
            Err(PixelErrors::ZeroDimension("width"))
        ));
        assert!(matches!(
            RgbaBuffer::new(4, 0, vec![]),
            Err(PixelErrors::ZeroDimension("height"))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = RgbaBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, PixelErrors::WrongInputSize(16, 15)));
    }

    #[test]
    fn pixel_lookup() {
        let pixels = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];
        let buffer = RgbaBuffer::from_pixels(2, 2, &pixels).unwrap();

        assert_eq!(buffer.pixel(1, 1), Some([13, 14, 15, 16]));
        assert_eq!(buffer.pixel(0, 1), Some([9, 10, 11, 12]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.rows().count(), 2);
    }
}
