/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when encoding a png
use core::fmt::{Debug, Display, Formatter};

use favicon_core::bytestream::ByteIoError;
use favicon_core::pixels::PixelErrors;

/// PNG encoding errors
pub enum PngEncodeErrors {
    /// Width or height is zero
    InvalidDimension(&'static str),
    /// The input size was expected to be of a certain size but isn't, (expected, found)
    WrongInputSize(usize, usize),
    /// Too large dimensions for a given dimension, (dimension, maximum, found)
    TooLargeDimensions(&'static str, usize, usize),
    /// Chunk data is too long to be described by a png length field
    TooLargeChunk([u8; 4], usize),
    /// The zlib stream could not be produced
    CompressionError(std::io::Error),
    /// Generic message
    Generic(&'static str),
    IoErrors(ByteIoError)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PngEncodeErrors::InvalidDimension(dimension) => {
                writeln!(f, "Invalid dimension, {dimension} must be greater than zero")
            }
            PngEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PngEncodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            PngEncodeErrors::TooLargeChunk(name, length) => {
                writeln!(
                    f,
                    "Chunk {} of {length} bytes is too large to encode",
                    String::from_utf8_lossy(name)
                )
            }
            PngEncodeErrors::CompressionError(err) => {
                writeln!(f, "Could not compress scanlines {}", err)
            }
            PngEncodeErrors::Generic(err) => writeln!(f, "{}", err),
            PngEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<ByteIoError> for PngEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PngEncodeErrors::IoErrors(value)
    }
}

impl From<PixelErrors> for PngEncodeErrors {
    fn from(value: PixelErrors) -> Self {
        match value {
            PixelErrors::ZeroDimension(dimension) => PngEncodeErrors::InvalidDimension(dimension),
            PixelErrors::WrongInputSize(expected, found) => {
                PngEncodeErrors::WrongInputSize(expected, found)
            }
            PixelErrors::Overflow(_, _) => PngEncodeErrors::Generic("Overflow")
        }
    }
}
