/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when writing an ICO container
use core::fmt::{Debug, Display, Formatter};

use favicon_core::bytestream::ByteIoError;

/// ICO encoding errors
pub enum IcoEncodeErrors {
    /// The container has no images
    NoImages,
    /// More images than the 16 bit count field can hold
    TooManyImages(usize),
    /// Declared size outside `1..=256`
    InvalidDeclaredSize(usize),
    /// Payload length doesn't fit the 32 bit size field, (index, length)
    TooLargePayload(usize, usize),
    /// Payload offset doesn't fit the 32 bit offset field, (index, offset)
    OffsetOverflow(usize, usize),
    /// No rendered images to choose payloads from
    NoRenderedImages,
    IoErrors(ByteIoError)
}

impl Debug for IcoEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            IcoEncodeErrors::NoImages => {
                writeln!(f, "Cannot write an ICO container without images")
            }
            IcoEncodeErrors::TooManyImages(count) => {
                writeln!(f, "Too many images {count}, an ICO holds at most {}", u16::MAX)
            }
            IcoEncodeErrors::InvalidDeclaredSize(size) => {
                writeln!(f, "Invalid declared size {size}, expected a value between 1 and 256")
            }
            IcoEncodeErrors::TooLargePayload(index, length) => {
                writeln!(
                    f,
                    "Image {index} is {length} bytes, larger than the 32 bit size field allows"
                )
            }
            IcoEncodeErrors::OffsetOverflow(index, offset) => {
                writeln!(
                    f,
                    "Image {index} would start at offset {offset}, beyond the 32 bit offset field"
                )
            }
            IcoEncodeErrors::NoRenderedImages => {
                writeln!(f, "No rendered images to build the ICO from")
            }
            IcoEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl Display for IcoEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for IcoEncodeErrors {}

impl From<ByteIoError> for IcoEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        IcoEncodeErrors::IoErrors(value)
    }
}
