/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};

use crate::constants::{ICO_BIT_COUNT, ICO_MAX_DIMENSION, ICO_PLANES};
use crate::error::IcoEncodeErrors;

/// A single ICO directory entry
///
/// Describes one embedded image, its declared dimensions and where
/// its payload lives in the file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IcoDirEntry {
    width:       u8,
    height:      u8,
    color_count: u8,
    reserved:    u8,
    planes:      u16,
    bit_count:   u16,
    size:        u32,
    offset:      u32
}

/// Map a declared size to its directory byte, 256 is stored as 0
fn size_to_byte(size: usize) -> Result<u8, IcoEncodeErrors> {
    match size {
        ICO_MAX_DIMENSION => Ok(0),
        1..=255 => Ok(size as u8),
        _ => Err(IcoEncodeErrors::InvalidDeclaredSize(size))
    }
}

impl IcoDirEntry {
    /// Create an entry for a square image of `declared_size` whose payload is
    /// `size` bytes long and starts `offset` bytes from the start of the file
    pub fn new(declared_size: usize, size: u32, offset: u32) -> Result<IcoDirEntry, IcoEncodeErrors> {
        let dimension = size_to_byte(declared_size)?;

        Ok(IcoDirEntry {
            width: dimension,
            height: dimension,
            // no palette
            color_count: 0,
            reserved: 0,
            planes: ICO_PLANES,
            bit_count: ICO_BIT_COUNT,
            size,
            offset
        })
    }
    /// Width as stored in the directory, `0` means 256
    pub const fn width_byte(&self) -> u8 {
        self.width
    }
    /// Height as stored in the directory, `0` means 256
    pub const fn height_byte(&self) -> u8 {
        self.height
    }
    /// The declared width, with the 256 encoding undone
    pub const fn declared_size(&self) -> usize {
        if self.width == 0 {
            ICO_MAX_DIMENSION
        } else {
            self.width as usize
        }
    }

    pub const fn planes(&self) -> u16 {
        self.planes
    }

    pub const fn bit_count(&self) -> u16 {
        self.bit_count
    }
    /// Payload length in bytes
    pub const fn size(&self) -> u32 {
        self.size
    }
    /// Payload offset from the start of the file
    pub const fn offset(&self) -> u32 {
        self.offset
    }
    /// Write the 16 byte entry
    pub fn write<T: ByteWriterTrait>(&self, writer: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        writer.write_u8(self.width)?;
        writer.write_u8(self.height)?;
        writer.write_u8(self.color_count)?;
        writer.write_u8(self.reserved)?;
        writer.write_u16_le(self.planes)?;
        writer.write_u16_le(self.bit_count)?;
        writer.write_u32_le(self.size)?;
        writer.write_u32_le(self.offset)?;
        Ok(())
    }
}
