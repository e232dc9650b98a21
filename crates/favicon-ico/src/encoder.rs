/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::bytestream::{ByteWriter, ByteWriterTrait};
use log::debug;

use crate::constants::{ICO_DIR_ENTRY_SIZE, ICO_HEADER_SIZE, ICO_TYPE_ICON};
use crate::entry::IcoDirEntry;
use crate::error::IcoEncodeErrors;

/// An encoded image waiting to be packed, with the size
/// its directory entry will declare
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IcoImage<'a> {
    pub declared_size: usize,
    pub data:          &'a [u8]
}

/// Build directory entries for images given as `(declared_size, payload_length)`
///
/// Offsets are a running sum starting right after the header and all entries
pub(crate) fn build_directory(images: &[(usize, usize)]) -> Result<Vec<IcoDirEntry>, IcoEncodeErrors> {
    if images.is_empty() {
        return Err(IcoEncodeErrors::NoImages);
    }
    if images.len() > usize::from(u16::MAX) {
        return Err(IcoEncodeErrors::TooManyImages(images.len()));
    }
    let mut offset = ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * images.len();
    let mut entries = Vec::with_capacity(images.len());

    for (index, &(declared_size, length)) in images.iter().enumerate() {
        let size =
            u32::try_from(length).map_err(|_| IcoEncodeErrors::TooLargePayload(index, length))?;
        let start =
            u32::try_from(offset).map_err(|_| IcoEncodeErrors::OffsetOverflow(index, offset))?;

        entries.push(IcoDirEntry::new(declared_size, size, start)?);

        offset = offset
            .checked_add(length)
            .ok_or(IcoEncodeErrors::OffsetOverflow(index, usize::MAX))?;
    }
    Ok(entries)
}

/// ICO container writer
///
/// Images are written in the order they were added
#[derive(Default)]
pub struct IcoEncoder<'a> {
    images: Vec<IcoImage<'a>>
}

impl<'a> IcoEncoder<'a> {
    pub fn new() -> IcoEncoder<'a> {
        IcoEncoder { images: Vec::new() }
    }
    /// Create an encoder from images chosen beforehand,
    /// e.g by [`select_payloads`](crate::select_payloads)
    pub fn from_images(images: Vec<IcoImage<'a>>) -> IcoEncoder<'a> {
        IcoEncoder { images }
    }
    /// Append an image that will be declared as `declared_size` x `declared_size`
    pub fn add_image(&mut self, declared_size: usize, data: &'a [u8]) {
        self.images.push(IcoImage {
            declared_size,
            data
        });
    }

    pub fn images(&self) -> &[IcoImage<'a>] {
        &self.images
    }
    /// Compute the directory that [`encode`](Self::encode) would write
    pub fn directory(&self) -> Result<Vec<IcoDirEntry>, IcoEncodeErrors> {
        let sizes: Vec<(usize, usize)> = self
            .images
            .iter()
            .map(|image| (image.declared_size, image.data.len()))
            .collect();

        build_directory(&sizes)
    }
    /// Total length of the encoded container
    pub fn encoded_size(&self) -> usize {
        let payloads: usize = self.images.iter().map(|image| image.data.len()).sum();
        ICO_HEADER_SIZE + ICO_DIR_ENTRY_SIZE * self.images.len() + payloads
    }
    /// Write the container to `sink`, returning the number of bytes written
    ///
    /// The directory is validated before anything is written
    pub fn encode<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, IcoEncodeErrors> {
        let entries = self.directory()?;

        let mut writer = ByteWriter::new(sink);
        writer.reserve(self.encoded_size())?;

        // header
        writer.write_u16_le(0)?;
        writer.write_u16_le(ICO_TYPE_ICON)?;
        // build_directory checked the count fits
        writer.write_u16_le(entries.len() as u16)?;

        for entry in &entries {
            debug!(
                "ICO entry {}x{}, {} bytes at offset {}",
                entry.declared_size(),
                entry.declared_size(),
                entry.size(),
                entry.offset()
            );
            entry.write(&mut writer)?;
        }
        for image in &self.images {
            writer.write_all(image.data)?;
        }
        writer.flush()?;

        Ok(writer.bytes_written())
    }
    /// Write the container into a new buffer
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, IcoEncodeErrors> {
        let mut sink = Vec::with_capacity(self.encoded_size());
        self.encode(&mut sink)?;
        Ok(sink)
    }
}
