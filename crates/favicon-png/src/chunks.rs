/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Walking the chunks of an encoded png
use crate::constants::PNG_SIGNATURE;
use crate::crc::calc_crc_with_bytes;
use crate::enums::PngChunkType;

/// A single chunk borrowed from an encoded stream
#[derive(Copy, Clone, Debug)]
pub struct PngChunk<'a> {
    pub chunk:      [u8; 4],
    pub chunk_type: PngChunkType,
    pub data:       &'a [u8],
    /// crc as stored in the stream
    pub crc:        u32
}

impl<'a> PngChunk<'a> {
    /// Recompute the crc over chunk type and data
    pub fn computed_crc(&self) -> u32 {
        let crc = calc_crc_with_bytes(&self.chunk, u32::MAX);
        !calc_crc_with_bytes(self.data, crc)
    }
    /// Whether the stored crc matches the chunk contents
    pub fn crc_matches(&self) -> bool {
        self.computed_crc() == self.crc
    }
}

/// Iterator over the chunks of a png stream
///
/// Yields an error once if the stream is truncated midway through
/// a chunk and stops afterwards
pub struct ChunkIter<'a> {
    data:     &'a [u8],
    position: usize,
    finished: bool
}

/// Start walking the chunks of `png`
///
/// # Errors
/// If the stream doesn't start with the png signature
pub fn iter_chunks(png: &[u8]) -> Result<ChunkIter<'_>, &'static str> {
    if png.len() < 8 || png[..8] != PNG_SIGNATURE.to_be_bytes() {
        return Err("Bad PNG signature, not a png");
    }
    Ok(ChunkIter {
        data:     png,
        position: 8,
        finished: false
    })
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<PngChunk<'a>, &'static str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.position == self.data.len() {
            return None;
        }
        let remaining = &self.data[self.position..];

        if remaining.len() < 12 {
            self.finished = true;
            return Some(Err("Truncated chunk header"));
        }
        let length = u32::from_be_bytes([remaining[0], remaining[1], remaining[2], remaining[3]]);
        let length = length as usize;
        let chunk = [remaining[4], remaining[5], remaining[6], remaining[7]];

        // length + tag + crc, a length near u32::MAX must not wrap on 32 bit targets
        let chunk_end = match length.checked_add(12) {
            Some(end) if end <= remaining.len() => end,
            _ => {
                self.finished = true;
                return Some(Err("Truncated chunk data"));
            }
        };
        let data = &remaining[8..chunk_end - 4];
        let crc_bytes = &remaining[chunk_end - 4..chunk_end];
        let crc = u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);

        self.position += chunk_end;

        Some(Ok(PngChunk {
            chunk,
            chunk_type: PngChunkType::from_tag(&chunk),
            data,
            crc
        }))
    }
}
