/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types the encoder writes, see https://www.w3.org/TR/2003/REC-PNG-20031110/
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PngChunkType {
    IHDR,
    IDAT,
    IEND,
    unkn
}

impl PngChunkType {
    pub fn from_tag(tag: &[u8; 4]) -> PngChunkType {
        match tag {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::unkn
        }
    }
}

/// Scanline filter
///
/// Only `None` is written, scanlines reach the
/// compressor untouched
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FilterMethod {
    #[default]
    None
}

impl FilterMethod {
    pub const fn to_int(self) -> u8 {
        match self {
            FilterMethod::None => 0
        }
    }
}
