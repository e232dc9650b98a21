/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `\x89PNG\r\n\x1a\n` as a big endian integer
pub const PNG_SIGNATURE: u64 = 0x89504E47_0D0A1A0A;

/// Largest width or height a png may declare, (2^31)-1
pub const PNG_MAX_DIMENSION: usize = (1 << 31) - 1;

/// Largest length a single png chunk may declare, (2^31)-1
pub const PNG_MAX_CHUNK_LENGTH: usize = (1 << 31) - 1;

pub const PNG_BIT_DEPTH: u8 = 8;

/// Truecolor with alpha
pub const PNG_COLOR_TYPE_RGBA: u8 = 6;
