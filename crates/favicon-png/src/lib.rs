/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A png encoder for favicons
//!
//! This features a small PNG writer which emits truecolor images
//! with an alpha channel, eight bits per channel, the format every
//! browser accepts for favicons and touch icons.
//!
//! # Format
//! - Color type 6 (RGBA), bit depth 8
//! - No interlacing
//! - Filter type 0 (None) on every scanline
//! - A single zlib compressed `IDAT` chunk
//!
//! # Usage
//!
//!```no_run
//! use favicon_core::pixels::RgbaBuffer;
//! use favicon_png::PngEncoder;
//!
//! let buffer = RgbaBuffer::new(16, 16, vec![255; 16 * 16 * 4]).unwrap();
//! let png = PngEncoder::from_buffer(&buffer).encode_to_vec().unwrap();
//!
//! std::fs::write("favicon-16.png", png.as_bytes()).unwrap();
//! ```
//!
//! # Verifying output
//!
//! [`iter_chunks`] walks an encoded stream and exposes each chunk with its stored
//! checksum, which can be compared against [`crc::calc_crc`].
//!
pub use chunks::{iter_chunks, ChunkIter, PngChunk};
pub use encoder::{EncodedPng, PngEncoder};
pub use enums::{FilterMethod, PngChunkType};
pub use favicon_core;

mod chunks;
mod constants;
pub mod crc;
mod encoder;
mod enums;
pub mod error;
mod headers;
