/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! An ICO container writer
//!
//! Packs already encoded images (png in practice) into a single `.ico` file.
//!
//! # Layout
//! - A 6 byte header, reserved `0`, type `1` (icon) and the image count
//! - One 16 byte directory entry per image
//! - The image payloads, in the same order as their entries
//!
//! All integers are little endian. A declared size of 256 is stored as `0`.
//!
//! # Usage
//!
//!```no_run
//! use favicon_ico::IcoEncoder;
//!
//! let png_16: Vec<u8> = std::fs::read("favicon-16.png").unwrap();
//! let png_32: Vec<u8> = std::fs::read("favicon-32.png").unwrap();
//!
//! let mut encoder = IcoEncoder::new();
//! encoder.add_image(16, &png_16);
//! encoder.add_image(32, &png_32);
//!
//! let ico = encoder.encode_to_vec().unwrap();
//! std::fs::write("favicon.ico", ico).unwrap();
//! ```
//!
//! # Missing sizes
//!
//! [`select_payloads`] maps requested sizes onto the images that were rendered,
//! substituting the largest rendered image when a size has no exact match.
pub use encoder::{IcoEncoder, IcoImage};
pub use entry::IcoDirEntry;
pub use select::select_payloads;

mod constants;
mod encoder;
mod entry;
pub mod error;
mod select;
