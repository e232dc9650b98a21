/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel sources for favicons
//!
//! A [`PixelSource`] renders a square RGBA buffer at any requested size.
//! Two sources exist
//!
//! - [`ProceduralDisc`]: a filled circle with a 10% margin on a transparent canvas
//! - [`LoadedImage`]: an image read from disk and resampled with a Lanczos filter
//!
//! Encoders only ever see the resulting [`RgbaBuffer`](favicon_core::pixels::RgbaBuffer),
//! never which source produced it.
pub use disc::{ProceduralDisc, DEFAULT_DISC_COLOR};
pub use loaded::LoadedImage;
pub use source::PixelSource;

mod disc;
pub mod error;
mod loaded;
mod source;
