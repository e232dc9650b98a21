/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::pixels::RgbaBuffer;

use crate::error::RasterErrors;

/// Anything that can produce square RGBA pixels for a favicon
pub trait PixelSource {
    /// Name used when logging
    fn name(&self) -> &'static str;
    /// Render a `size` x `size` image
    ///
    /// # Errors
    /// A zero size, or a size the underlying source cannot produce
    fn render(&self, size: usize) -> Result<RgbaBuffer, RasterErrors>;
}
