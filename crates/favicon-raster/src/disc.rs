/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::pixels::{PixelErrors, RgbaBuffer};
use log::trace;

use crate::error::RasterErrors;
use crate::source::PixelSource;

/// Fill color used when none is configured
pub const DEFAULT_DISC_COLOR: [u8; 4] = [40, 120, 200, 255];

/// Radius of the disc relative to half the canvas
const DISC_RADIUS_RATIO: f64 = 0.9;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// A filled circle inscribed in the canvas with a 10% margin
///
/// Pixels are either fully `color` or fully transparent, there is
/// no anti-aliasing along the edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ProceduralDisc {
    color: [u8; 4]
}

impl Default for ProceduralDisc {
    fn default() -> Self {
        ProceduralDisc::new(DEFAULT_DISC_COLOR)
    }
}

impl ProceduralDisc {
    pub const fn new(color: [u8; 4]) -> ProceduralDisc {
        ProceduralDisc { color }
    }

    pub const fn color(&self) -> [u8; 4] {
        self.color
    }
    /// Whether pixel (`x`,`y`) of a `size` canvas lies in the disc
    pub fn contains(size: usize, x: usize, y: usize) -> bool {
        let half = size as f64 / 2.0;
        let radius = half * DISC_RADIUS_RATIO;

        let cx = half - x as f64;
        let cy = half - y as f64;

        (cx * cx + cy * cy).sqrt() <= radius
    }
}

impl PixelSource for ProceduralDisc {
    fn name(&self) -> &'static str {
        "procedural disc"
    }

    fn render(&self, size: usize) -> Result<RgbaBuffer, RasterErrors> {
        if size == 0 {
            return Err(PixelErrors::ZeroDimension("size").into());
        }
        let pixels: Vec<[u8; 4]> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| {
                if ProceduralDisc::contains(size, x, y) {
                    self.color
                } else {
                    TRANSPARENT
                }
            })
            .collect();

        trace!("Rendered {size}x{size} disc with color {:?}", self.color);

        Ok(RgbaBuffer::from_pixels(size, size, &pixels)?)
    }
}
