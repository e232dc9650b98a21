/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Generation settings
//!
//! Everything a run needs is carried by [`GeneratorConfig`], there is no
//! global output directory.
use std::path::PathBuf;

use favicon_core::options::MAX_EFFORT;
use favicon_raster::{LoadedImage, PixelSource, ProceduralDisc};

use crate::errors::FaviconErrors;

/// Where pixels come from
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SourceKind {
    /// Synthesize a disc filled with `color`
    Procedural { color: [u8; 4] },
    /// Resample the image at `path`
    Loaded { path: PathBuf }
}

impl SourceKind {
    /// Instantiate the pixel source
    ///
    /// For [`SourceKind::Loaded`] this reads and decodes the image, so a
    /// missing file is reported before any output is written
    pub fn create_source(&self) -> Result<Box<dyn PixelSource>, FaviconErrors> {
        match self {
            SourceKind::Procedural { color } => Ok(Box::new(ProceduralDisc::new(*color))),
            SourceKind::Loaded { path } => Ok(Box::new(LoadedImage::open(path)?))
        }
    }
}

/// How `favicon.ico` payloads are chosen
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum IcoStrategy {
    /// Reuse the png assets, falling back to the largest one
    /// for sizes that weren't rendered
    #[default]
    Fallback,
    /// Render every declared size
    RenderEachSize
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub output_dir:   PathBuf,
    pub source:       SourceKind,
    pub ico_strategy: IcoStrategy,
    /// zlib level used for every png
    pub effort:       u8,
    /// Print a JSON summary once done
    pub summary:      bool
}

impl GeneratorConfig {
    /// Procedural disc with the default color, written to `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> GeneratorConfig {
        GeneratorConfig {
            output_dir:   output_dir.into(),
            source:       SourceKind::Procedural {
                color: favicon_raster::DEFAULT_DISC_COLOR
            },
            ico_strategy: IcoStrategy::default(),
            effort:       MAX_EFFORT,
            summary:      false
        }
    }

    pub fn set_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    pub fn set_ico_strategy(mut self, strategy: IcoStrategy) -> Self {
        self.ico_strategy = strategy;
        self
    }

    pub fn set_effort(mut self, effort: u8) -> Self {
        self.effort = effort.min(MAX_EFFORT);
        self
    }

    pub fn set_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }
}
