/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that abort favicon generation
use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use favicon_ico::error::IcoEncodeErrors;
use favicon_png::error::PngEncodeErrors;
use favicon_raster::error::RasterErrors;

pub enum FaviconErrors {
    PngErrors(PngEncodeErrors),
    IcoErrors(IcoEncodeErrors),
    RasterErrors(RasterErrors),
    /// An I/O error and the path it happened on
    IoErrors(PathBuf, std::io::Error),
    GenericString(String)
}

impl Debug for FaviconErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FaviconErrors::PngErrors(err) => writeln!(f, "{:?}", err),
            FaviconErrors::IcoErrors(err) => writeln!(f, "{:?}", err),
            FaviconErrors::RasterErrors(err) => writeln!(f, "{:?}", err),
            FaviconErrors::IoErrors(path, err) => {
                writeln!(f, "I/O error on {:?}: {}", path, err)
            }
            FaviconErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for FaviconErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for FaviconErrors {}

impl From<PngEncodeErrors> for FaviconErrors {
    fn from(value: PngEncodeErrors) -> Self {
        FaviconErrors::PngErrors(value)
    }
}

impl From<IcoEncodeErrors> for FaviconErrors {
    fn from(value: IcoEncodeErrors) -> Self {
        FaviconErrors::IcoErrors(value)
    }
}

impl From<RasterErrors> for FaviconErrors {
    fn from(value: RasterErrors) -> Self {
        FaviconErrors::RasterErrors(value)
    }
}

impl From<String> for FaviconErrors {
    fn from(value: String) -> Self {
        FaviconErrors::GenericString(value)
    }
}

impl From<&'static str> for FaviconErrors {
    fn from(value: &'static str) -> Self {
        FaviconErrors::GenericString(value.to_string())
    }
}
