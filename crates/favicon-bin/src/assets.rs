/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The favicon files every run produces

/// A standalone png asset
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PngAsset {
    pub file_name: &'static str,
    pub size:      usize
}

pub const PNG_ASSETS: [PngAsset; 5] = [
    PngAsset {
        file_name: "favicon-16.png",
        size:      16
    },
    PngAsset {
        file_name: "favicon-32.png",
        size:      32
    },
    PngAsset {
        file_name: "apple-touch-icon.png",
        size:      180
    },
    PngAsset {
        file_name: "favicon-192.png",
        size:      192
    },
    PngAsset {
        file_name: "favicon-512.png",
        size:      512
    }
];

pub const ICO_FILE_NAME: &str = "favicon.ico";

/// Sizes declared in `favicon.ico`, in directory order
pub const ICO_SIZES: [usize; 4] = [16, 32, 48, 64];
