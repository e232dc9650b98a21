/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder options
//!
//! Options shared by the encoders, kept in one struct so that the
//! same value can be reused when encoding every favicon size.

/// Highest zlib compression level
pub const MAX_EFFORT: u8 = 9;

/// Options for the favicon encoders
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncoderOptions {
    width:  usize,
    height: usize,
    effort: u8
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:  0,
            height: 0,
            effort: MAX_EFFORT
        }
    }
}

impl EncoderOptions {
    /// Create new options for an image of the given dimensions
    pub fn new(width: usize, height: usize) -> EncoderOptions {
        EncoderOptions::default()
            .set_width(width)
            .set_height(height)
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the compression effort
    ///
    /// Higher effort means more time is spent in making the file
    /// smaller, `0` stores the data without compression
    pub const fn effort(&self) -> u8 {
        self.effort
    }
    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    /// Set compression effort, values above [`MAX_EFFORT`] are clamped
    pub fn set_effort(mut self, effort: u8) -> Self {
        self.effort = effort.min(MAX_EFFORT);
        self
    }
}

#[test]
fn effort_is_clamped() {
    let options = EncoderOptions::new(16, 16).set_effort(200);
    assert_eq!(options.effort(), MAX_EFFORT);
    assert_eq!(options.width(), 16);
}
