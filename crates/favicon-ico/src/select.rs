/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, warn};

use crate::encoder::IcoImage;
use crate::error::IcoEncodeErrors;

/// Choose a payload for every requested icon size
///
/// `rendered` holds `(size, encoded bytes)` pairs that already exist. A requested
/// size with an exact match uses that image, any other size gets the largest
/// rendered image. ICO readers scale oversized payloads down, so the
/// substitution is logged but is not an error.
///
/// The returned images keep the order of `requested`.
///
/// # Errors
/// If `rendered` is empty
pub fn select_payloads<'a>(
    requested: &[usize], rendered: &[(usize, &'a [u8])]
) -> Result<Vec<IcoImage<'a>>, IcoEncodeErrors> {
    // first of the largest wins on ties
    let largest = rendered
        .iter()
        .copied()
        .reduce(|best, current| if current.0 > best.0 { current } else { best })
        .ok_or(IcoEncodeErrors::NoRenderedImages)?;

    let images = requested
        .iter()
        .map(|&declared_size| {
            let data = match rendered.iter().find(|(size, _)| *size == declared_size) {
                Some(&(_, data)) => {
                    debug!("Using rendered {declared_size}px image for ICO entry");
                    data
                }
                None => {
                    warn!(
                        "No rendered {declared_size}px image, using the {}px image for that ICO entry",
                        largest.0
                    );
                    largest.1
                }
            };
            IcoImage {
                declared_size,
                data
            }
        })
        .collect();

    Ok(images)
}
