/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::options::EncoderOptions;
use favicon_core::pixels::RgbaBuffer;
use favicon_png::PngEncoder;
use nanorand::Rng;

/// Decode with the `png` crate, returning (width, height, pixels)
fn decode_ref(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    assert_eq!(reader.info().bit_depth, png::BitDepth::Eight);
    assert!(!reader.info().interlaced);

    // Allocate the output buffer.
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    (info.width, info.height, buf)
}

fn test_roundtrip(width: usize, height: usize, data: Vec<u8>) {
    let buffer = RgbaBuffer::new(width, height, data).unwrap();
    let png = PngEncoder::from_buffer(&buffer).encode_to_vec().unwrap();

    assert_eq!(png.width(), width);
    assert_eq!(png.height(), height);

    let (ref_width, ref_height, ref_pixels) = decode_ref(png.as_bytes());

    assert_eq!(ref_width as usize, width);
    assert_eq!(ref_height as usize, height);
    assert_eq!(ref_pixels, buffer.as_bytes());
}

#[test]
fn test_random_square() {
    let mut pixels = vec![0_u8; 32 * 32 * 4];
    nanorand::WyRand::new().fill(&mut pixels);

    test_roundtrip(32, 32, pixels);
}

#[test]
fn test_random_non_square() {
    let mut pixels = vec![0_u8; 37 * 5 * 4];
    nanorand::WyRand::new().fill(&mut pixels);

    test_roundtrip(37, 5, pixels);
}

#[test]
fn test_single_pixel() {
    test_roundtrip(1, 1, vec![40, 120, 200, 255]);
}

#[test]
fn test_transparent_and_opaque() {
    // alternate fully transparent and opaque rows
    let mut pixels = Vec::with_capacity(8 * 8 * 4);
    for y in 0..8 {
        for _ in 0..8 {
            if y % 2 == 0 {
                pixels.extend_from_slice(&[40, 120, 200, 255]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    test_roundtrip(8, 8, pixels);
}

#[test]
fn test_every_effort_decodes() {
    let mut pixels = vec![0_u8; 16 * 16 * 4];
    nanorand::WyRand::new().fill(&mut pixels);

    for effort in 0..=9 {
        let options = EncoderOptions::new(16, 16).set_effort(effort);
        let mut sink = vec![];
        PngEncoder::new(&pixels, options).encode(&mut sink).unwrap();

        let (_, _, decoded) = decode_ref(&sink);
        assert_eq!(decoded, pixels, "effort {effort}");
    }
}
