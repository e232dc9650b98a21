/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use favicon_core::options::EncoderOptions;
use favicon_ico::{select_payloads, IcoEncoder};
use favicon_png::PngEncoder;
use nanorand::Rng;

fn encode_png(size: usize) -> Vec<u8> {
    let mut pixels = vec![0_u8; size * size * 4];
    nanorand::WyRand::new().fill(&mut pixels);

    PngEncoder::new(&pixels, EncoderOptions::new(size, size))
        .encode_to_vec()
        .unwrap()
        .into_bytes()
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

#[test]
fn test_single_16px_png() {
    let png = encode_png(16);
    let length = png.len();

    let mut encoder = IcoEncoder::new();
    encoder.add_image(16, &png);
    let ico = encoder.encode_to_vec().unwrap();

    assert_eq!(ico.len(), 6 + 16 + length);
    // width, height
    assert_eq!(&ico[6..8], &[16, 16]);
    // size and offset fields
    assert_eq!(read_u32(&ico, 14) as usize, length);
    assert_eq!(read_u32(&ico, 18), 22);
    assert_eq!(&ico[22..], &png[..]);
}

#[test]
fn test_sizes_and_offsets_add_up() {
    let pngs: Vec<(usize, Vec<u8>)> = [16, 32, 48, 64, 256]
        .iter()
        .map(|&size| (size, encode_png(size)))
        .collect();

    let mut encoder = IcoEncoder::new();
    for (size, png) in &pngs {
        encoder.add_image(*size, png);
    }
    let ico = encoder.encode_to_vec().unwrap();
    let count = usize::from(read_u16(&ico, 4));

    assert_eq!(read_u16(&ico, 0), 0);
    assert_eq!(read_u16(&ico, 2), 1);
    assert_eq!(count, pngs.len());

    let mut expected_offset = 6 + 16 * count;
    let mut total = 0;

    for (index, (_, png)) in pngs.iter().enumerate() {
        let entry = 6 + 16 * index;
        let size = read_u32(&ico, entry + 8) as usize;
        let offset = read_u32(&ico, entry + 12) as usize;

        // planes and bit count
        assert_eq!(read_u16(&ico, entry + 4), 1);
        assert_eq!(read_u16(&ico, entry + 6), 32);

        assert_eq!(size, png.len());
        assert_eq!(offset, expected_offset);
        assert_eq!(&ico[offset..offset + size], &png[..]);

        expected_offset += size;
        total += size;
    }
    assert_eq!(total, ico.len() - 6 - 16 * count);

    // 256 is stored as zero
    let last = 6 + 16 * 4;
    assert_eq!(&ico[last..last + 2], &[0, 0]);
}

#[test]
fn test_independent_reader() {
    let png_16 = encode_png(16);
    let png_32 = encode_png(32);
    let png_256 = encode_png(256);

    let mut encoder = IcoEncoder::new();
    encoder.add_image(16, &png_16);
    encoder.add_image(32, &png_32);
    encoder.add_image(256, &png_256);
    let ico = encoder.encode_to_vec().unwrap();

    let icon_dir = ico::IconDir::read(Cursor::new(&ico)).unwrap();
    let entries = icon_dir.entries();

    assert_eq!(icon_dir.resource_type(), ico::ResourceType::Icon);
    assert_eq!(entries.len(), 3);

    for (entry, (size, png)) in entries
        .iter()
        .zip([(16, &png_16), (32, &png_32), (256, &png_256)])
    {
        assert!(entry.is_png());
        assert_eq!(entry.width(), size);
        assert_eq!(entry.height(), size);
        assert_eq!(entry.data(), &png[..]);

        let image = entry.decode().unwrap();
        assert_eq!(image.width(), size);
    }
}

#[test]
fn test_fallback_payloads() {
    let png_16 = encode_png(16);
    let png_32 = encode_png(32);
    let png_512 = encode_png(512);
    let rendered = [
        (16, png_16.as_slice()),
        (32, png_32.as_slice()),
        (512, png_512.as_slice())
    ];

    let images = select_payloads(&[16, 32, 48, 64], &rendered).unwrap();
    let ico = IcoEncoder::from_images(images).encode_to_vec().unwrap();

    let icon_dir = ico::IconDir::read(Cursor::new(&ico)).unwrap();
    // widths straight from the directory, the payloads are larger than declared
    let declared: Vec<u8> = (0..4).map(|i| ico[6 + 16 * i]).collect();

    assert_eq!(declared, [16, 32, 48, 64]);
    assert_eq!(icon_dir.entries()[2].data(), png_512.as_slice());
    assert_eq!(icon_dir.entries()[3].data(), png_512.as_slice());
    assert_eq!(ico.len(), 6 + 16 * 4 + png_16.len() + png_32.len() + 2 * png_512.len());
}
