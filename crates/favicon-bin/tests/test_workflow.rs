/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use favicon_bin::assets::{ICO_FILE_NAME, ICO_SIZES, PNG_ASSETS};
use favicon_bin::config::{GeneratorConfig, IcoStrategy, SourceKind};
use favicon_bin::workflow::generate;
use favicon_png::PngEncoder;
use favicon_raster::{PixelSource, ProceduralDisc};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("favicon-bin-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Returns (width, height, rgba pixels)
fn decode_ref(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgba);
    (info.width, info.height, buf)
}

fn read_ico(dir: &Path) -> ico::IconDir {
    let data = fs::read(dir.join(ICO_FILE_NAME)).unwrap();
    ico::IconDir::read(Cursor::new(data)).unwrap()
}

#[test]
fn test_procedural_run() {
    let dir = temp_dir("procedural");
    let report = generate(&GeneratorConfig::new(&dir)).unwrap();

    let mut names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|x| x.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = PNG_ASSETS
        .iter()
        .map(|x| x.file_name.to_string())
        .chain(std::iter::once(ICO_FILE_NAME.to_string()))
        .collect();
    expected.sort();

    // no staged leftovers
    assert_eq!(names, expected);
    assert_eq!(report.files.len(), 6);
    assert_eq!(report.source, "procedural disc");

    for asset in PNG_ASSETS {
        let data = fs::read(dir.join(asset.file_name)).unwrap();
        let (width, height, _) = decode_ref(&data);

        assert_eq!((width as usize, height as usize), (asset.size, asset.size));
    }

    let (_, _, pixels) = decode_ref(&fs::read(dir.join("favicon-16.png")).unwrap());
    let center = (8 * 16 + 8) * 4;
    assert_eq!(&pixels[center..center + 4], &[40, 120, 200, 255]);
    assert_eq!(&pixels[0..4], &[0, 0, 0, 0]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_ico_falls_back_to_largest() {
    let dir = temp_dir("fallback");
    let report = generate(&GeneratorConfig::new(&dir)).unwrap();

    let raw = fs::read(dir.join(ICO_FILE_NAME)).unwrap();
    let widths: Vec<u8> = (0..4).map(|i| raw[6 + 16 * i]).collect();
    assert_eq!(widths, [16, 32, 48, 64]);

    let icon = read_ico(&dir);

    let png_16 = fs::read(dir.join("favicon-16.png")).unwrap();
    let png_32 = fs::read(dir.join("favicon-32.png")).unwrap();
    let png_512 = fs::read(dir.join("favicon-512.png")).unwrap();

    let entries = icon.entries();
    assert!(entries.iter().all(|x| x.is_png()));
    assert_eq!(entries[0].data(), png_16.as_slice());
    assert_eq!(entries[1].data(), png_32.as_slice());
    // 48 and 64 were never rendered
    assert_eq!(entries[2].data(), png_512.as_slice());
    assert_eq!(entries[3].data(), png_512.as_slice());

    let declared: Vec<usize> = report.ico_entries.iter().map(|x| x.declared_size).collect();
    assert_eq!(declared, ICO_SIZES);
    assert_eq!(report.ico_entries[0].offset, 6 + 16 * 4);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_loaded_source_render_each_size() {
    let dir = temp_dir("loaded");
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("logo.png");
    let logo = ProceduralDisc::new([10, 200, 30, 255]).render(100).unwrap();
    let png = PngEncoder::from_buffer(&logo).encode_to_vec().unwrap();
    fs::write(&input, png.as_bytes()).unwrap();

    let output = dir.join("public");
    let config = GeneratorConfig::new(&output)
        .set_source(SourceKind::Loaded { path: input })
        .set_ico_strategy(IcoStrategy::RenderEachSize)
        .set_effort(1);

    let report = generate(&config).unwrap();
    assert_eq!(report.source, "loaded image");

    let icon = read_ico(&output);
    assert_eq!(icon.entries().len(), ICO_SIZES.len());

    for (entry, size) in icon.entries().iter().zip(ICO_SIZES) {
        assert_eq!(entry.width() as usize, size);

        let image = entry.decode().unwrap();
        assert_eq!(image.width() as usize, size);
        assert_eq!(image.height() as usize, size);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = temp_dir("missing");
    let config = GeneratorConfig::new(dir.join("public")).set_source(SourceKind::Loaded {
        path: dir.join("does-not-exist.png")
    });

    assert!(generate(&config).is_err());
    assert!(!dir.join("public").exists());
}

#[test]
fn test_rerun_replaces_files() {
    let dir = temp_dir("rerun");

    generate(&GeneratorConfig::new(&dir)).unwrap();
    let first = fs::read(dir.join(ICO_FILE_NAME)).unwrap();

    let config = GeneratorConfig::new(&dir).set_source(SourceKind::Procedural {
        color: [255, 0, 0, 255]
    });
    generate(&config).unwrap();
    let second = fs::read(dir.join(ICO_FILE_NAME)).unwrap();

    assert_ne!(first, second);
    assert!(!dir.join("favicon.new.ico").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_summary_lists_encoder_options() {
    let dir = temp_dir("summary");
    let report = generate(&GeneratorConfig::new(&dir).set_effort(3)).unwrap();

    let summary = serde_json::to_value(&report).unwrap();
    let files = summary["files"].as_array().unwrap();
    assert_eq!(files.len(), 6);

    // pngs first, in asset order
    assert_eq!(files[0]["size"], 16);
    assert_eq!(files[0]["options"]["width"], 16);
    assert_eq!(files[0]["options"]["effort"], 3);
    assert_eq!(files[4]["options"]["height"], 512);

    // the ico has no size of its own
    assert!(files[5]["size"].is_null());
    assert!(files[5]["options"].is_null());
    assert_eq!(summary["ico_entries"].as_array().unwrap().len(), 4);

    fs::remove_dir_all(&dir).unwrap();
}
