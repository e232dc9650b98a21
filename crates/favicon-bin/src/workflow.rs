/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use favicon_core::options::EncoderOptions;
use favicon_ico::{select_payloads, IcoEncoder};
use favicon_png::{iter_chunks, EncodedPng, PngEncoder};
use favicon_raster::PixelSource;
use log::Level::Trace;
use log::{info, log_enabled, trace};

use crate::assets::{ICO_FILE_NAME, ICO_SIZES, PNG_ASSETS};
use crate::config::{GeneratorConfig, IcoStrategy};
use crate::errors::FaviconErrors;
use crate::file_io::publish_file;
use crate::report::GenerationReport;

/// Options for a `size` x `size` png at the configured effort
fn png_options(config: &GeneratorConfig, size: usize) -> EncoderOptions {
    EncoderOptions::new(size, size).set_effort(config.effort)
}

/// Render pixels from `source` at the size `options` describe and encode them as a png
///
/// Sources only produce square images, `options.width()` is the side
pub fn render_png(
    source: &dyn PixelSource, options: EncoderOptions
) -> Result<EncodedPng, FaviconErrors> {
    let size = options.width();
    let pixels = source.render(size)?;

    let png = PngEncoder::new(pixels.as_bytes(), options).encode_to_vec()?;

    if log_enabled!(Trace) {
        for chunk in iter_chunks(png.as_bytes())?.flatten() {
            trace!(
                "{size}px png: {:?} chunk, {} bytes, crc {:#010X}",
                chunk.chunk_type,
                chunk.data.len(),
                chunk.crc
            );
        }
    }
    Ok(png)
}

/// Generate every favicon asset into `config.output_dir`
///
/// The source is prepared before anything is written, so a missing source
/// image leaves the output directory untouched. Each file is fully encoded
/// in memory and published by rename.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, FaviconErrors> {
    info!("Creating favicons in {:?}", config.output_dir);

    let source = config.source.create_source()?;
    info!("Using {} as the pixel source", source.name());

    fs::create_dir_all(&config.output_dir)
        .map_err(|x| FaviconErrors::IoErrors(config.output_dir.clone(), x))?;

    let mut report = GenerationReport::new(&config.output_dir, source.name());
    let mut rendered = Vec::with_capacity(PNG_ASSETS.len());

    for asset in PNG_ASSETS {
        let options = png_options(config, asset.size);
        let png = render_png(source.as_ref(), options)?;
        let path = config.output_dir.join(asset.file_name);

        publish_file(&path, png.as_bytes())?;
        info!("Wrote {:?}", path);

        report.add_file(&path, Some(options), png.len());
        rendered.push((asset.size, png));
    }

    // renders missing sizes when asked to, owned here so the
    // encoder can borrow them
    let mut extra = Vec::new();

    if config.ico_strategy == IcoStrategy::RenderEachSize {
        for size in ICO_SIZES {
            if !rendered.iter().any(|(rendered_size, _)| *rendered_size == size) {
                extra.push((size, render_png(source.as_ref(), png_options(config, size))?));
            }
        }
    }
    let payloads: Vec<(usize, &[u8])> = rendered
        .iter()
        .chain(extra.iter())
        .map(|(size, png)| (*size, png.as_bytes()))
        .collect();

    let encoder = IcoEncoder::from_images(select_payloads(&ICO_SIZES, &payloads)?);
    let ico = encoder.encode_to_vec()?;

    let ico_path = config.output_dir.join(ICO_FILE_NAME);
    publish_file(&ico_path, &ico)?;
    info!("Wrote {:?}", ico_path);

    report.add_file(&ico_path, None, ico.len());
    report.ico_entries = encoder.directory()?.iter().map(Into::into).collect();

    info!("Done");
    Ok(report)
}
