/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use favicon_core::bytestream::ByteWriter;
use log::debug;

use crate::errors::FaviconErrors;

/// Sibling path a file is staged at before it replaces `path`,
/// `favicon.ico` is staged as `favicon.new.ico`
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{stem}.new.{}", ext.to_string_lossy()),
        None => format!("{stem}.new")
    };
    path.with_file_name(name)
}

/// Write `data` to `path` without ever leaving a partial file there
///
/// Bytes go to the staging path first and are renamed over `path` once
/// fully flushed.
pub(crate) fn publish_file(path: &Path, data: &[u8]) -> Result<(), FaviconErrors> {
    let staged = staging_path(path);

    let result = write_staged(&staged, data).and_then(|_| {
        fs::rename(&staged, path).map_err(|x| FaviconErrors::IoErrors(path.to_path_buf(), x))
    });

    if result.is_err() {
        // best effort, the staged file is useless now
        let _ = fs::remove_file(&staged);
    }
    result?;

    debug!("Moved {:?} to {:?}", staged, path);
    Ok(())
}

fn write_staged(staged: &Path, data: &[u8]) -> Result<(), FaviconErrors> {
    let io_error = |x: std::io::Error| FaviconErrors::IoErrors(staged.to_path_buf(), x);

    let file = File::create(staged).map_err(io_error)?;
    let mut buf_writer = BufWriter::new(file);
    let mut writer = ByteWriter::new(&mut buf_writer);

    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|x| {
            FaviconErrors::GenericString(format!("Could not write {:?}: {:?}", staged, x))
        })?;

    buf_writer
        .get_ref()
        .sync_all()
        .map_err(io_error)
}
