/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! What a run wrote, serializable for `--summary`
use std::path::Path;

use favicon_core::options::EncoderOptions;
use favicon_ico::IcoDirEntry;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct FileSummary {
    pub path:    String,
    /// Declared pixel size, absent for the ICO container
    pub size:    Option<usize>,
    pub bytes:   usize,
    /// What the png was encoded with
    pub options: Option<EncoderOptions>
}

#[derive(Clone, Debug, Serialize)]
pub struct IcoEntrySummary {
    pub declared_size: usize,
    pub bytes:         u32,
    pub offset:        u32
}

impl From<&IcoDirEntry> for IcoEntrySummary {
    fn from(entry: &IcoDirEntry) -> Self {
        IcoEntrySummary {
            declared_size: entry.declared_size(),
            bytes:         entry.size(),
            offset:        entry.offset()
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GenerationReport {
    pub output_dir:  String,
    pub source:      &'static str,
    pub files:       Vec<FileSummary>,
    pub ico_entries: Vec<IcoEntrySummary>
}

impl GenerationReport {
    pub(crate) fn new(output_dir: &Path, source: &'static str) -> GenerationReport {
        GenerationReport {
            output_dir: output_dir.to_string_lossy().into_owned(),
            source,
            files: Vec::new(),
            ico_entries: Vec::new()
        }
    }

    pub(crate) fn add_file(&mut self, path: &Path, options: Option<EncoderOptions>, bytes: usize) {
        self.files.push(FileSummary {
            path: path.to_string_lossy().into_owned(),
            size: options.map(|x| x.width()),
            bytes,
            options
        });
    }
}
