/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use favicon_core::bytestream::{ByteWriter, ByteWriterTrait};
use favicon_core::options::EncoderOptions;
use favicon_core::pixels::{rgba_buffer_size, RgbaBuffer, RGBA_COMPONENTS};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;

use crate::constants::{PNG_MAX_DIMENSION, PNG_SIGNATURE};
use crate::enums::FilterMethod;
use crate::error::PngEncodeErrors;
use crate::headers::writers::{write_chunk, write_header_fn, write_iend, write_ihdr};

/// A fully encoded png file
///
/// Produced once by [`PngEncoder::encode_to_vec`] and treated
/// as an opaque blob afterwards
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPng {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl EncodedPng {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
    /// The complete png byte stream, signature included
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl core::fmt::Debug for EncodedPng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncodedPng")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

pub struct PngEncoder<'a> {
    pub(crate) options:         EncoderOptions,
    pub(crate) data:            &'a [u8],
    pub(crate) row_filter:      FilterMethod,
    pub(crate) encoded_chunks:  Vec<u8>,
    pub(crate) filter_scanline: Vec<u8>
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder that can encode an RGBA image into a png
    ///
    /// `data` must hold `width * height * 4` bytes, this is checked
    /// when [`encode`](Self::encode) is called
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder {
            options,
            data,
            row_filter: FilterMethod::None,
            encoded_chunks: Vec::new(),
            filter_scanline: Vec::new()
        }
    }
    /// Create an encoder for a pixel buffer using default
    /// compression effort
    pub fn from_buffer(buffer: &'a RgbaBuffer) -> PngEncoder<'a> {
        let options = EncoderOptions::new(buffer.width(), buffer.height());
        PngEncoder::new(buffer.as_bytes(), options)
    }
    /// Set the zlib compression level
    pub fn set_effort(&mut self, effort: u8) {
        self.options = self.options.set_effort(effort);
    }

    fn validate(&self) -> Result<(), PngEncodeErrors> {
        let (width, height) = (self.options.width(), self.options.height());

        let expected_data_size = rgba_buffer_size(width, height)?;

        if width > PNG_MAX_DIMENSION {
            return Err(PngEncodeErrors::TooLargeDimensions(
                "width",
                PNG_MAX_DIMENSION,
                width
            ));
        }
        if height > PNG_MAX_DIMENSION {
            return Err(PngEncodeErrors::TooLargeDimensions(
                "height",
                PNG_MAX_DIMENSION,
                height
            ));
        }
        if self.data.len() != expected_data_size {
            return Err(PngEncodeErrors::WrongInputSize(
                expected_data_size,
                self.data.len()
            ));
        }
        Ok(())
    }

    fn encode_headers<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), PngEncodeErrors> {
        // write signature
        writer.write_u64_be(PNG_SIGNATURE)?;
        // write ihdr
        write_header_fn(self, writer, b"IHDR", write_ihdr)
    }

    /// Encode the image into `sink`, returning the number of bytes written
    ///
    /// Nothing is written if the dimensions or buffer length are invalid, and
    /// scanlines are compressed before the first byte reaches the sink.
    pub fn encode<T: ByteWriterTrait>(&mut self, sink: T) -> Result<usize, PngEncodeErrors> {
        self.validate()?;

        // encode filters
        self.add_filters()?;

        let mut writer = ByteWriter::new(sink);
        // signature + ihdr + idat + iend
        writer.reserve(8 + 25 + 12 + self.encoded_chunks.len() + 12)?;

        self.encode_headers(&mut writer)?;

        self.write_idat_chunk(&mut writer)?;

        write_header_fn(self, &mut writer, b"IEND", write_iend)?;

        writer.flush()?;

        debug!(
            "Encoded {}x{} png, {} bytes",
            self.options.width(),
            self.options.height(),
            writer.bytes_written()
        );

        Ok(writer.bytes_written())
    }
    /// Encode the image into a new buffer
    pub fn encode_to_vec(&mut self) -> Result<EncodedPng, PngEncodeErrors> {
        let mut sink = Vec::new();
        self.encode(&mut sink)?;

        Ok(EncodedPng {
            width:  self.options.width(),
            height: self.options.height(),
            data:   sink
        })
    }

    const fn calculate_scanline_size(&self) -> usize {
        self.options.width() * RGBA_COMPONENTS
    }

    fn add_filters(&mut self) -> Result<(), PngEncodeErrors> {
        let scanline_size = self.calculate_scanline_size();
        let filtered_length = (scanline_size + 1)
            .checked_mul(self.options.height())
            .ok_or(PngEncodeErrors::Generic("Overflow"))?;

        self.filter_scanline.clear();
        self.filter_scanline.reserve_exact(filtered_length);

        let data = self.data;

        for current_scanline in data
            .chunks_exact(scanline_size)
            .take(self.options.height())
        {
            // filter type byte, then the row untouched
            self.filter_scanline.push(self.row_filter.to_int());
            self.filter_scanline.extend_from_slice(current_scanline);
        }
        debug_assert_eq!(self.filter_scanline.len(), filtered_length);

        // encode filtered scanline
        let level = Compression::new(u32::from(self.options.effort()));
        let mut compressor = ZlibEncoder::new(Vec::with_capacity(filtered_length / 2), level);

        compressor
            .write_all(&self.filter_scanline)
            .map_err(PngEncodeErrors::CompressionError)?;

        self.encoded_chunks = compressor
            .finish()
            .map_err(PngEncodeErrors::CompressionError)?;

        debug!(
            "Compressed {} scanline bytes to {} bytes at level {}",
            filtered_length,
            self.encoded_chunks.len(),
            self.options.effort()
        );
        Ok(())
    }

    fn write_idat_chunk<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), PngEncodeErrors> {
        debug_assert!(!self.encoded_chunks.is_empty());
        // the whole zlib stream goes into one chunk
        write_chunk(b"IDAT", &self.encoded_chunks, writer)
    }
}

#[test]
fn test_simple_write() {
    let width = 40;
    let height = 10;
    let data = vec![100; width * height * 4];

    let options = EncoderOptions::new(width, height);

    let mut encoder = PngEncoder::new(&data, options);
    let mut sink = vec![];

    let written = encoder.encode(&mut sink).unwrap();
    assert_eq!(written, sink.len());
    assert_eq!(&sink[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(&sink[sink.len() - 12..], b"\0\0\0\0IEND\xAE\x42\x60\x82");
}

#[test]
fn test_ihdr_layout() {
    let data = vec![0; 300 * 2 * 4];
    let png = PngEncoder::new(&data, EncoderOptions::new(300, 2))
        .encode_to_vec()
        .unwrap();
    let bytes = png.as_bytes();

    // length, tag
    assert_eq!(&bytes[8..16], b"\0\0\0\x0DIHDR");
    // width and height, big endian
    assert_eq!(&bytes[16..24], &[0, 0, 1, 44, 0, 0, 0, 2]);
    // depth, color type, compression, filter, interlace
    assert_eq!(&bytes[24..29], &[8, 6, 0, 0, 0]);
}
