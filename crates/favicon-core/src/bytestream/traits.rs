/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for writing encoded favicons
//!
//! This exposes the sink trait and its implementations for
//! in memory buffers and buffered files.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::bytestream::ByteIoError;

/// The writer trait implemented for the favicon encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the output to be
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}

impl ByteWriterTrait for &mut Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }
    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

impl ByteWriterTrait for &mut BufWriter<File> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all_bytes(buf)
    }
    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }
    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}
