/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use core::mem::size_of;

use crate::bytestream::ByteWriterTrait;

pub enum ByteIoError {
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// The writer counts every byte that reaches the sink, which lets
/// container formats compute lengths and offsets as they go.
pub struct ByteWriter<T: ByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    /// Create a new writer for the sink
    ///
    /// # Example
    /// ```
    /// use favicon_core::bytestream::ByteWriter;
    /// let mut storage = vec![];
    /// let writer = ByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_written(), 0);
    /// ```
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Destroy this writer returning
    /// the underlying sink
    pub fn inner(self) -> T {
        self.buffer
    }
    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Write all bytes of `buf` into the sink
    ///
    /// # Example
    /// ```
    /// use favicon_core::bytestream::ByteWriter;
    /// let mut storage = vec![];
    /// let mut writer = ByteWriter::new(&mut storage);
    /// writer.write_all(b"IHDR").unwrap();
    /// assert_eq!(writer.bytes_written(), 4);
    /// ```
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    /// Write a fixed size array into the sink
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the sink
    pub fn write_u8(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Hint the sink about how many bytes are expected to follow
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(size)
    }
    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<T: ByteWriterTrait> ByteWriter<T> {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: Mode) -> Result<(), ByteIoError> {
                const SIZE: usize = size_of::<$int_type>();
                // get bits, depending on mode.
                let bytes: [u8; SIZE] = match mode {
                    Mode::BE => byte.to_be_bytes(),
                    Mode::LE => byte.to_le_bytes()
                };
                self.write_const_bytes(&bytes)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[inline]
            pub fn $name2(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, Mode::LE)
            }
        }
    };
}

write_single_type!(write_u64_inner, write_u64_be, write_u64_le, u64);
write_single_type!(write_u32_inner, write_u32_be, write_u32_le, u32);
write_single_type!(write_u16_inner, write_u16_be, write_u16_le, u16);
