/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream writer
//! with endian aware writes
//!
//! Encoders write into anything implementing [`ByteWriterTrait`],
//! wrapped in a [`ByteWriter`] which keeps track of how much
//! has been written.
pub use traits::ByteWriterTrait;
pub use writer::{ByteIoError, ByteWriter};

mod traits;
mod writer;
