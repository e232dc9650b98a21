/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the favicon crates
//!
//! This crate provides the small set of primitives the
//! encoders and pixel sources agree on
//!
//! It currently contains
//!
//! - A bytestream writer with endian aware writes
//! - An RGBA pixel buffer with validated dimensions
//! - Encoder options shared by the PNG encoder
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
pub mod bytestream;
pub mod options;
pub mod pixels;
