/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// reserved + type + count
pub const ICO_HEADER_SIZE: usize = 6;

pub const ICO_DIR_ENTRY_SIZE: usize = 16;

/// Resource type `1` is an icon, `2` a cursor
pub const ICO_TYPE_ICON: u16 = 1;

/// Largest size a directory entry can declare, stored as 0
pub const ICO_MAX_DIMENSION: usize = 256;

pub const ICO_PLANES: u16 = 1;

pub const ICO_BIT_COUNT: u16 = 32;
