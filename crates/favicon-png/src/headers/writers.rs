/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use favicon_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};
use log::trace;

use crate::constants::{PNG_BIT_DEPTH, PNG_COLOR_TYPE_RGBA, PNG_MAX_CHUNK_LENGTH};
use crate::crc::calc_crc_with_bytes;
use crate::encoder::PngEncoder;
use crate::error::PngEncodeErrors;

pub(crate) fn write_ihdr(
    ctx: &PngEncoder, output: &mut ByteWriter<&mut Vec<u8>>
) -> Result<(), ByteIoError> {
    // write width and height, both were checked against
    // PNG_MAX_DIMENSION before we got here
    output.write_u32_be(u32::try_from(ctx.options.width())?)?;
    output.write_u32_be(u32::try_from(ctx.options.height())?)?;
    // write depth
    output.write_u8(PNG_BIT_DEPTH)?;
    // color type, rgba
    output.write_u8(PNG_COLOR_TYPE_RGBA)?;
    //compression method
    output.write_u8(0)?;
    // filter method
    output.write_u8(0)?;
    // interlace method, always Standard
    output.write_u8(0)?;
    Ok(())
}

// iend is a no-op
pub(crate) fn write_iend(_: &PngEncoder, _: &mut ByteWriter<&mut Vec<u8>>) -> Result<(), ByteIoError> {
    Ok(())
}

/// Write header writes the boilerplate for each png chunk
///
/// It calls a function to write the chunk data into a temporary buffer, then
/// hands it to [`write_chunk`] which adds the length, chunk type and CRC
///
/// This should be called with the appropriate inner function to write data
pub(crate) fn write_header_fn<T, F>(
    v: &PngEncoder, writer: &mut ByteWriter<T>, name: &[u8; 4], func: F
) -> Result<(), PngEncodeErrors>
where
    T: ByteWriterTrait,
    F: Fn(&PngEncoder, &mut ByteWriter<&mut Vec<u8>>) -> Result<(), ByteIoError>
{
    let mut temp_space = Vec::with_capacity(16);
    let mut local_writer = ByteWriter::new(&mut temp_space);
    // call underlying function
    (func)(v, &mut local_writer)?;

    write_chunk(name, &temp_space, writer)
}

/// Write a single chunk
///
/// format: length - chunk type - [data] - crc
pub(crate) fn write_chunk<T: ByteWriterTrait>(
    name: &[u8; 4], data: &[u8], writer: &mut ByteWriter<T>
) -> Result<(), PngEncodeErrors> {
    if data.len() > PNG_MAX_CHUNK_LENGTH {
        return Err(PngEncodeErrors::TooLargeChunk(*name, data.len()));
    }
    // write length
    writer.write_u32_be(data.len() as u32)?;
    // write chunk name
    writer.write_const_bytes(name)?;
    // write chunk data
    writer.write_all(data)?;
    // crc is a continuous function, so first crc the chunk name
    // and then crc that with the chunk bytes passing in the previous crc

    // equal to crc((chunk.chunk + data) ,u32::MAX))
    let crc = calc_crc_with_bytes(name, u32::MAX);
    let crc = !calc_crc_with_bytes(data, crc);
    writer.write_u32_be(crc)?;

    trace!(
        "Wrote {} chunk, length {} crc {:#010X}",
        String::from_utf8_lossy(name),
        data.len(),
        crc
    );
    Ok(())
}
