//! WAVE header writer.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{FormatError, FormatResult};
use crate::header::{FormatLayout, Header, CANONICAL_HEADER_SIZE};

/// Size of the extension block (`cbSize` plus the 22 bytes it announces).
const EXTENSION_SIZE: usize = 24;

/// Writes `header` to `writer` in the layout the parser reads it back from.
///
/// Only the header is written; sample data is the caller's business. Chunks
/// skipped during parsing are not reproduced, so `data` follows the `fmt `
/// chunk directly.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedHeader`] without writing anything if the
/// header's `(subchunk1_size, audio_format)` pair is not canonical PCM or
/// WAVEFORMATEXTENSIBLE, and [`FormatError::Io`] if the sink fails.
pub fn write_header<W: Write>(writer: &mut W, header: &Header) -> FormatResult<()> {
    let bytes = header_to_vec(header)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Serializes `header` to a byte vector.
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedHeader`] if the header's format
/// combination is not one the parser accepts.
pub fn header_to_vec(header: &Header) -> FormatResult<Vec<u8>> {
    let layout = header
        .layout()
        .ok_or_else(|| FormatError::UnsupportedHeader {
            subchunk1_size: header.subchunk1_size(),
            audio_format: header.audio_format(),
            extra_param_size: header
                .is_extensible()
                .then(|| header.extra_param_size()),
        })?;

    let mut buffer = Vec::with_capacity(CANONICAL_HEADER_SIZE as usize + EXTENSION_SIZE);

    // RIFF header
    buffer.write_all(header.chunk_id().as_bytes())?;
    buffer.write_u32::<LittleEndian>(header.chunk_size())?;
    buffer.write_all(header.form_type().as_bytes())?;

    // fmt chunk
    buffer.write_all(header.subchunk1_id().as_bytes())?;
    buffer.write_u32::<LittleEndian>(header.subchunk1_size())?;
    buffer.write_u16::<LittleEndian>(header.audio_format())?;
    buffer.write_u16::<LittleEndian>(header.num_channels())?;
    buffer.write_u32::<LittleEndian>(header.sample_rate())?;
    buffer.write_u32::<LittleEndian>(header.byte_rate())?;
    buffer.write_u16::<LittleEndian>(header.block_align())?;
    buffer.write_u16::<LittleEndian>(header.bits_per_sample())?;

    if layout == FormatLayout::Extensible {
        buffer.write_u16::<LittleEndian>(header.extra_param_size())?;
        buffer.write_u16::<LittleEndian>(header.valid_bits_per_sample())?;
        buffer.write_u32::<LittleEndian>(header.channel_mask())?;
        buffer.write_all(header.sub_format_guid())?;
    }

    // data chunk header
    buffer.write_all(header.subchunk2_id().as_bytes())?;
    buffer.write_u32::<LittleEndian>(header.data_size())?;

    Ok(buffer)
}
