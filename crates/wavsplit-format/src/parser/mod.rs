//! WAVE header parser.
//!
//! The parser walks the stream front to back:
//!
//! 1. RIFF id, size and form type (stored, not enforced).
//! 2. `fmt ` id, size and the core format fields.
//! 3. Dispatch on `(subchunk1_size, audio_format)`:
//!    canonical PCM reads the `data` header immediately;
//!    WAVEFORMATEXTENSIBLE reads the 22 extension bytes, checks the
//!    sub-format, then scans chunk by chunk for `data`.
//! 4. Derived values are computed once every field is known.
//!
//! Nothing is returned until the header is complete.

mod reader;

#[cfg(test)]
mod tests;

use std::io::Read;

use tracing::{debug, trace};

use crate::error::{FormatError, FormatResult};
use crate::fourcc::FourCc;
use crate::header::{FormatLayout, Header, HeaderBuilder, EXTENSIBLE_EXTRA_SIZE};
use crate::subformat::SubFormat;

use reader::HeaderReader;

/// Byte offset of the channel count field.
const NUM_CHANNELS_OFFSET: u64 = 22;
/// Byte offset of the sample rate field.
const SAMPLE_RATE_OFFSET: u64 = 24;
/// Byte offset of the bits per sample field.
const BITS_PER_SAMPLE_OFFSET: u64 = 34;

/// Parses a WAVE header from a stream.
///
/// On success the stream is positioned at the first byte of sample data and
/// [`Header::header_size`] equals the number of bytes consumed.
///
/// # Errors
///
/// - [`FormatError::MalformedHeader`] if the stream ends early, a skipped
///   chunk runs past the end, or the sample rate or frame size is zero.
/// - [`FormatError::UnsupportedHeader`] if the `fmt ` chunk is neither
///   canonical PCM nor WAVEFORMATEXTENSIBLE with a 22-byte extension.
/// - [`FormatError::UnsupportedSubFormat`] if the extensible sub-format is
///   neither PCM nor IEEE float.
///
/// # Example
///
/// ```rust,no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let mut reader = BufReader::new(File::open("input.wav")?);
/// let header = wavsplit_format::parse_header(&mut reader)?;
/// println!("{} channels, {:.2} s", header.num_channels(), header.duration());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_header<R: Read>(reader: &mut R) -> FormatResult<Header> {
    let mut input = HeaderReader::new(reader);
    let mut builder = HeaderBuilder::default();

    read_riff(&mut input, &mut builder)?;
    read_fmt(&mut input, &mut builder)?;

    let layout = FormatLayout::classify(builder.subchunk1_size, builder.audio_format)
        .ok_or_else(|| FormatError::UnsupportedHeader {
            subchunk1_size: builder.subchunk1_size,
            audio_format: builder.audio_format,
            extra_param_size: None,
        })?;
    debug!(?layout, fmt_size = builder.subchunk1_size, "dispatching fmt chunk");

    match layout {
        FormatLayout::Pcm => {
            builder.is_extensible = false;
            builder.subchunk2_id = input.read_tag("data chunk id")?;
            builder.data_size = input.read_u32("data chunk size")?;
        }
        FormatLayout::Extensible => {
            builder.extra_param_size = input.read_u16("extra param size")?;
            if builder.extra_param_size != EXTENSIBLE_EXTRA_SIZE {
                return Err(FormatError::UnsupportedHeader {
                    subchunk1_size: builder.subchunk1_size,
                    audio_format: builder.audio_format,
                    extra_param_size: Some(builder.extra_param_size),
                });
            }
            read_extensible(&mut input, &mut builder)?;
            scan_for_data(&mut input, &mut builder)?;
        }
    }

    let header = finalize(&input, builder)?;
    trace!(?header, "parsed WAV header");
    Ok(header)
}

/// Parses a WAVE header from the start of an in-memory buffer.
pub fn parse_header_bytes(bytes: &[u8]) -> FormatResult<Header> {
    let mut cursor = bytes;
    parse_header(&mut cursor)
}

fn read_riff<R: Read>(input: &mut HeaderReader<'_, R>, h: &mut HeaderBuilder) -> FormatResult<()> {
    h.chunk_id = input.read_tag("RIFF chunk id")?;
    h.chunk_size = input.read_u32("RIFF chunk size")?;
    h.form_type = input.read_tag("RIFF form type")?;
    Ok(())
}

fn read_fmt<R: Read>(input: &mut HeaderReader<'_, R>, h: &mut HeaderBuilder) -> FormatResult<()> {
    h.subchunk1_id = input.read_tag("fmt chunk id")?;
    h.subchunk1_size = input.read_u32("fmt chunk size")?;
    h.audio_format = input.read_u16("audio format")?;
    h.num_channels = input.read_u16("channel count")?;
    h.sample_rate = input.read_u32("sample rate")?;
    h.byte_rate = input.read_u32("byte rate")?;
    h.block_align = input.read_u16("block align")?;
    h.bits_per_sample = input.read_u16("bits per sample")?;
    Ok(())
}

fn read_extensible<R: Read>(
    input: &mut HeaderReader<'_, R>,
    h: &mut HeaderBuilder,
) -> FormatResult<()> {
    h.valid_bits_per_sample = input.read_u16("valid bits per sample")?;
    h.channel_mask = input.read_u32("channel mask")?;
    h.sub_format = input.read_guid("sub-format")?;

    if SubFormat::classify(&h.sub_format) == SubFormat::Unknown {
        return Err(FormatError::UnsupportedSubFormat {
            sub_format: h.sub_format,
        });
    }

    h.is_extensible = true;
    Ok(())
}

/// Walks chunk headers until `data`, discarding everything in between.
fn scan_for_data<R: Read>(
    input: &mut HeaderReader<'_, R>,
    h: &mut HeaderBuilder,
) -> FormatResult<()> {
    loop {
        let tag = input.read_tag("chunk id while scanning for data chunk")?;

        if tag == FourCc::DATA {
            h.subchunk2_id = tag;
            h.data_size = input.read_u32("data chunk size")?;
            return Ok(());
        }

        let size = input.read_u32("chunk size while scanning for data chunk")?;
        debug!(chunk = %tag, size, offset = input.consumed(), "skipping chunk");
        input.skip(tag, size)?;
    }
}

fn finalize<R: Read>(input: &HeaderReader<'_, R>, mut h: HeaderBuilder) -> FormatResult<Header> {
    if h.sample_rate == 0 {
        return Err(FormatError::malformed(SAMPLE_RATE_OFFSET, "sample rate is zero"));
    }
    if h.num_channels == 0 {
        return Err(FormatError::malformed(NUM_CHANNELS_OFFSET, "channel count is zero"));
    }
    if h.bits_per_sample == 0 {
        return Err(FormatError::malformed(
            BITS_PER_SAMPLE_OFFSET,
            "bits per sample is zero",
        ));
    }

    h.header_size = u32::try_from(input.consumed()).map_err(|_| {
        FormatError::malformed(input.consumed(), "header does not fit in a 32-bit size")
    })?;

    Ok(h.freeze())
}
