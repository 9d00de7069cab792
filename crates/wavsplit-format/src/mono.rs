//! Mono header derivation.

use crate::fourcc::FourCc;
use crate::header::{
    Header, HeaderBuilder, AUDIO_FORMAT_PCM, CANONICAL_CHUNK_OVERHEAD, CANONICAL_HEADER_SIZE,
    PCM_FMT_SIZE,
};

/// Derives the canonical PCM header shared by every single-channel stream
/// split out of `header`.
///
/// The result always uses the 44-byte PCM layout, even when the source is
/// WAVEFORMATEXTENSIBLE: channel mask, sub-format and the extension block
/// are dropped. The data size is the source data size divided by the
/// channel count, truncating any bytes left over from a partial frame.
pub fn derive_mono(header: &Header) -> Header {
    debug_assert!(header.num_channels() > 0, "headers never carry zero channels");

    let bits_per_sample = header.bits_per_sample();
    let data_size = header.data_size() / u32::from(header.num_channels().max(1));
    let byte_rate = u64::from(header.sample_rate()) * u64::from(bits_per_sample) / 8;

    HeaderBuilder {
        chunk_id: FourCc::RIFF,
        chunk_size: CANONICAL_CHUNK_OVERHEAD.wrapping_add(data_size),
        form_type: FourCc::WAVE,
        subchunk1_id: FourCc::FMT,
        subchunk1_size: PCM_FMT_SIZE,
        audio_format: AUDIO_FORMAT_PCM,
        num_channels: 1,
        sample_rate: header.sample_rate(),
        byte_rate: byte_rate as u32,
        block_align: bits_per_sample / 8,
        bits_per_sample,
        subchunk2_id: FourCc::DATA,
        data_size,
        is_extensible: false,
        header_size: CANONICAL_HEADER_SIZE,
        ..HeaderBuilder::default()
    }
    .freeze()
}
