//! The WAVE header record.

use crate::fourcc::FourCc;
use crate::subformat::SubFormat;

/// Audio format code for integer PCM.
pub const AUDIO_FORMAT_PCM: u16 = 0x0001;

/// Audio format code marking a WAVEFORMATEXTENSIBLE `fmt ` chunk.
pub const AUDIO_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// `fmt ` chunk size of a canonical PCM header.
pub const PCM_FMT_SIZE: u32 = 16;

/// `fmt ` chunk size of a canonical WAVEFORMATEXTENSIBLE header.
pub const EXTENSIBLE_FMT_SIZE: u32 = 40;

/// Required extra-param size (`cbSize`) of a WAVEFORMATEXTENSIBLE header.
pub const EXTENSIBLE_EXTRA_SIZE: u16 = 22;

/// RIFF id, size and form type.
pub const RIFF_HEADER_SIZE: u32 = 12;

/// `fmt ` id, size and the 16 core format bytes.
pub const FMT_HEADER_SIZE: u32 = 24;

/// `data` id and size.
pub const DATA_HEADER_SIZE: u32 = 8;

/// Size of a canonical 44-byte PCM header.
pub const CANONICAL_HEADER_SIZE: u32 = RIFF_HEADER_SIZE + FMT_HEADER_SIZE + DATA_HEADER_SIZE;

/// `chunk_size` of a canonical PCM file minus its data size.
pub const CANONICAL_CHUNK_OVERHEAD: u32 = CANONICAL_HEADER_SIZE - 8;

/// On-disk layout of the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatLayout {
    /// 16-byte `fmt ` chunk with audio format 1.
    Pcm,
    /// `fmt ` chunk larger than 16 bytes with audio format 0xFFFE.
    Extensible,
}

impl FormatLayout {
    /// Maps a `(subchunk1_size, audio_format)` pair to a layout.
    ///
    /// Returns `None` for every combination the codec does not handle. The
    /// parser and the writer both dispatch through this function.
    pub fn classify(subchunk1_size: u32, audio_format: u16) -> Option<Self> {
        match (subchunk1_size, audio_format) {
            (PCM_FMT_SIZE, AUDIO_FORMAT_PCM) => Some(FormatLayout::Pcm),
            (size, AUDIO_FORMAT_EXTENSIBLE) if size > PCM_FMT_SIZE => {
                Some(FormatLayout::Extensible)
            }
            _ => None,
        }
    }
}

/// A parsed or derived WAVE header.
///
/// Headers are produced by [`crate::parse_header`] or
/// [`crate::derive_mono`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub(crate) chunk_id: FourCc,
    pub(crate) chunk_size: u32,
    pub(crate) form_type: FourCc,

    pub(crate) subchunk1_id: FourCc,
    pub(crate) subchunk1_size: u32,
    pub(crate) audio_format: u16,
    pub(crate) num_channels: u16,
    pub(crate) sample_rate: u32,
    pub(crate) byte_rate: u32,
    pub(crate) block_align: u16,
    pub(crate) bits_per_sample: u16,

    pub(crate) extra_param_size: u16,
    pub(crate) valid_bits_per_sample: u16,
    pub(crate) channel_mask: u32,
    pub(crate) sub_format: [u8; 16],

    pub(crate) subchunk2_id: FourCc,
    pub(crate) data_size: u32,

    pub(crate) is_extensible: bool,
    pub(crate) header_size: u32,
    pub(crate) total_samples: u64,
    pub(crate) duration: f64,
}

impl Header {
    /// RIFF chunk id, normally `RIFF`.
    pub fn chunk_id(&self) -> FourCc {
        self.chunk_id
    }

    /// RIFF chunk size: the number of bytes following the size field.
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// RIFF form type, normally `WAVE`.
    pub fn form_type(&self) -> FourCc {
        self.form_type
    }

    /// Format subchunk id, normally `fmt `.
    pub fn subchunk1_id(&self) -> FourCc {
        self.subchunk1_id
    }

    /// Format subchunk size.
    pub fn subchunk1_size(&self) -> u32 {
        self.subchunk1_size
    }

    /// Audio format code.
    pub fn audio_format(&self) -> u16 {
        self.audio_format
    }

    /// Number of interleaved channels.
    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Byte rate as stored in the header.
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// Bytes per sample frame as stored in the header.
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// Container bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Extra-param size (`cbSize`). Zero for canonical PCM.
    pub fn extra_param_size(&self) -> u16 {
        self.extra_param_size
    }

    /// The `Samples` union: valid bits per sample, samples per block, or
    /// reserved, depending on the codec. Zero for canonical PCM.
    pub fn valid_bits_per_sample(&self) -> u16 {
        self.valid_bits_per_sample
    }

    /// Speaker position bitfield. Zero for canonical PCM.
    pub fn channel_mask(&self) -> u32 {
        self.channel_mask
    }

    /// Raw sub-format identifier. All zero for canonical PCM.
    pub fn sub_format_guid(&self) -> &[u8; 16] {
        &self.sub_format
    }

    /// Classified sub-format, or `None` for a non-extensible header.
    pub fn sub_format(&self) -> Option<SubFormat> {
        self.is_extensible
            .then(|| SubFormat::classify(&self.sub_format))
    }

    /// Data subchunk id, normally `data`.
    pub fn subchunk2_id(&self) -> FourCc {
        self.subchunk2_id
    }

    /// Size of the sample data in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Whether the WAVEFORMATEXTENSIBLE layout was used.
    pub fn is_extensible(&self) -> bool {
        self.is_extensible
    }

    /// Bytes consumed from the start of the stream up to the first sample byte.
    pub fn header_size(&self) -> u32 {
        self.header_size
    }

    /// Number of sample frames (samples per channel).
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Layout this header is written with, if it is one the codec supports.
    pub fn layout(&self) -> Option<FormatLayout> {
        FormatLayout::classify(self.subchunk1_size, self.audio_format)
    }

    /// Bytes per single-channel sample, rounded down.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Whether the stored byte rate and block align agree with the channel
    /// count, sample rate and bit depth.
    pub fn is_consistent(&self) -> bool {
        let frame_bits = u64::from(self.num_channels) * u64::from(self.bits_per_sample);
        let expected_block_align = frame_bits / 8;
        let expected_byte_rate = u64::from(self.sample_rate) * frame_bits / 8;
        u64::from(self.block_align) == expected_block_align
            && u64::from(self.byte_rate) == expected_byte_rate
    }
}

/// Number of sample frames in `data_size` bytes.
///
/// Equivalent to `data_size / (channels * bits / 8)` truncated toward zero,
/// including bit depths that are not a multiple of 8. Zero when the frame
/// is empty.
pub(crate) fn frame_count(data_size: u32, num_channels: u16, bits_per_sample: u16) -> u64 {
    let frame_bits = u64::from(num_channels) * u64::from(bits_per_sample);
    (u64::from(data_size) * 8)
        .checked_div(frame_bits)
        .unwrap_or(0)
}

/// Accumulates header fields and freezes them into a [`Header`].
#[derive(Debug, Clone, Default)]
pub(crate) struct HeaderBuilder {
    pub chunk_id: FourCc,
    pub chunk_size: u32,
    pub form_type: FourCc,
    pub subchunk1_id: FourCc,
    pub subchunk1_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub extra_param_size: u16,
    pub valid_bits_per_sample: u16,
    pub channel_mask: u32,
    pub sub_format: [u8; 16],
    pub subchunk2_id: FourCc,
    pub data_size: u32,
    pub is_extensible: bool,
    pub header_size: u32,
}

impl HeaderBuilder {
    /// Computes the derived sample count and duration and freezes the header.
    ///
    /// Callers reject a zero sample rate or an empty frame beforehand; the
    /// derived values are zero in that case.
    pub fn freeze(self) -> Header {
        let total_samples = frame_count(self.data_size, self.num_channels, self.bits_per_sample);
        let duration = if self.sample_rate > 0 {
            total_samples as f64 / f64::from(self.sample_rate)
        } else {
            0.0
        };

        Header {
            chunk_id: self.chunk_id,
            chunk_size: self.chunk_size,
            form_type: self.form_type,
            subchunk1_id: self.subchunk1_id,
            subchunk1_size: self.subchunk1_size,
            audio_format: self.audio_format,
            num_channels: self.num_channels,
            sample_rate: self.sample_rate,
            byte_rate: self.byte_rate,
            block_align: self.block_align,
            bits_per_sample: self.bits_per_sample,
            extra_param_size: self.extra_param_size,
            valid_bits_per_sample: self.valid_bits_per_sample,
            channel_mask: self.channel_mask,
            sub_format: self.sub_format,
            subchunk2_id: self.subchunk2_id,
            data_size: self.data_size,
            is_extensible: self.is_extensible,
            header_size: self.header_size,
            total_samples,
            duration,
        }
    }
}
