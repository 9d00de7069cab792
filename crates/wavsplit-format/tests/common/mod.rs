//! Byte-level WAVE header fixtures shared by the integration tests.

#![allow(dead_code)]

use wavsplit_format::subformat::SUBTYPE_PCM;

/// Builds raw header bytes field by field.
#[derive(Debug, Clone)]
pub struct WavFixture {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub data_size: u32,
    pub extensible: Option<Extension>,
    /// Chunks inserted between `fmt ` and `data` (extensible only).
    pub extra_chunks: Vec<([u8; 4], Vec<u8>)>,
}

/// WAVEFORMATEXTENSIBLE fields.
#[derive(Debug, Clone)]
pub struct Extension {
    pub valid_bits: u16,
    pub channel_mask: u32,
    pub sub_format: [u8; 16],
}

impl WavFixture {
    /// Canonical 44-byte PCM header.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample,
            data_size,
            extensible: None,
            extra_chunks: Vec::new(),
        }
    }

    /// 68-byte WAVEFORMATEXTENSIBLE header with a PCM sub-format.
    pub fn extensible(
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        channel_mask: u32,
        data_size: u32,
    ) -> Self {
        Self {
            extensible: Some(Extension {
                valid_bits: bits_per_sample,
                channel_mask,
                sub_format: SUBTYPE_PCM,
            }),
            ..Self::pcm(channels, sample_rate, bits_per_sample, data_size)
        }
    }

    pub fn with_sub_format(mut self, sub_format: [u8; 16]) -> Self {
        if let Some(ext) = self.extensible.as_mut() {
            ext.sub_format = sub_format;
        }
        self
    }

    pub fn with_chunk(mut self, tag: &[u8; 4], content: Vec<u8>) -> Self {
        self.extra_chunks.push((*tag, content));
        self
    }

    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    fn fmt_size(&self) -> u32 {
        if self.extensible.is_some() {
            40
        } else {
            16
        }
    }

    fn extra_len(&self) -> u32 {
        self.extra_chunks
            .iter()
            .map(|(_, content)| 8 + content.len() as u32)
            .sum()
    }

    /// Header bytes, without sample data.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        let chunk_size = 4 + (8 + self.fmt_size()) + self.extra_len() + 8 + self.data_size;

        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&chunk_size.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");

        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&self.fmt_size().to_le_bytes());
        let audio_format: u16 = if self.extensible.is_some() { 0xFFFE } else { 1 };
        bytes.extend_from_slice(&audio_format.to_le_bytes());
        bytes.extend_from_slice(&self.channels.to_le_bytes());
        bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&self.byte_rate().to_le_bytes());
        bytes.extend_from_slice(&self.block_align().to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        if let Some(ext) = &self.extensible {
            bytes.extend_from_slice(&22u16.to_le_bytes());
            bytes.extend_from_slice(&ext.valid_bits.to_le_bytes());
            bytes.extend_from_slice(&ext.channel_mask.to_le_bytes());
            bytes.extend_from_slice(&ext.sub_format);
        }

        for (tag, content) in &self.extra_chunks {
            bytes.extend_from_slice(tag);
            bytes.extend_from_slice(&(content.len() as u32).to_le_bytes());
            bytes.extend_from_slice(content);
        }

        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&self.data_size.to_le_bytes());
        bytes
    }
}
