//! Human-readable header report.

use std::fmt;

use crate::header::{Header, AUDIO_FORMAT_EXTENSIBLE, AUDIO_FORMAT_PCM};
use crate::subformat::{format_guid, SubFormat};

/// Formats seconds as `HH:MM:SS.fff`.
pub fn format_duration(seconds: f64) -> String {
    let millis_total = (seconds.max(0.0) * 1000.0).round() as u64;
    let millis = millis_total % 1000;
    let secs_total = millis_total / 1000;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs_total / 3600,
        (secs_total / 60) % 60,
        secs_total % 60,
        millis
    )
}

fn audio_format_name(code: u16) -> String {
    match code {
        AUDIO_FORMAT_PCM => "1 : PCM".to_string(),
        AUDIO_FORMAT_EXTENSIBLE => "0xFFFE : WAVEFORMATEXTENSIBLE".to_string(),
        other => other.to_string(),
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub_format = SubFormat::classify(self.sub_format_guid());

        writeln!(f, "[WAVE]")?;
        writeln!(f, "ChunkID:\t\t{}", self.chunk_id())?;
        writeln!(f, "ChunkSize:\t{}", self.chunk_size())?;
        writeln!(f, "Format:\t\t{}", self.form_type())?;
        writeln!(f, "[fmt]")?;
        writeln!(f, "Subchunk1ID:\t{}", self.subchunk1_id())?;
        writeln!(f, "Subchunk1Size:\t{}", self.subchunk1_size())?;
        writeln!(f, "AudioFormat:\t{}", audio_format_name(self.audio_format()))?;
        writeln!(f, "NumChannels:\t{}", self.num_channels())?;
        writeln!(f, "SampleRate:\t{}", self.sample_rate())?;
        writeln!(f, "ByteRate:\t\t{}", self.byte_rate())?;
        writeln!(f, "BlockAlign:\t{}", self.block_align())?;
        writeln!(f, "BitsPerSample:\t{}", self.bits_per_sample())?;
        writeln!(f, "[extra]")?;
        writeln!(f, "ExtraParamSize:\t{}", self.extra_param_size())?;
        writeln!(f, "[extensible]")?;
        writeln!(f, "Samples:\t\t{}", self.valid_bits_per_sample())?;
        writeln!(f, "ChannelMask:\t{:#x}", self.channel_mask())?;
        writeln!(
            f,
            "GuidSubFormat:\t{} : {}",
            format_guid(self.sub_format_guid()),
            sub_format
        )?;
        writeln!(f, "[data]")?;
        writeln!(f, "Subchunk2ID:\t{}", self.subchunk2_id())?;
        writeln!(f, "Subchunk2Size:\t{}", self.data_size())?;
        writeln!(f, "[info]")?;
        writeln!(f, "IsExtensible:\t{}", self.is_extensible())?;
        writeln!(f, "HeaderSize:\t{}", self.header_size())?;
        writeln!(f, "Duration:\t\t{}", format_duration(self.duration()))?;
        write!(f, "TotalSamples:\t{}", self.total_samples())
    }
}
