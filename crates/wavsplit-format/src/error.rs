//! Error types for the header codec.

use std::io;

use thiserror::Error;

/// Result type for header operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while parsing or writing a WAVE header.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The stream ended early, a chunk overran the stream, or a field the
    /// derived values divide by is zero.
    #[error("malformed WAV header at byte {offset}: {reason}")]
    MalformedHeader {
        /// Byte offset from the start of the header where the problem was found.
        offset: u64,
        /// What was being read or checked.
        reason: String,
    },

    /// The `fmt ` chunk is neither canonical PCM nor WAVEFORMATEXTENSIBLE.
    #[error(
        "unsupported WAV header: fmt size {subchunk1_size}, audio format {audio_format:#06x}{}",
        .extra_param_size.map(|s| format!(", extra param size {s}")).unwrap_or_default()
    )]
    UnsupportedHeader {
        /// Size of the `fmt ` subchunk.
        subchunk1_size: u32,
        /// Audio format code.
        audio_format: u16,
        /// Extra-param size, when the extensible path got far enough to read it.
        extra_param_size: Option<u16>,
    },

    /// WAVEFORMATEXTENSIBLE sub-format is neither PCM nor IEEE float.
    #[error("unsupported WAV sub-format: {}", crate::subformat::format_guid(.sub_format))]
    UnsupportedSubFormat {
        /// The raw 16-byte identifier as stored in the stream.
        sub_format: [u8; 16],
    },

    /// I/O error other than end of stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Creates a malformed header error.
    pub fn malformed(offset: u64, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            offset,
            reason: reason.into(),
        }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::MalformedHeader { .. } => "WAV_001",
            FormatError::UnsupportedHeader { .. } => "WAV_002",
            FormatError::UnsupportedSubFormat { .. } => "WAV_003",
            FormatError::Io(_) => "WAV_004",
        }
    }
}
