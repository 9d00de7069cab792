//! Error types for the channel splitter.
//!
//! Each variant names the step that failed, so callers can report a stable
//! code without inspecting the underlying I/O error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use wavsplit_format::FormatError;

use crate::json_output::error_codes;

/// Errors from [`crate::split_file`].
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input could not be opened or its sample data read.
    #[error("failed to read {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input header is malformed or unsupported.
    #[error("failed to read WAV header from {}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// The input's sample layout is one the splitter does not handle.
    #[error("{}: cannot split {reason}", .path.display())]
    UnsupportedSamples { path: PathBuf, reason: String },

    /// An output file exists and overwriting is off.
    #[error("{} already exists (use --force to overwrite)", .path.display())]
    OutputExists { path: PathBuf },

    /// An output file or directory could not be created or written.
    #[error("failed to write {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Stable diagnostic code; header errors keep their `WAV_XXX` code.
    pub fn code(&self) -> &'static str {
        match self {
            SplitError::InputRead { .. } => error_codes::FILE_READ,
            SplitError::Header { source, .. } => source.code(),
            SplitError::UnsupportedSamples { .. } => error_codes::UNSUPPORTED_SAMPLES,
            SplitError::OutputExists { .. } => error_codes::OUTPUT_EXISTS,
            SplitError::OutputWrite { .. } => error_codes::FILE_WRITE,
        }
    }
}
