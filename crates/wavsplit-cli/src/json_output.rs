//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `info` and `split`.

use serde::{Deserialize, Serialize};
use wavsplit_format::subformat::format_guid;
use wavsplit_format::{FormatError, Header};

use crate::demux::SplitReport;
use crate::error::SplitError;

/// Error codes for CLI operations.
///
/// Header errors pass through their `WAV_XXX` code; CLI-level failures use
/// `CLI_XXX`.
pub mod error_codes {
    /// File could not be opened or read
    pub const FILE_READ: &str = "CLI_001";
    /// Output file could not be created or written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Sample layout the splitter cannot handle
    pub const UNSUPPORTED_SAMPLES: &str = "CLI_003";
    /// Output file exists and overwriting is off
    pub const OUTPUT_EXISTS: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Creates an error from a header codec failure.
    pub fn from_format(err: &FormatError) -> Self {
        Self::new(err.code(), err.to_string())
    }

    /// Creates an error from a failed split, with the full cause chain as
    /// the message.
    pub fn from_split(err: SplitError) -> Self {
        let code = err.code();
        Self::new(code, format!("{:#}", anyhow::Error::new(err)))
    }

    /// Sets the file the error refers to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Every header field, with tags as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderJson {
    pub chunk_id: String,
    pub chunk_size: u32,
    pub format: String,
    pub subchunk1_id: String,
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
    /// Sub-format identifier in GUID notation
    pub sub_format: String,
    /// `PCM`, `IEEE FLOAT` or `Unknown`
    pub sub_format_kind: String,
    pub subchunk2_id: String,
    pub data_size: u32,
    pub is_extensible: bool,
    pub header_size: u32,
    pub total_samples: u64,
    /// Duration in seconds
    pub duration: f64,
    /// Short label per channel
    pub channels: Vec<String>,
}

impl From<&Header> for HeaderJson {
    fn from(header: &Header) -> Self {
        let kind = wavsplit_format::SubFormat::classify(header.sub_format_guid());
        Self {
            chunk_id: header.chunk_id().to_string(),
            chunk_size: header.chunk_size(),
            format: header.form_type().to_string(),
            subchunk1_id: header.subchunk1_id().to_string(),
            subchunk1_size: header.subchunk1_size(),
            audio_format: header.audio_format(),
            num_channels: header.num_channels(),
            sample_rate: header.sample_rate(),
            byte_rate: header.byte_rate(),
            block_align: header.block_align(),
            bits_per_sample: header.bits_per_sample(),
            extra_param_size: header.extra_param_size(),
            valid_bits_per_sample: header.valid_bits_per_sample(),
            channel_mask: header.channel_mask(),
            sub_format: format_guid(header.sub_format_guid()),
            sub_format_kind: kind.as_str().to_string(),
            subchunk2_id: header.subchunk2_id().to_string(),
            data_size: header.data_size(),
            is_extensible: header.is_extensible(),
            header_size: header.header_size(),
            total_samples: header.total_samples(),
            duration: header.duration(),
            channels: wavsplit_format::channel_labels(header),
        }
    }
}

/// Output of `info --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoOutput {
    /// Whether the header was read
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Input file path
    pub input: String,
    /// Parsed header (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderJson>,
}

impl InfoOutput {
    /// Creates a successful info output.
    pub fn success(input: impl Into<String>, header: &Header) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            input: input.into(),
            header: Some(HeaderJson::from(header)),
        }
    }

    /// Creates a failed info output.
    pub fn failure(input: impl Into<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            input: input.into(),
            header: None,
        }
    }
}

/// One written file in `split --json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitFileJson {
    /// Channel label
    pub channel: String,
    /// Output path
    pub path: String,
}

/// Result section of `split --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    /// Header of the input file
    pub source: HeaderJson,
    /// Header written to each output
    pub mono: HeaderJson,
    /// Files written, in channel order
    pub outputs: Vec<SplitFileJson>,
    /// Whole frames copied
    pub frames: u64,
    /// Zero bytes appended to each output
    pub padding: u64,
}

impl From<&SplitReport> for SplitResult {
    fn from(report: &SplitReport) -> Self {
        Self {
            source: HeaderJson::from(&report.source),
            mono: HeaderJson::from(&report.mono),
            outputs: report
                .outputs
                .iter()
                .map(|o| SplitFileJson {
                    channel: o.label.clone(),
                    path: o.path.display().to_string(),
                })
                .collect(),
            frames: report.stats.frames,
            padding: report.stats.padding,
        }
    }
}

/// Output of `split --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutputJson {
    /// Whether every output was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Input file path
    pub input: String,
    /// Split details (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SplitResult>,
}

impl SplitOutputJson {
    /// Creates a successful split output.
    pub fn success(input: impl Into<String>, report: &SplitReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            input: input.into(),
            result: Some(SplitResult::from(report)),
        }
    }

    /// Creates a failed split output.
    pub fn failure(input: impl Into<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            input: input.into(),
            result: None,
        }
    }
}
