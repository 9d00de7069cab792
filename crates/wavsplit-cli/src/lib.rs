//! wavsplit CLI library.
//!
//! Command implementations, the channel splitter and JSON output types
//! behind the `wavsplit` binary.

pub mod commands;
pub mod demux;
pub mod error;
pub mod json_output;
pub mod logging;

pub use demux::{
    demux, split_file, DemuxError, DemuxStats, SplitOptions, SplitOutput, SplitReport,
    MAX_FRAME_BYTES,
};
pub use error::SplitError;
