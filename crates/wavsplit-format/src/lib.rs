//! wavsplit WAVE header codec
//!
//! This crate reads and writes the header of WAVE (RIFF) files, in both the
//! canonical 44-byte PCM layout and the WAVEFORMATEXTENSIBLE layout used
//! for multichannel and float audio, and derives the mono header used when a
//! multichannel file is split into one file per channel.
//!
//! # Overview
//!
//! - [`parse_header`] reads a [`Header`] from any [`std::io::Read`] stream,
//!   skipping unknown chunks between `fmt ` and `data` in extensible files.
//! - [`write_header`] writes a [`Header`] back in the layout it was read
//!   from.
//! - [`derive_mono`] computes the canonical PCM header for one channel.
//!
//! Sample data is never touched: after [`parse_header`] returns, the stream
//! is positioned at the first sample byte.
//!
//! # Example
//!
//! ```
//! use wavsplit_format::{derive_mono, header_to_vec, parse_header_bytes};
//!
//! let mut bytes = Vec::new();
//! bytes.extend_from_slice(b"RIFF");
//! bytes.extend_from_slice(&(36u32 + 8).to_le_bytes());
//! bytes.extend_from_slice(b"WAVEfmt ");
//! bytes.extend_from_slice(&16u32.to_le_bytes());
//! bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
//! bytes.extend_from_slice(&2u16.to_le_bytes()); // stereo
//! bytes.extend_from_slice(&8000u32.to_le_bytes());
//! bytes.extend_from_slice(&32000u32.to_le_bytes());
//! bytes.extend_from_slice(&4u16.to_le_bytes());
//! bytes.extend_from_slice(&16u16.to_le_bytes());
//! bytes.extend_from_slice(b"data");
//! bytes.extend_from_slice(&8u32.to_le_bytes());
//!
//! let header = parse_header_bytes(&bytes)?;
//! assert_eq!(header.total_samples(), 2);
//! assert_eq!(header_to_vec(&header)?, bytes);
//!
//! let mono = derive_mono(&header);
//! assert_eq!(mono.data_size(), 4);
//! # Ok::<(), wavsplit_format::FormatError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`header`] - The [`Header`] record and layout constants
//! - [`parser`] - Chunk-scanning parser
//! - [`writer`] - Header serializer
//! - [`mono`] - Mono header derivation
//! - [`channels`] - Speaker position table and channel labels
//! - [`fourcc`] - RIFF chunk tags
//! - [`subformat`] - WAVEFORMATEXTENSIBLE sub-format identifiers
//! - [`report`] - Human-readable header report

pub mod channels;
pub mod error;
pub mod fourcc;
pub mod header;
pub mod mono;
pub mod parser;
pub mod report;
pub mod subformat;
pub mod writer;

// Re-export main types at crate root
pub use channels::{channel_labels, SpeakerChannel};
pub use error::{FormatError, FormatResult};
pub use fourcc::FourCc;
pub use header::{FormatLayout, Header};
pub use mono::derive_mono;
pub use parser::{parse_header, parse_header_bytes};
pub use subformat::SubFormat;
pub use writer::{header_to_vec, write_header};
