//! RIFF chunk tags.

use std::fmt;

/// A 4-byte RIFF chunk tag, compared as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// RIFF container tag.
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    /// WAVE form type.
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    /// Format subchunk tag (note the trailing space).
    pub const FMT: FourCc = FourCc(*b"fmt ");
    /// Data subchunk tag.
    pub const DATA: FourCc = FourCc(*b"data");
    /// Metadata list chunk tag, the most common chunk found between `fmt ` and `data`.
    pub const LIST: FourCc = FourCc(*b"LIST");

    /// Returns the raw tag bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for FourCc {
    fn from(bytes: [u8; 4]) -> Self {
        FourCc(bytes)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}
