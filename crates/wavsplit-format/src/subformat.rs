//! WAVEFORMATEXTENSIBLE sub-format identifiers.
//!
//! Identifiers are kept as the 16 raw bytes found in the stream. The first
//! three GUID fields are stored little-endian, so `00000001-0000-0010-...`
//! starts with `01 00 00 00`.

use std::fmt;

/// KSDATAFORMAT_SUBTYPE_PCM.
pub const SUBTYPE_PCM: [u8; 16] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
];

/// KSDATAFORMAT_SUBTYPE_IEEE_FLOAT.
pub const SUBTYPE_IEEE_FLOAT: [u8; 16] = [
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
];

/// Classification of a sub-format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubFormat {
    /// Integer PCM samples.
    Pcm,
    /// IEEE 754 float samples.
    IeeeFloat,
    /// Anything else.
    Unknown,
}

impl SubFormat {
    /// Classifies a raw identifier.
    pub fn classify(guid: &[u8; 16]) -> Self {
        if *guid == SUBTYPE_PCM {
            SubFormat::Pcm
        } else if *guid == SUBTYPE_IEEE_FLOAT {
            SubFormat::IeeeFloat
        } else {
            SubFormat::Unknown
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubFormat::Pcm => "PCM",
            SubFormat::IeeeFloat => "IEEE FLOAT",
            SubFormat::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SubFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats raw identifier bytes in the registry form
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
pub fn format_guid(guid: &[u8; 16]) -> String {
    let data1 = u32::from_le_bytes([guid[0], guid[1], guid[2], guid[3]]);
    let data2 = u16::from_le_bytes([guid[4], guid[5]]);
    let data3 = u16::from_le_bytes([guid[6], guid[7]]);
    let tail: String = guid[10..].iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{}",
        data1, data2, data3, guid[8], guid[9], tail
    )
}
