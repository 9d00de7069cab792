//! Speaker position table.
//!
//! Bit values follow the WAVEFORMATEXTENSIBLE `dwChannelMask` definition.
//! Channels in an extensible stream appear in the same order as the set
//! bits of the mask, lowest bit first.

use crate::header::Header;

/// Front left.
pub const SPEAKER_FRONT_LEFT: u32 = 0x1;
/// Front right.
pub const SPEAKER_FRONT_RIGHT: u32 = 0x2;
/// Front center.
pub const SPEAKER_FRONT_CENTER: u32 = 0x4;
/// Low-frequency effects (subwoofer).
pub const SPEAKER_LOW_FREQUENCY: u32 = 0x8;
/// Back left.
pub const SPEAKER_BACK_LEFT: u32 = 0x10;
/// Back right.
pub const SPEAKER_BACK_RIGHT: u32 = 0x20;
/// Front left of center.
pub const SPEAKER_FRONT_LEFT_OF_CENTER: u32 = 0x40;
/// Front right of center.
pub const SPEAKER_FRONT_RIGHT_OF_CENTER: u32 = 0x80;
/// Back center.
pub const SPEAKER_BACK_CENTER: u32 = 0x100;
/// Side left.
pub const SPEAKER_SIDE_LEFT: u32 = 0x200;
/// Side right.
pub const SPEAKER_SIDE_RIGHT: u32 = 0x400;
/// Top center.
pub const SPEAKER_TOP_CENTER: u32 = 0x800;
/// Top front left.
pub const SPEAKER_TOP_FRONT_LEFT: u32 = 0x1000;
/// Top front center.
pub const SPEAKER_TOP_FRONT_CENTER: u32 = 0x2000;
/// Top front right.
pub const SPEAKER_TOP_FRONT_RIGHT: u32 = 0x4000;
/// Top back left.
pub const SPEAKER_TOP_BACK_LEFT: u32 = 0x8000;
/// Top back center.
pub const SPEAKER_TOP_BACK_CENTER: u32 = 0x10000;
/// Top back right.
pub const SPEAKER_TOP_BACK_RIGHT: u32 = 0x20000;

/// A named speaker position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerChannel {
    /// Long name, e.g. "Front Left".
    pub name: &'static str,
    /// Short label used in file names, e.g. "FL".
    pub short_name: &'static str,
    /// Channel mask bit, zero for positions outside the extensible mask.
    pub mask: u32,
}

const fn speaker(name: &'static str, short_name: &'static str, mask: u32) -> SpeakerChannel {
    SpeakerChannel {
        name,
        short_name,
        mask,
    }
}

/// Label for a single-channel file.
pub const MONO_SPEAKER: SpeakerChannel = speaker("Mono", "M", 0);

/// Labels for a plain (non-extensible) stereo file.
pub const STEREO_SPEAKERS: [SpeakerChannel; 2] = [speaker("Left", "L", 0), speaker("Right", "R", 0)];

/// Every extensible speaker position, in mask bit order.
pub static MULTICHANNEL_SPEAKERS: [SpeakerChannel; 18] = [
    speaker("Front Left", "FL", SPEAKER_FRONT_LEFT),
    speaker("Front Right", "FR", SPEAKER_FRONT_RIGHT),
    speaker("Front Center", "FC", SPEAKER_FRONT_CENTER),
    speaker("Low Frequency", "LF", SPEAKER_LOW_FREQUENCY),
    speaker("Back Left", "BL", SPEAKER_BACK_LEFT),
    speaker("Back Right", "BR", SPEAKER_BACK_RIGHT),
    speaker("Front Left of Center", "FLC", SPEAKER_FRONT_LEFT_OF_CENTER),
    speaker("Front Right of Center", "FRC", SPEAKER_FRONT_RIGHT_OF_CENTER),
    speaker("Back Center", "BC", SPEAKER_BACK_CENTER),
    speaker("Side Left", "SL", SPEAKER_SIDE_LEFT),
    speaker("Side Right", "SR", SPEAKER_SIDE_RIGHT),
    speaker("Top Center", "TC", SPEAKER_TOP_CENTER),
    speaker("Top Front Left", "TFL", SPEAKER_TOP_FRONT_LEFT),
    speaker("Top Front Center", "TFC", SPEAKER_TOP_FRONT_CENTER),
    speaker("Top Front Right", "TFR", SPEAKER_TOP_FRONT_RIGHT),
    speaker("Top Back Left", "TBL", SPEAKER_TOP_BACK_LEFT),
    speaker("Top Back Center", "TBC", SPEAKER_TOP_BACK_CENTER),
    speaker("Top Back Right", "TBR", SPEAKER_TOP_BACK_RIGHT),
];

/// Speaker positions present in `mask`, in stream order.
pub fn speakers_in_mask(mask: u32) -> impl Iterator<Item = &'static SpeakerChannel> {
    MULTICHANNEL_SPEAKERS
        .iter()
        .filter(move |speaker| mask & speaker.mask != 0)
}

/// One short label per channel of `header`.
///
/// Extensible headers use the channel mask; plain mono and stereo files use
/// `M` and `L`/`R`. Channels that no table entry covers are named `CH<n>`,
/// counting from 1.
pub fn channel_labels(header: &Header) -> Vec<String> {
    let count = usize::from(header.num_channels());

    let named: Vec<&'static str> = if header.is_extensible() && header.channel_mask() != 0 {
        speakers_in_mask(header.channel_mask())
            .map(|speaker| speaker.short_name)
            .collect()
    } else {
        match count {
            1 => vec![MONO_SPEAKER.short_name],
            2 => STEREO_SPEAKERS.iter().map(|s| s.short_name).collect(),
            _ => Vec::new(),
        }
    };

    (0..count)
        .map(|i| match named.get(i) {
            Some(label) => (*label).to_string(),
            None => format!("CH{}", i + 1),
        })
        .collect()
}

impl Header {
    /// Speaker positions selected by the channel mask.
    pub fn speakers(&self) -> Vec<&'static SpeakerChannel> {
        speakers_in_mask(self.channel_mask()).collect()
    }
}
