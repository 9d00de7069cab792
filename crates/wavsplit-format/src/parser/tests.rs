//! Tests for the header parser.

use pretty_assertions::assert_eq;

use super::*;
use crate::subformat::{SUBTYPE_IEEE_FLOAT, SUBTYPE_PCM};

fn push_u16(bytes: &mut Vec<u8>, value: u16) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

/// RIFF block plus a `fmt ` chunk header with the core fields.
fn riff_and_fmt(fmt_size: u32, audio_format: u16, channels: u16, rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * bits / 8;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    push_u32(&mut bytes, 0);
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    push_u32(&mut bytes, fmt_size);
    push_u16(&mut bytes, audio_format);
    push_u16(&mut bytes, channels);
    push_u32(&mut bytes, rate);
    push_u32(&mut bytes, rate * u32::from(block_align));
    push_u16(&mut bytes, block_align);
    push_u16(&mut bytes, bits);
    bytes
}

fn pcm_wav(channels: u16, rate: u32, bits: u16, data_size: u32) -> Vec<u8> {
    let mut bytes = riff_and_fmt(16, 1, channels, rate, bits);
    bytes[4..8].copy_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, data_size);
    bytes
}

fn extensible_prefix(channels: u16, bits: u16, mask: u32, sub_format: [u8; 16]) -> Vec<u8> {
    let mut bytes = riff_and_fmt(40, 0xFFFE, channels, 48_000, bits);
    push_u16(&mut bytes, 22);
    push_u16(&mut bytes, bits);
    push_u32(&mut bytes, mask);
    bytes.extend_from_slice(&sub_format);
    bytes
}

fn expect_malformed(bytes: &[u8]) -> (u64, String) {
    match parse_header_bytes(bytes) {
        Err(FormatError::MalformedHeader { offset, reason }) => (offset, reason),
        other => panic!("expected MalformedHeader, got {other:?}"),
    }
}

// =========================================================================
// Canonical PCM
// =========================================================================

#[test]
fn test_parse_canonical_stereo() {
    let header = parse_header_bytes(&pcm_wav(2, 44_100, 16, 176_400)).unwrap();

    assert_eq!(header.chunk_id(), FourCc::RIFF);
    assert_eq!(header.chunk_size(), 36 + 176_400);
    assert_eq!(header.form_type(), FourCc::WAVE);
    assert_eq!(header.subchunk1_id(), FourCc::FMT);
    assert_eq!(header.subchunk1_size(), 16);
    assert_eq!(header.audio_format(), 1);
    assert_eq!(header.num_channels(), 2);
    assert_eq!(header.sample_rate(), 44_100);
    assert_eq!(header.byte_rate(), 176_400);
    assert_eq!(header.block_align(), 4);
    assert_eq!(header.bits_per_sample(), 16);
    assert_eq!(header.subchunk2_id(), FourCc::DATA);
    assert_eq!(header.data_size(), 176_400);
    assert_eq!(header.total_samples(), 44_100);
    assert_eq!(header.duration(), 1.0);
    assert_eq!(header.header_size(), 44);
    assert!(!header.is_extensible());
    assert_eq!(header.sub_format(), None);
}

#[test]
fn test_parse_leaves_stream_at_sample_data() {
    let mut bytes = pcm_wav(1, 8000, 8, 3);
    bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let mut stream = &bytes[..];
    parse_header(&mut stream).unwrap();
    assert_eq!(stream, [0xAAu8, 0xBB, 0xCC].as_slice());
}

#[test]
fn test_tags_are_stored_not_enforced() {
    let mut bytes = pcm_wav(1, 8000, 16, 0);
    bytes[0..4].copy_from_slice(b"RIFX");
    bytes[8..12].copy_from_slice(b"AVI ");

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.chunk_id(), FourCc(*b"RIFX"));
    assert_eq!(header.form_type(), FourCc(*b"AVI "));
}

#[test]
fn test_pcm_does_not_scan_for_data() {
    // The canonical path reads whatever sits at offset 36 as the data header.
    let mut bytes = pcm_wav(1, 8000, 16, 10);
    bytes[36..40].copy_from_slice(b"LIST");

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.subchunk2_id(), FourCc::LIST);
    assert_eq!(header.header_size(), 44);
}

#[test]
fn test_stored_rates_are_not_validated() {
    let mut bytes = pcm_wav(2, 44_100, 16, 400);
    bytes[28..32].copy_from_slice(&1u32.to_le_bytes());

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.byte_rate(), 1);
    assert!(!header.is_consistent());
}

// =========================================================================
// WAVEFORMATEXTENSIBLE
// =========================================================================

#[test]
fn test_parse_extensible_with_list_chunk() {
    let mut bytes = extensible_prefix(6, 24, 0x3F, SUBTYPE_PCM);
    bytes.extend_from_slice(b"LIST");
    push_u32(&mut bytes, 20);
    bytes.extend_from_slice(&[0x55; 20]);
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, 6 * 3 * 480);

    let header = parse_header_bytes(&bytes).unwrap();
    assert!(header.is_extensible());
    assert_eq!(header.extra_param_size(), 22);
    assert_eq!(header.valid_bits_per_sample(), 24);
    assert_eq!(header.channel_mask(), 0x3F);
    assert_eq!(header.sub_format(), Some(SubFormat::Pcm));
    assert_eq!(header.data_size(), 8640);
    assert_eq!(header.total_samples(), 480);
    assert_eq!(header.duration(), 0.01);
    assert_eq!(header.header_size(), 12 + 24 + 2 + 22 + 4 + 20 + 4 + 4);
}

#[test]
fn test_parse_extensible_float_without_extra_chunks() {
    let mut bytes = extensible_prefix(2, 32, 0x3, SUBTYPE_IEEE_FLOAT);
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, 0);

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.sub_format(), Some(SubFormat::IeeeFloat));
    assert_eq!(header.header_size(), 68);
    assert_eq!(header.total_samples(), 0);
}

#[test]
fn test_scan_skips_several_chunks() {
    let mut bytes = extensible_prefix(2, 16, 0x3, SUBTYPE_PCM);
    for (tag, len) in [(b"fact", 4u32), (b"PEAK", 24), (b"junk", 0)] {
        bytes.extend_from_slice(tag);
        push_u32(&mut bytes, len);
        bytes.resize(bytes.len() + len as usize, 0);
    }
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, 40);

    let header = parse_header_bytes(&bytes).unwrap();
    assert_eq!(header.header_size(), 68 + (8 + 4) + (8 + 24) + 8);
    assert_eq!(header.data_size(), 40);
}

#[test]
fn test_unknown_sub_format_carries_identifier() {
    let mut mulaw = SUBTYPE_PCM;
    mulaw[0] = 0x07;
    let mut bytes = extensible_prefix(2, 8, 0x3, mulaw);
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, 0);

    match parse_header_bytes(&bytes) {
        Err(FormatError::UnsupportedSubFormat { sub_format }) => assert_eq!(sub_format, mulaw),
        other => panic!("expected UnsupportedSubFormat, got {other:?}"),
    }
}

#[test]
fn test_extra_param_size_must_be_22() {
    let mut bytes = riff_and_fmt(18, 0xFFFE, 2, 48_000, 16);
    push_u16(&mut bytes, 0);

    match parse_header_bytes(&bytes) {
        Err(FormatError::UnsupportedHeader {
            subchunk1_size,
            audio_format,
            extra_param_size,
        }) => {
            assert_eq!(subchunk1_size, 18);
            assert_eq!(audio_format, 0xFFFE);
            assert_eq!(extra_param_size, Some(0));
        }
        other => panic!("expected UnsupportedHeader, got {other:?}"),
    }
}

// =========================================================================
// Unsupported combinations
// =========================================================================

#[test]
fn test_pcm_with_extension_is_unsupported() {
    let mut bytes = riff_and_fmt(18, 1, 2, 44_100, 16);
    push_u16(&mut bytes, 0);
    bytes.extend_from_slice(b"data");
    push_u32(&mut bytes, 0);

    assert!(matches!(
        parse_header_bytes(&bytes),
        Err(FormatError::UnsupportedHeader {
            subchunk1_size: 18,
            audio_format: 1,
            extra_param_size: None,
        })
    ));
}

#[test]
fn test_other_codecs_are_unsupported() {
    for (fmt_size, audio_format) in [(16, 3), (18, 6), (16, 0xFFFE), (20, 0x55)] {
        let bytes = riff_and_fmt(fmt_size, audio_format, 1, 8000, 8);
        let err = parse_header_bytes(&bytes).unwrap_err();
        assert!(
            matches!(err, FormatError::UnsupportedHeader { .. }),
            "({fmt_size}, {audio_format:#x}) gave {err:?}"
        );
    }
}

// =========================================================================
// Malformed streams
// =========================================================================

#[test]
fn test_empty_stream() {
    let (offset, reason) = expect_malformed(&[]);
    assert_eq!(offset, 0);
    assert!(reason.contains("RIFF chunk id"));
}

#[test]
fn test_truncated_at_every_field_boundary() {
    let full = pcm_wav(2, 44_100, 16, 8);
    for len in 0..full.len() {
        let err = parse_header_bytes(&full[..len]).unwrap_err();
        assert!(
            matches!(err, FormatError::MalformedHeader { .. }),
            "length {len} gave {err:?}"
        );
    }
}

#[test]
fn test_truncated_extensible_prefix() {
    let full = extensible_prefix(2, 16, 0x3, SUBTYPE_PCM);
    let (offset, reason) = expect_malformed(&full[..50]);
    assert_eq!(offset, 44);
    assert!(reason.contains("sub-format"));
}

#[test]
fn test_truncated_extensible_at_every_length() {
    let mut full = extensible_prefix(2, 16, 0x3, SUBTYPE_PCM);
    full.extend_from_slice(b"LIST");
    push_u32(&mut full, 20);
    full.extend_from_slice(&[0; 20]);
    full.extend_from_slice(b"data");
    push_u32(&mut full, 400);
    assert_eq!(parse_header_bytes(&full).unwrap().header_size(), 96);

    for len in 0..full.len() {
        let (offset, reason) = expect_malformed(&full[..len]);
        match len {
            60..=63 => {
                assert_eq!(offset, 60, "length {len}");
                assert!(reason.contains("chunk id while scanning"), "length {len}: {reason}");
            }
            64..=67 => {
                assert_eq!(offset, 64, "length {len}");
                assert!(reason.contains("chunk size while scanning"), "length {len}: {reason}");
            }
            68..=87 => {
                assert_eq!(offset, len as u64, "length {len}");
                assert!(reason.contains("'LIST' chunk declares 20 bytes"), "length {len}: {reason}");
            }
            88..=91 => {
                assert_eq!(offset, 88, "length {len}");
                assert!(reason.contains("chunk id while scanning"), "length {len}: {reason}");
            }
            92..=95 => {
                assert_eq!(offset, 92, "length {len}");
                assert!(reason.contains("data chunk size"), "length {len}: {reason}");
            }
            _ => assert!(offset <= len as u64, "length {len} reported offset {offset}"),
        }
    }
}

#[test]
fn test_missing_data_chunk() {
    let mut bytes = extensible_prefix(2, 16, 0x3, SUBTYPE_PCM);
    bytes.extend_from_slice(b"LIST");
    push_u32(&mut bytes, 4);
    bytes.extend_from_slice(b"INFO");

    let (offset, reason) = expect_malformed(&bytes);
    assert_eq!(offset, 72);
    assert!(reason.contains("scanning for data chunk"));
}

#[test]
fn test_chunk_size_past_end_of_stream() {
    let mut bytes = extensible_prefix(2, 16, 0x3, SUBTYPE_PCM);
    bytes.extend_from_slice(b"LIST");
    push_u32(&mut bytes, 1000);
    bytes.extend_from_slice(&[0; 10]);

    let (offset, reason) = expect_malformed(&bytes);
    assert_eq!(offset, 78);
    assert!(reason.contains("'LIST' chunk declares 1000 bytes"));
}

#[test]
fn test_zero_sample_rate_rejected() {
    let (offset, reason) = expect_malformed(&pcm_wav(2, 0, 16, 100));
    assert_eq!(offset, 24);
    assert!(reason.contains("sample rate"));
}

#[test]
fn test_zero_channels_rejected() {
    let (offset, reason) = expect_malformed(&pcm_wav(0, 44_100, 16, 100));
    assert_eq!(offset, 22);
    assert!(reason.contains("channel count"));
}

#[test]
fn test_zero_bits_rejected() {
    let (offset, _) = expect_malformed(&pcm_wav(2, 44_100, 0, 100));
    assert_eq!(offset, 34);
}
