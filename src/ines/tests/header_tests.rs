//! Tests for iNES header decoding

extern crate std;

use crate::ines::errors::{HeaderFault, InesError};
use crate::ines::header::{decode, Mirroring};
use crate::ines::tests::test_utils::{create_header, create_image};

#[test]
fn test_decode_basic_header() {
    let header = create_header(2, 1, 0x00, 0x00);
    let descriptor = decode(&header).unwrap();

    std::assert_eq!(descriptor.prg_region_size, 32768);
    std::assert_eq!(descriptor.gfx_region_size, 8192);
    std::assert_eq!(descriptor.mapper_id, 0);
    std::assert_eq!(descriptor.mirroring, Mirroring::Horizontal);
    std::assert!(!descriptor.has_battery_backup);
    std::assert!(!descriptor.has_prefix_block);
    std::assert_eq!(descriptor.gfx_offset(), 32784);
}

#[test]
fn test_decode_trainer_flag() {
    let header = create_header(2, 1, 0x04, 0x00);
    let descriptor = decode(&header).unwrap();

    std::assert!(descriptor.has_prefix_block);
    std::assert_eq!(descriptor.gfx_offset(), 16 + 512 + 32768);
}

#[test]
fn test_decode_flags() {
    // Vertical mirroring + battery, mapper 0x4A split across flags 6 and 7
    let header = create_header(8, 16, 0xA3, 0x40);
    let descriptor = decode(&header).unwrap();

    std::assert_eq!(descriptor.prg_region_size, 8 * 16384);
    std::assert_eq!(descriptor.gfx_region_size, 16 * 8192);
    std::assert_eq!(descriptor.mapper_id, 0x4A);
    std::assert_eq!(descriptor.mirroring, Mirroring::Vertical);
    std::assert!(descriptor.has_battery_backup);
    std::assert!(!descriptor.has_prefix_block);
}

#[test]
fn test_decode_max_sizes() {
    let header = create_header(0xFF, 0xFF, 0xF0, 0xF0);
    let descriptor = decode(&header).unwrap();

    std::assert_eq!(descriptor.prg_region_size, 255 * 16384);
    std::assert_eq!(descriptor.gfx_region_size, 255 * 8192);
    std::assert_eq!(descriptor.mapper_id, 255);
}

#[test]
fn test_zero_chr_is_valid() {
    let descriptor = decode(&create_header(1, 0, 0x00, 0x00)).unwrap();
    std::assert_eq!(descriptor.gfx_region_size, 0);
    std::assert!(!descriptor.has_gfx_region());
}

#[test]
fn test_short_input_rejected() {
    let header = create_header(2, 1, 0, 0);
    for len in 0..16 {
        match decode(&header[..len]) {
            Err(InesError::MalformedHeader(HeaderFault::TooShort(n))) => std::assert_eq!(n, len),
            other => std::panic!("length {}: expected TooShort, got {:?}", len, other),
        }
    }
}

#[test]
fn test_bad_magic_rejected() {
    let header = create_header(2, 1, 0, 0);
    for position in 0..4 {
        let mut corrupted = header.clone();
        corrupted[position] ^= 0x20;
        let err = decode(&corrupted).unwrap_err();
        std::assert!(err.is_malformed_header(), "position {}: {:?}", position, err);
    }

    let err = decode(b"GIF89a\0\0\0\0\0\0\0\0\0\0").unwrap_err();
    std::assert!(std::matches!(
        err,
        InesError::MalformedHeader(HeaderFault::BadMagic([b'G', b'I', b'F', b'8']))
    ));
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let header = create_header(2, 1, 0x05, 0x10);
    let full = create_image(2, 1, 0x05, 0x10);

    let mut padded_header = header.clone();
    padded_header[8..].copy_from_slice(&[0xAB; 8]);
    let mut junk_tail = header.clone();
    junk_tail.extend_from_slice(&[0x00, 0x11, 0x22]);

    let expected = decode(&header).unwrap();
    std::assert_eq!(decode(&full).unwrap(), expected);
    std::assert_eq!(decode(&padded_header).unwrap(), expected);
    std::assert_eq!(decode(&junk_tail).unwrap(), expected);
}

#[test]
fn test_error_messages() {
    let err = decode(&[0x4E, 0x45]).unwrap_err();
    std::assert_eq!(err.to_string(), "ROM file too small to contain iNES header (2 bytes)");

    let err = decode(&[0u8; 16]).unwrap_err();
    std::assert!(err.to_string().starts_with("Not a valid iNES ROM file"));
}
