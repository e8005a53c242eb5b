use byteorder::WriteBytesExt;

use crate::ines::constants::header;

/// Byte at position `i` of the synthetic CHR data
pub fn chr_pattern(i: usize) -> u8 {
    ((i * 7) % 251) as u8 ^ 0x5A
}

/// Creates a 16-byte iNES header
pub fn create_header(prg_units: u8, chr_units: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(header::HEADER_SIZE);

    buffer.extend_from_slice(&header::MAGIC);
    buffer.write_u8(prg_units).unwrap();
    buffer.write_u8(chr_units).unwrap();
    buffer.write_u8(flags6).unwrap();
    buffer.write_u8(flags7).unwrap();
    // Bytes 8-15 are padding
    buffer.extend_from_slice(&[0u8; 8]);

    buffer
}

/// Creates a complete image: header, trainer if flagged, PRG filled with 0xEA,
/// CHR filled with `chr_pattern`
pub fn create_image(prg_units: u8, chr_units: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut buffer = create_header(prg_units, chr_units, flags6, flags7);

    if flags6 & 0x04 != 0 {
        buffer.extend(std::iter::repeat(0xFF).take(header::TRAINER_SIZE));
    }
    buffer.extend(std::iter::repeat(0xEA).take(prg_units as usize * header::PRG_BANK_SIZE));

    let chr_size = chr_units as usize * header::CHR_BANK_SIZE;
    buffer.extend((0..chr_size).map(chr_pattern));

    buffer
}
