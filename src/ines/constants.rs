//! iNES format constants
//!
//! Sizes and bit masks of the fixed 16-byte iNES header and the regions
//! that follow it in the file.

/// Header layout constants
pub mod header {
    /// "NES" followed by the MS-DOS end-of-file marker
    pub const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

    /// Size of the fixed header in bytes
    pub const HEADER_SIZE: usize = 16;

    /// PRG ROM is declared in 16 KiB units
    pub const PRG_BANK_SIZE: usize = 16 * 1024;

    /// CHR ROM is declared in 8 KiB units
    pub const CHR_BANK_SIZE: usize = 8 * 1024;

    /// Size of the optional trainer block that precedes PRG ROM
    pub const TRAINER_SIZE: usize = 512;
}

/// Bits of flags 6 (byte 6) and flags 7 (byte 7)
pub mod flags {
    pub const VERTICAL_MIRRORING: u8 = 0x01;
    pub const BATTERY: u8 = 0x02;
    pub const TRAINER: u8 = 0x04;
    /// Mapper nibble; low nibble in flags 6, high nibble in flags 7
    pub const MAPPER_NIBBLE: u8 = 0xF0;
}

/// CHR data geometry
pub mod chr {
    /// One 8x8 tile at 2 bits per pixel
    pub const TILE_SIZE: usize = 16;

    /// One pattern table ($0000 or $1000 in PPU space)
    pub const PATTERN_TABLE_SIZE: usize = 4096;

    pub const TILES_PER_TABLE: usize = PATTERN_TABLE_SIZE / TILE_SIZE;
}
