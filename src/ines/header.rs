//! iNES header decoding
//!
//! The header occupies the first 16 bytes of the file:
//!
//! | Offset | Meaning                                   |
//! |--------|-------------------------------------------|
//! | 0-3    | `4E 45 53 1A` ("NES" + EOF)               |
//! | 4      | PRG ROM size in 16 KiB units              |
//! | 5      | CHR ROM size in 8 KiB units (0 = CHR RAM) |
//! | 6      | Flags 6: mirroring, battery, trainer, mapper low nibble |
//! | 7      | Flags 7: mapper high nibble               |
//! | 8-15   | Not interpreted                           |

use byteorder::ReadBytesExt;
use log::debug;
use std::fmt;
use std::io::{Cursor, Read};

use crate::ines::constants::{flags, header};
use crate::ines::errors::{HeaderFault, InesResult};

/// Nametable mirroring declared by the cartridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

impl Mirroring {
    fn from_flags6(flags6: u8) -> Self {
        if flags6 & flags::VERTICAL_MIRRORING != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    /// Returns a string representation of this mirroring mode
    pub fn name(&self) -> &'static str {
        match self {
            Mirroring::Horizontal => "Horizontal",
            Mirroring::Vertical => "Vertical",
        }
    }
}

impl fmt::Display for Mirroring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout of an iNES image as declared by its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDescriptor {
    /// PRG ROM size in bytes (multiple of 16384)
    pub prg_region_size: usize,
    /// CHR ROM size in bytes (multiple of 8192); zero means the cartridge uses CHR RAM
    pub gfx_region_size: usize,
    /// Mapper number, opaque to this crate
    pub mapper_id: u8,
    pub mirroring: Mirroring,
    pub has_battery_backup: bool,
    /// A 512-byte trainer sits between the header and PRG ROM
    pub has_prefix_block: bool,
}

impl HeaderDescriptor {
    /// File offset at which CHR ROM begins
    pub fn gfx_offset(&self) -> usize {
        let trainer = if self.has_prefix_block {
            header::TRAINER_SIZE
        } else {
            0
        };
        header::HEADER_SIZE + trainer + self.prg_region_size
    }

    /// Whether the image carries CHR ROM rather than relying on CHR RAM
    pub fn has_gfx_region(&self) -> bool {
        self.gfx_region_size != 0
    }
}

/// Decode the header at the start of `raw`
///
/// Only bytes `[0, 16)` are inspected; anything after the header has no
/// influence on the result.
///
/// # Errors
/// `MalformedHeader` when `raw` is shorter than 16 bytes or does not start
/// with the NES signature.
pub fn decode(raw: &[u8]) -> InesResult<HeaderDescriptor> {
    if raw.len() < header::HEADER_SIZE {
        return Err(HeaderFault::TooShort(raw.len()).into());
    }

    let mut reader = Cursor::new(&raw[..header::HEADER_SIZE]);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != header::MAGIC {
        return Err(HeaderFault::BadMagic(magic).into());
    }

    let prg_units = reader.read_u8()?;
    let chr_units = reader.read_u8()?;
    let flags6 = reader.read_u8()?;
    let flags7 = reader.read_u8()?;
    debug!(
        "Header bytes: prg={} chr={} flags6={:#04x} flags7={:#04x}",
        prg_units, chr_units, flags6, flags7
    );

    let descriptor = HeaderDescriptor {
        prg_region_size: prg_units as usize * header::PRG_BANK_SIZE,
        gfx_region_size: chr_units as usize * header::CHR_BANK_SIZE,
        mapper_id: (flags7 & flags::MAPPER_NIBBLE) | (flags6 >> 4),
        mirroring: Mirroring::from_flags6(flags6),
        has_battery_backup: flags6 & flags::BATTERY != 0,
        has_prefix_block: flags6 & flags::TRAINER != 0,
    };
    debug!("Decoded header: {:?}", descriptor);

    Ok(descriptor)
}
