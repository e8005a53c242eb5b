//! Extracted CHR region
//!
//! `ExtractedRegion` is a borrowed view into the raw image covering exactly
//! the CHR ROM bytes, together with their file offsets. The tile and pattern
//! table helpers are pure arithmetic over its length.

use crate::ines::constants::chr;

/// CHR ROM bytes located inside a raw image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedRegion<'a> {
    /// File offset of the first CHR byte
    pub start: usize,

    /// File offset immediately after the last CHR byte
    pub end: usize,

    /// `raw[start..end]`
    pub bytes: &'a [u8],
}

/// One 4 KiB pattern table inside the CHR data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable {
    pub index: usize,
    /// First address, relative to the start of CHR
    pub start: usize,
    /// Last address (inclusive)
    pub end: usize,
}

impl<'a> ExtractedRegion<'a> {
    /// Create a region starting at file offset `start`
    pub fn new(start: usize, bytes: &'a [u8]) -> Self {
        ExtractedRegion {
            start,
            end: start + bytes.len(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Paired with `len` for clippy's `len_without_is_empty`; a region returned
    /// by `extract` is never empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of complete 16-byte tiles
    pub fn tile_count(&self) -> usize {
        self.len() / chr::TILE_SIZE
    }

    /// Number of complete 4 KiB pattern tables
    pub fn table_count(&self) -> usize {
        self.len() / chr::PATTERN_TABLE_SIZE
    }

    /// Address ranges of each pattern table
    pub fn pattern_tables(&self) -> Vec<PatternTable> {
        (0..self.table_count())
            .map(|index| {
                let start = index * chr::PATTERN_TABLE_SIZE;
                PatternTable {
                    index,
                    start,
                    end: start + chr::PATTERN_TABLE_SIZE - 1,
                }
            })
            .collect()
    }

    /// Copy the bytes out so they outlive the source buffer
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}
