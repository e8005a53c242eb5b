//! CHR ROM extraction from iNES images

mod chr_extractor;
mod region;

pub use chr_extractor::extract;
pub use region::{ExtractedRegion, PatternTable};
