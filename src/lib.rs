pub mod cli;
pub mod commands;
pub mod extractor;
pub mod ines;
pub mod io;
pub mod utils;

pub use extractor::{extract, ExtractedRegion, PatternTable};
pub use ines::{decode, HeaderDescriptor, HeaderFault, InesError, InesResult, Mirroring};
