//! iNES container parsing
//!
//! Decodes the fixed 16-byte header of an iNES cartridge image into a
//! descriptor of the file layout.

pub mod constants;
pub mod errors;
pub mod header;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{HeaderFault, InesError, InesResult};
pub use header::{decode, HeaderDescriptor, Mirroring};
