//! CHR ROM extraction
//!
//! Locates the CHR region from a decoded header and validates it against the
//! real length of the image before handing out a view of it.

use log::{debug, info};

use crate::extractor::region::ExtractedRegion;
use crate::ines::errors::{InesError, InesResult};
use crate::ines::header::HeaderDescriptor;

/// Extract the CHR ROM region of `raw`
///
/// Returns `Ok(None)` when the header declares no CHR ROM; the cartridge
/// then uses CHR RAM and there is nothing to extract.
///
/// # Errors
/// `TruncatedImage` when the region declared by `descriptor` extends past
/// the end of `raw`.
pub fn extract<'r>(
    raw: &'r [u8],
    descriptor: &HeaderDescriptor,
) -> InesResult<Option<ExtractedRegion<'r>>> {
    if !descriptor.has_gfx_region() {
        info!("Header declares no CHR ROM, cartridge uses CHR RAM");
        return Ok(None);
    }

    let start = descriptor.gfx_offset();
    let end = start + descriptor.gfx_region_size;
    debug!(
        "CHR region: start={:#X} end={:#X} file length={}",
        start,
        end,
        raw.len()
    );

    if end > raw.len() {
        return Err(InesError::TruncatedImage {
            start,
            end,
            actual: raw.len(),
        });
    }

    Ok(Some(ExtractedRegion::new(start, &raw[start..end])))
}
