//! Custom error types for iNES processing

use std::fmt;
use std::io;

/// Reason a header was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    /// Input shorter than the fixed header (actual length)
    TooShort(usize),
    /// First four bytes are not "NES\x1A" (bytes found)
    BadMagic([u8; 4]),
}

/// iNES-specific error types
#[derive(Debug)]
pub enum InesError {
    /// I/O error
    IoError(io::Error),
    /// Input file does not exist
    InputNotFound(String),
    /// Header too short or missing the NES signature
    MalformedHeader(HeaderFault),
    /// CHR region declared by the header runs past the end of the file
    TruncatedImage {
        start: usize,
        end: usize,
        actual: usize,
    },
    /// Generic error with message
    GenericError(String),
}

impl InesError {
    /// Whether this error came from header validation
    pub fn is_malformed_header(&self) -> bool {
        matches!(self, InesError::MalformedHeader(_))
    }

    /// Whether this error came from region bounds validation
    pub fn is_truncated_image(&self) -> bool {
        matches!(self, InesError::TruncatedImage { .. })
    }
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderFault::TooShort(len) => {
                write!(f, "ROM file too small to contain iNES header ({} bytes)", len)
            }
            HeaderFault::BadMagic(found) => write!(
                f,
                "Not a valid iNES ROM file (missing NES signature, found {:02X} {:02X} {:02X} {:02X})",
                found[0], found[1], found[2], found[3]
            ),
        }
    }
}

impl fmt::Display for InesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InesError::IoError(e) => write!(f, "I/O error: {}", e),
            InesError::InputNotFound(path) => write!(f, "ROM file '{}' not found", path),
            InesError::MalformedHeader(fault) => write!(f, "{}", fault),
            InesError::TruncatedImage { start, end, actual } => write!(
                f,
                "ROM file truncated or invalid: CHR ROM spans 0x{:X}..0x{:X} but file is {} bytes",
                start, end, actual
            ),
            InesError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for InesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InesError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InesError {
    fn from(error: io::Error) -> Self {
        InesError::IoError(error)
    }
}

impl From<HeaderFault> for InesError {
    fn from(fault: HeaderFault) -> Self {
        InesError::MalformedHeader(fault)
    }
}

/// Result type for iNES operations
pub type InesResult<T> = Result<T, InesError>;
