//! Utility modules for common functionality

pub mod format_utils;
pub mod logger;
pub mod write_utils;
