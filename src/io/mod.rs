//! I/O utilities for file handling

pub mod rom_file;
