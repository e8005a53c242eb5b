//! CHR extraction command
//!
//! Reads an iNES image, extracts its CHR ROM and writes it verbatim to the
//! output path, printing a summary of the header and the CHR layout.

use clap::ArgMatches;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::commands::path_arg;
use crate::extractor;
use crate::ines::errors::{InesError, InesResult};
use crate::ines::header;
use crate::io::rom_file;
use crate::utils::format_utils::{self, group_thousands};
use crate::utils::logger::Logger;
use crate::utils::write_utils;

/// Command for extracting CHR ROM data
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: PathBuf,
    /// Logger for recording operations
    logger: &'a Logger,
}

/// What an extraction run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// CHR data written to the output path
    Written { offset: usize, size: usize },
    /// Image uses CHR RAM; nothing was written
    ChrRam,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> InesResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = path_arg(args, "input", "input file")?;
        let output_file = PathBuf::from(path_arg(args, "output", "output file")?);

        Ok(ExtractCommand {
            input_file,
            output_file,
            logger,
        })
    }

    /// Output path this command writes to
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Run the extraction and report what happened
    pub fn run(&self) -> InesResult<ExtractOutcome> {
        if !Path::new(&self.input_file).exists() {
            return Err(InesError::InputNotFound(self.input_file.clone()));
        }

        if let Some(dir) = write_utils::ensure_parent_dir(&self.output_file)? {
            println!("Created directory: {}", dir.display());
        }

        let raw = rom_file::read_image(&self.input_file)?;
        let descriptor = header::decode(&raw)?;

        println!();
        for line in format_utils::header_summary(&descriptor) {
            println!("{}", line);
        }

        let Some(region) = extractor::extract(&raw, &descriptor)? else {
            warn!("ROM uses CHR RAM, not CHR ROM");
            println!("Warning: This ROM uses CHR RAM, not CHR ROM (no graphics to extract)");
            return Ok(ExtractOutcome::ChrRam);
        };

        println!();
        for line in format_utils::extraction_summary(&region) {
            println!("{}", line);
        }

        write_utils::write_blob(&self.output_file, region.bytes)?;
        println!();
        println!("CHR ROM saved to: {}", self.output_file.display());
        println!("File size: {} bytes", group_thousands(region.len()));

        println!();
        for line in format_utils::chr_analysis(&region) {
            println!("{}", line);
        }

        Ok(ExtractOutcome::Written {
            offset: region.start,
            size: region.len(),
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> InesResult<()> {
        info!("Extracting CHR ROM from {} to {}", self.input_file, self.output_file.display());

        match self.run() {
            Ok(outcome) => {
                info!("Extraction finished: {:?}", outcome);
                println!();
                println!("Extraction complete!");
                self.logger.write_line("Extraction complete")?;
                Ok(())
            }
            Err(e) => {
                error!("Extraction failed: {}", e);
                Err(e)
            }
        }
    }
}
