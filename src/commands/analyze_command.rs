//! iNES header analysis command
//!
//! Prints the decoded header and where the CHR data sits, without writing
//! anything.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::path_arg;
use crate::extractor;
use crate::ines::errors::InesResult;
use crate::ines::header;
use crate::io::rom_file;
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Command for analyzing an iNES header
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> InesResult<Self> {
        let input_file = path_arg(args, "input", "input file")?;

        Ok(AnalyzeCommand { input_file, logger })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> InesResult<()> {
        info!("Analyzing {}", self.input_file);

        let raw = rom_file::read_image(&self.input_file)?;
        let descriptor = header::decode(&raw)?;

        for line in format_utils::header_summary(&descriptor) {
            println!("{}", line);
        }

        // Validates the CHR bounds too, so a truncated file is reported here
        match extractor::extract(&raw, &descriptor)? {
            Some(region) => {
                println!("{}", format_utils::chr_location(&region));
                for line in format_utils::chr_analysis(&region) {
                    println!("{}", line);
                }
            }
            None => println!("No CHR ROM present (cartridge uses CHR RAM)"),
        }

        self.logger.write_line("Analysis complete")?;
        Ok(())
    }
}
