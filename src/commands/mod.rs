//! CLI command implementations
//!
//! Each command reads the ROM through the collaborators in `io` and `utils`
//! and drives the core decoding and extraction.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::info;

use crate::ines::errors::{InesError, InesResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct ChrkitCommandFactory;

impl ChrkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ChrkitCommandFactory
    }
}

impl Default for ChrkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ChrkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> InesResult<Box<dyn Command + 'a>> {
        if args.get_flag("info") {
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}

/// Fetch a path argument, noting when clap fell back to its default
pub(crate) fn path_arg(args: &ArgMatches, id: &str, description: &str) -> InesResult<String> {
    let value = args
        .get_one::<String>(id)
        .ok_or_else(|| InesError::GenericError(format!("Missing {}", description)))?
        .clone();

    if args.value_source(id) == Some(ValueSource::DefaultValue) {
        let notice = default_notice(description, &value);
        info!("{}", notice);
        println!("{}", notice);
    } else {
        info!("{}: {}", description, value);
    }

    Ok(value)
}

/// Console notice for a path that fell back to its default
pub(crate) fn default_notice(description: &str, value: &str) -> String {
    format!("No {} specified, using default: {}", description, value)
}
