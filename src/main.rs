use log::{error, LevelFilter};
use std::process;

use chrkit::cli::{self, DEFAULT_INPUT, DEFAULT_OUTPUT};
use chrkit::commands::{ChrkitCommandFactory, CommandFactory};
use chrkit::ines::InesError;
use chrkit::utils::logger::Logger;

fn print_usage() {
    eprintln!("\nUsage: chrkit [rom_file] [output_file]");
    eprintln!("\nExample:");
    eprintln!("  chrkit {} {}", DEFAULT_INPUT, DEFAULT_OUTPUT);
}

fn main() {
    let matches = cli::build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or(cli::DEFAULT_LOG_FILE);

    let logger = match Logger::init_global_logger(log_file, level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    };

    println!("NES CHR ROM Extractor");
    println!("{}", "-".repeat(60));

    let factory = ChrkitCommandFactory::new();
    let result = factory
        .create_command(&matches, logger)
        .and_then(|command| command.execute());

    if let Err(e) = result {
        error!("Command execution error: {}", e);
        eprintln!("\nError: {}", e);
        if let InesError::InputNotFound(_) = e {
            print_usage();
        }
        process::exit(1);
    }
}
