//! Command-line definition

use clap::{Arg, ArgAction, Command};

/// Input used when no ROM path is given
pub const DEFAULT_INPUT: &str = "trojan_usa.nes";

/// Output used when no destination is given
pub const DEFAULT_OUTPUT: &str = "data/graphics/trojan_chr.bin";

pub const DEFAULT_LOG_FILE: &str = "chrkit.log";

/// Build the clap command for the `chrkit` binary
pub fn build_cli() -> Command {
    Command::new("chrkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract CHR ROM graphics data from iNES cartridge images")
        .arg(
            Arg::new("input")
                .help("Input iNES ROM file")
                .index(1)
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .help("Output file for the raw CHR data")
                .index(2)
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Only print header information, do not extract")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Where to write the log")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let matches = build_cli().try_get_matches_from(["chrkit"]).unwrap();
        assert_eq!(matches.get_one::<String>("input").unwrap(), DEFAULT_INPUT);
        assert_eq!(matches.get_one::<String>("output").unwrap(), DEFAULT_OUTPUT);
        assert!(!matches.get_flag("info"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_positional_paths() {
        let matches = build_cli()
            .try_get_matches_from(["chrkit", "game.nes", "out/chr.bin", "-v"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("input").unwrap(), "game.nes");
        assert_eq!(matches.get_one::<String>("output").unwrap(), "out/chr.bin");
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }
}
