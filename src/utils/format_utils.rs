//! Report formatting utilities
//!
//! Builds the human-readable lines printed by the commands. Everything here
//! returns strings so the commands decide where they go.

use crate::extractor::ExtractedRegion;
use crate::ines::constants::chr;
use crate::ines::HeaderDescriptor;

/// Width of the separator rules
pub const RULE_WIDTH: usize = 60;

/// A separator line made of `ch`
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

/// Format `n` with comma thousands separators, e.g. `32,768`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn size_line(label: &str, bytes: usize) -> String {
    format!("{:<14}{} bytes ({} KB)", label, group_thousands(bytes), bytes / 1024)
}

/// Header summary block
pub fn header_summary(descriptor: &HeaderDescriptor) -> Vec<String> {
    vec![
        rule('='),
        "NES ROM Information".to_string(),
        rule('='),
        size_line("PRG ROM Size:", descriptor.prg_region_size),
        size_line("CHR ROM Size:", descriptor.gfx_region_size),
        format!("{:<14}{}", "Mapper:", descriptor.mapper_id),
        format!("{:<14}{}", "Mirroring:", descriptor.mirroring),
        format!("{:<14}{}", "Battery RAM:", yes_no(descriptor.has_battery_backup)),
        format!("{:<14}{}", "Trainer:", yes_no(descriptor.has_prefix_block)),
        rule('='),
    ]
}

/// Where the CHR data was found
pub fn extraction_summary(region: &ExtractedRegion) -> Vec<String> {
    vec![
        format!("Extracted {} bytes of CHR ROM data", group_thousands(region.len())),
        format!("CHR ROM offset in file: 0x{:04X}", region.start),
    ]
}

/// File range occupied by the CHR data, last address inclusive
pub fn chr_location(region: &ExtractedRegion) -> String {
    format!(
        "CHR ROM located at 0x{:04X} - 0x{:04X}",
        region.start,
        region.end.saturating_sub(1)
    )
}

/// Tile count and pattern table layout of the CHR data
pub fn chr_analysis(region: &ExtractedRegion) -> Vec<String> {
    let mut lines = vec![
        rule('='),
        "CHR ROM Analysis".to_string(),
        rule('='),
        format!("{:<18}{}", "Total Tiles:", region.tile_count()),
        format!("{:<18}{}", "Pattern Tables:", region.table_count()),
        format!("{:<18}{}", "Tiles per table:", chr::TILES_PER_TABLE),
        String::new(),
        "Pattern Table Layout:".to_string(),
    ];

    for table in region.pattern_tables() {
        lines.push(format!(
            "  Pattern Table {}: $0x{:04X} - $0x{:04X}",
            table.index, table.start, table.end
        ));
    }
    lines.push(rule('='));

    lines
}
