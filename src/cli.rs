//! Command-line argument definitions.

use crate::processing::Representations;
use clap::Parser;
use std::path::PathBuf;

/// Convert MaxMind GeoIP2 and GeoLite2 block CSVs to other network
/// representations such as IP ranges or integer ranges.
#[derive(Parser, Debug, Default)]
#[command(name = "geoip-csv-converter")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to the block CSV file to use as input (REQUIRED)
    #[arg(long = "block-file", value_name = "FILE", env = "GEOIP_CSV_BLOCK_FILE")]
    pub block_file: Option<PathBuf>,

    /// The path to the output CSV (REQUIRED)
    #[arg(long = "output-file", value_name = "FILE", env = "GEOIP_CSV_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Include the network in CIDR format
    #[arg(long = "include-cidr", env = "GEOIP_CSV_INCLUDE_CIDR")]
    pub include_cidr: bool,

    /// Include the IP range of the network in string format
    #[arg(long = "include-range", env = "GEOIP_CSV_INCLUDE_RANGE")]
    pub include_range: bool,

    /// Include the IP range of the network in integer format
    #[arg(long = "include-integer-range", env = "GEOIP_CSV_INCLUDE_INTEGER_RANGE")]
    pub include_integer_range: bool,

    /// Include the IP range of the network in hexadecimal format
    #[arg(long = "include-hex-range", env = "GEOIP_CSV_INCLUDE_HEX_RANGE")]
    pub include_hex_range: bool,

    /// Enable verbose output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn representations(&self) -> Representations {
        Representations {
            cidr: self.include_cidr,
            range: self.include_range,
            integer_range: self.include_integer_range,
            hex_range: self.include_hex_range,
        }
    }

    /// Every problem with the arguments, empty when they are usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.block_file.is_none() {
            errors.push("--block-file is required".to_string());
        }
        if self.output_file.is_none() {
            errors.push("--output-file is required".to_string());
        }
        if let (Some(input), Some(output)) = (&self.block_file, &self.output_file) {
            if input == output {
                errors.push(
                    "Your output file must be different than your block file (input file)."
                        .to_string(),
                );
            }
        }
        if self.representations().is_empty() {
            errors.push(
                "--include-cidr, --include-range, --include-integer-range, or --include-hex-range is required"
                    .to_string(),
            );
        }

        errors
    }
}
