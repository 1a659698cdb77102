//! Error types for geoip-csv-converter.

use thiserror::Error;

/// Errors raised while parsing CIDR text into a [`crate::models::Prefix`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// No `/` separating address and length
    #[error("no '/' in {0:?}")]
    MissingSlash(String),

    /// Address part is neither IPv4 nor IPv6
    #[error("invalid IP address {0:?}")]
    InvalidAddress(String),

    /// Length part is not a plain decimal number
    #[error("bad bits after slash: {0:?}")]
    InvalidLength(String),

    /// Length is wider than the address family
    #[error("prefix length {len} out of range (max {max})")]
    LengthTooLong { len: u8, max: u8 },
}

/// Main error type for a conversion. Every variant aborts the conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("opening input file ({path}): {source}")]
    OpenInput {
        path: String,
        source: std::io::Error,
    },

    #[error("creating output file ({path}): {source}")]
    CreateOutput {
        path: String,
        source: std::io::Error,
    },

    #[error("syncing file ({path}): {source}")]
    Sync {
        path: String,
        source: std::io::Error,
    },

    #[error("reading CSV header: {0}")]
    ReadHeader(#[source] csv::Error),

    #[error("reading CSV header: missing header row")]
    MissingHeader,

    #[error("reading CSV: {0}")]
    Read(#[source] csv::Error),

    /// Column 0 of a data row is not a network prefix
    #[error("parsing network ({network}) on line {line}: {source}")]
    ParseNetwork {
        network: String,
        line: u64,
        source: PrefixError,
    },

    /// A record without a single field
    #[error("empty record on line {line}")]
    EmptyRecord { line: u64 },

    #[error("writing CSV header: {0}")]
    WriteHeader(#[source] csv::Error),

    #[error("writing CSV: {0}")]
    Write(#[source] csv::Error),

    #[error("flushing CSV: {0}")]
    Flush(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
