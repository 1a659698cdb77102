//! Convert GeoIP2/GeoLite2 block CSVs to other network representations.
//!
//! The first column of a block CSV is a network in CIDR notation. It is
//! replaced by any combination of:
//! - the network in CIDR notation (`network`)
//! - the first and last address as text (`network_start_ip`, `network_last_ip`)
//! - the first and last address as integers (`network_start_integer`, `network_last_integer`)
//! - the first and last address as hex digits (`network_start_hex`, `network_last_hex`)
//!
//! All other columns are copied unchanged.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub use error::{ConvertError, PrefixError, Result};
pub use models::Prefix;
pub use processing::{build_header_transform, build_line_transform, Representation, Representations};

/// Convert the block CSV in `input` to `output` using the representations in `flags`.
///
/// With no representation requested the network column is stripped.
pub fn convert<R: Read, W: Write>(input: R, output: W, flags: Representations) -> Result<u64> {
    let header = build_header_transform(flags);
    let line = build_line_transform(flags);
    log::debug!("Representations {:?}", header.groups());
    output::convert_stream(input, output, &header, &line)
}

/// Convert the block CSV file `input_file` into `output_file`.
///
/// The output file is created or truncated, and synced to disk once the
/// conversion has finished. Both files are closed on every path.
pub fn convert_file(
    input_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
    flags: Representations,
) -> Result<u64> {
    let input_file = input_file.as_ref();
    let output_file = output_file.as_ref();
    log::info!(
        "#Start convert_file() {} -> {}",
        input_file.display(),
        output_file.display()
    );

    let in_file = File::open(input_file).map_err(|source| ConvertError::OpenInput {
        path: input_file.display().to_string(),
        source,
    })?;
    let out_file = File::create(output_file).map_err(|source| ConvertError::CreateOutput {
        path: output_file.display().to_string(),
        source,
    })?;

    let mut out = BufWriter::new(out_file);
    let rows = convert(BufReader::new(in_file), &mut out, flags).map_err(|e| {
        log::error!("Conversion of {} failed: {e}", input_file.display());
        e
    })?;

    let sync_err = |source| ConvertError::Sync {
        path: output_file.display().to_string(),
        source,
    };
    let out_file = out.into_inner().map_err(|e| sync_err(e.into_error()))?;
    out_file.sync_all().map_err(sync_err)?;

    log::info!("# Converted {rows} rows into {}", output_file.display());
    Ok(rows)
}
