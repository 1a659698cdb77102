//! CSV conversion loop.

use crate::error::{ConvertError, Result};
use crate::models::Prefix;
use crate::processing::{HeaderTransform, LineTransform};
use ::csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{Read, Write};

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Convert a block CSV from `input` to `output`, one record at a time.
///
/// The first record is the header; column 0 of every record is the network.
/// The network column is replaced by the columns of `header` / `line` and the
/// remaining columns are copied as they are.
///
/// # Returns
/// * `Ok(rows)` - Number of data rows written
/// * `Err` - On the first read, parse or write failure. Rows written before
///   the failure stay in `output`.
pub fn convert_stream<R: Read, W: Write>(
    input: R,
    output: W,
    header: &HeaderTransform,
    line: &LineTransform,
) -> Result<u64> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(input);
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);
    let mut record = StringRecord::new();

    if !reader
        .read_record(&mut record)
        .map_err(ConvertError::ReadHeader)?
    {
        return Err(ConvertError::MissingHeader);
    }
    if record.is_empty() {
        return Err(ConvertError::EmptyRecord {
            line: line_of(&record),
        });
    }

    let trailing: Vec<&str> = record.iter().skip(1).collect();
    let new_header = header.apply(&trailing);
    log::debug!("header {:?} -> {:?}", record.get(0), new_header);
    writer
        .write_record(&new_header)
        .map_err(ConvertError::WriteHeader)?;

    let mut rows = 0u64;
    while reader.read_record(&mut record).map_err(ConvertError::Read)? {
        let line_no = line_of(&record);
        let network = record
            .get(0)
            .ok_or(ConvertError::EmptyRecord { line: line_no })?;
        let prefix = Prefix::new(network).map_err(|source| ConvertError::ParseNetwork {
            network: network.to_string(),
            line: line_no,
            source,
        })?;

        let trailing: Vec<&str> = record.iter().skip(1).collect();
        let new_line = line.apply(&prefix, &trailing);
        log::trace!("line {line_no}: {prefix} -> {}", new_line.len());
        writer.write_record(&new_line).map_err(ConvertError::Write)?;
        rows += 1;
    }

    writer.flush().map_err(ConvertError::Flush)?;
    Ok(rows)
}
