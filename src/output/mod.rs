//! Streaming CSV conversion.
//!
//! - [`csv`] - Reads the block CSV record by record and writes the converted rows

mod csv;

pub use self::csv::convert_stream;
