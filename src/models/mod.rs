//! Domain models for the converter.
//!
//! - [`Prefix`] - IPv4 or IPv6 network in CIDR notation
//! - address formatting helpers used to build the output columns

mod prefix;

// Re-export public types
pub use prefix::{
    addr_to_u128, get_cidr_mask, last_addr_v4, last_addr_v6, to_decimal, to_hex, to_text, Prefix,
    MAX_LENGTH_V4, MAX_LENGTH_V6,
};
