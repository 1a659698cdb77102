//! Column generators for the network representations.
//!
//! Each [`Representation`] contributes a fixed group of header names and the
//! matching values for a row. The transforms apply the requested groups in
//! one fixed left-to-right order, ahead of the passthrough columns.

use crate::models::{to_decimal, to_hex, to_text, Prefix};

/// One group of output columns describing the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `network`: the prefix in CIDR notation
    Cidr,
    /// `network_start_ip`, `network_last_ip`
    Range,
    /// `network_start_integer`, `network_last_integer`
    IntegerRange,
    /// `network_start_hex`, `network_last_hex`
    HexRange,
}

impl Representation {
    /// Output order of the groups.
    pub const ORDER: [Representation; 4] = [
        Representation::Cidr,
        Representation::Range,
        Representation::IntegerRange,
        Representation::HexRange,
    ];

    /// Header names contributed by this group.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Representation::Cidr => &["network"],
            Representation::Range => &["network_start_ip", "network_last_ip"],
            Representation::IntegerRange => &["network_start_integer", "network_last_integer"],
            Representation::HexRange => &["network_start_hex", "network_last_hex"],
        }
    }

    /// Values contributed by this group for `prefix`.
    pub fn values(self, prefix: &Prefix) -> Vec<String> {
        let first = prefix.first_address();
        let last = prefix.last_address();
        match self {
            Representation::Cidr => vec![prefix.to_cidr_text()],
            Representation::Range => vec![to_text(first), to_text(last)],
            Representation::IntegerRange => vec![to_decimal(first), to_decimal(last)],
            Representation::HexRange => vec![to_hex(first), to_hex(last)],
        }
    }
}

/// The requested representations, one flag per group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Representations {
    pub cidr: bool,
    pub range: bool,
    pub integer_range: bool,
    pub hex_range: bool,
}

impl Representations {
    pub fn is_requested(&self, representation: Representation) -> bool {
        match representation {
            Representation::Cidr => self.cidr,
            Representation::Range => self.range,
            Representation::IntegerRange => self.integer_range,
            Representation::HexRange => self.hex_range,
        }
    }

    /// True when no group is requested, in which case the network column is dropped.
    pub fn is_empty(&self) -> bool {
        !(self.cidr || self.range || self.integer_range || self.hex_range)
    }

    /// Requested groups in output order.
    pub fn groups(&self) -> Vec<Representation> {
        Representation::ORDER
            .into_iter()
            .filter(|r| self.is_requested(*r))
            .collect()
    }
}

/// Maps the header minus its network column to the output header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTransform {
    groups: Vec<Representation>,
}

impl HeaderTransform {
    pub fn apply<S: AsRef<str>>(&self, trailing: &[S]) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.header().iter().map(|name| name.to_string()))
            .chain(trailing.iter().map(|s| s.as_ref().to_string()))
            .collect()
    }

    pub fn groups(&self) -> &[Representation] {
        &self.groups
    }
}

/// Maps a parsed network plus the rest of its row to the output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTransform {
    groups: Vec<Representation>,
}

impl LineTransform {
    pub fn apply<S: AsRef<str>>(&self, prefix: &Prefix, trailing: &[S]) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.values(prefix))
            .chain(trailing.iter().map(|s| s.as_ref().to_string()))
            .collect()
    }

    pub fn groups(&self) -> &[Representation] {
        &self.groups
    }
}

pub fn build_header_transform(flags: Representations) -> HeaderTransform {
    HeaderTransform {
        groups: flags.groups(),
    }
}

pub fn build_line_transform(flags: Representations) -> LineTransform {
    LineTransform {
        groups: flags.groups(),
    }
}
