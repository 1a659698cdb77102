//! Row transformation logic.
//!
//! - [`columns`] - Column generators for each network representation and the
//!   header/line transforms built from them

mod columns;

// Re-export public types and functions
pub use columns::{
    build_header_transform, build_line_transform, HeaderTransform, LineTransform, Representation,
    Representations,
};
