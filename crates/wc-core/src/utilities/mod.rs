//! Miscellaneous utilities.

pub mod data_parsers;

pub use data_parsers::{format_iso_date, parse_iso_date};
