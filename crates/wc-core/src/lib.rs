//! # wc-core
//!
//! Core error definitions and date parsing helpers for workcal.
//!
//! This crate provides the foundational pieces shared by the other crates in
//! the workspace: the error taxonomy, the `ensure!` / `fail!` macros, and the
//! ISO date boundary at which unparseable input is rejected.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use utilities::{format_iso_date, parse_iso_date};
