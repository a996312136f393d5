//! Error types for workcal.
//!
//! Every failure in the engine is a synchronous, typed rejection of a single
//! call, collected into one `thiserror`-derived enum.  The `ensure!`,
//! `ensure_post!`, and `fail!` macros return early with the matching variant.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout workcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A supplied date could not be parsed or normalised to a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A closed interval whose start lies after its end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// First day of the rejected interval.
        start: NaiveDate,
        /// Last day of the rejected interval.
        end: NaiveDate,
    },

    /// More than one holiday record for the same calendar date.
    #[error("duplicate holiday record for {date}")]
    DuplicateHoliday {
        /// The date carrying more than one record.
        date: NaiveDate,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),
}

/// Shorthand `Result` type used throughout workcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wc_core::{ensure, errors::Error};
/// fn positive(x: i64) -> wc_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wc_core::{ensure_post, errors::Error};
/// fn halve(x: u32) -> wc_core::errors::Result<u32> {
///     let result = x / 2;
///     ensure_post!(result <= x, "result {result} exceeds input {x}");
///     Ok(result)
/// }
/// assert!(halve(7).is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use wc_core::{fail, errors::Error};
/// fn always_err() -> wc_core::errors::Result<()> {
///     fail!("month {} out of range", 13);
/// }
/// assert!(matches!(always_err(), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
