//! # workcal
//!
//! Working-day calendar engine for dashboard pace indicators.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workcal = "0.1"
//! ```
//!
//! ```rust
//! use workcal::prelude::*;
//!
//! let config = CalendarConfig::from_json_str(r#"{
//!     "holidays": [
//!         {"date": "2025-08-15", "type": "PUBLIC_HOLIDAY", "name": "Independence Day"}
//!     ]
//! }"#).unwrap();
//! let calendar = config.calendar().unwrap();
//! let convention = config.convention().unwrap();
//!
//! let reference = parse_iso_date("2025-08-18").unwrap();
//! let stats = calendar_stats(reference, &calendar, &convention).unwrap();
//! assert_eq!(stats.month.to_string(), "13 / 23");
//! assert_eq!(convention.fiscal_year_label(reference), "FY 2025-26");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and ISO date parsing.
pub use wc_core as core;

/// Holiday model, classifier, fiscal windows, and statistics.
pub use wc_time as time;

/// The items most applications need.
pub mod prelude {
    pub use wc_core::{parse_iso_date, Error, Result};
    pub use wc_time::{
        calendar_stats, get_calendar_stats, is_working_day, month_view, resolve_windows,
        sum_weights, weight, BankCalendar, CalendarConfig, CalendarStats, DateWindow, DayClass,
        DayType, DayWeight, FiscalConvention, Holiday, HolidaySet, QuarterBasis, SaturdayRule,
        WindowStats, WorkingDayCalendar, WorkingDays,
    };
}
