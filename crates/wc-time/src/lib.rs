//! # wc-time
//!
//! Holiday records, the working-day classifier, interval aggregation, fiscal
//! windows, and the elapsed/total statistics built on them.
//!
//! Every function is a pure computation over its arguments and the
//! caller-supplied holiday snapshot.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wc_time::{get_calendar_stats, DayType, Holiday, HolidaySet, WorkingDays};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 8, d).unwrap();
//! let holidays = HolidaySet::from_records(vec![Holiday::new(
//!     day(15),
//!     DayType::PublicHoliday,
//!     "Independence Day",
//! )]);
//! let stats = get_calendar_stats(day(18), &holidays).unwrap();
//! assert_eq!(stats.month.elapsed, WorkingDays::from_days(13));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkingDayCalendar` trait, day classification, and `BankCalendar`.
pub mod calendar;

/// Calendar configuration (holiday snapshot plus conventions).
pub mod config;

/// `DayType` — category of a holiday-registry record.
pub mod day_type;

/// Fiscal-year, quarter, and month windows.
pub mod fiscal;

/// `Holiday` records and the date-keyed `HolidaySet`.
pub mod holiday;

/// Closed date ranges and the interval aggregator.
pub mod interval;

/// String-dated entry points.
pub mod iso;

/// Per-day breakdown of a month.
pub mod month_view;

/// Elapsed/total working-day statistics.
pub mod stats;

/// `DayWeight` and `WorkingDays`.
pub mod weight;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{
    classify, classify_with, is_working_day, weight, BankCalendar, DayClass, SaturdayRule,
    WorkingDayCalendar,
};
pub use config::CalendarConfig;
pub use day_type::DayType;
pub use fiscal::{resolve_windows, FiscalConvention, FiscalWindows, QuarterBasis};
pub use holiday::{DuplicatePolicy, Holiday, HolidaySet};
pub use interval::{days_inclusive, sum_weights, DateWindow};
pub use month_view::{month_view, DayCell, MonthView};
pub use stats::{calendar_stats, get_calendar_stats, CalendarStats, WindowStats};
pub use weight::{DayWeight, WorkingDays};
