//! String-dated entry points.
//!
//! Each function parses its ISO date arguments first, so an unparseable date
//! is rejected with `InvalidDate` before any classification happens.

use wc_core::errors::Result;
use wc_core::parse_iso_date;

use crate::calendar::{is_working_day, weight};
use crate::holiday::HolidaySet;
use crate::interval::sum_weights;
use crate::stats::{get_calendar_stats, CalendarStats};
use crate::weight::{DayWeight, WorkingDays};

/// [`weight`] for an ISO date string.
pub fn weight_iso(date: &str, holidays: &HolidaySet) -> Result<DayWeight> {
    Ok(weight(parse_iso_date(date)?, holidays))
}

/// [`is_working_day`] for an ISO date string.
pub fn is_working_day_iso(date: &str, holidays: &HolidaySet) -> Result<bool> {
    Ok(is_working_day(parse_iso_date(date)?, holidays))
}

/// [`sum_weights`] for ISO date strings.
pub fn sum_weights_iso(start: &str, end: &str, holidays: &HolidaySet) -> Result<WorkingDays> {
    let start = parse_iso_date(start)?;
    let end = parse_iso_date(end)?;
    sum_weights(start, end, holidays)
}

/// [`get_calendar_stats`] for an ISO reference date.
pub fn calendar_stats_iso(reference: &str, holidays: &HolidaySet) -> Result<CalendarStats> {
    get_calendar_stats(parse_iso_date(reference)?, holidays)
}
