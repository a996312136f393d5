//! Elapsed and total working days for the windows around a reference date.
//!
//! These numbers feed the dashboard pace indicators ("13 of 22 working days
//! elapsed this month").

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use wc_core::ensure_post;
use wc_core::errors::Result;

use crate::calendar::WorkingDayCalendar;
use crate::fiscal::FiscalConvention;
use crate::holiday::HolidaySet;
use crate::interval::DateWindow;
use crate::weight::WorkingDays;

/// Elapsed and total working days in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowStats {
    /// Working days from the window start up to and including the reference date.
    pub elapsed: WorkingDays,
    /// Working days in the whole window.
    pub total: WorkingDays,
}

impl WindowStats {
    /// Compute the stats of `window` as seen from `reference`.
    pub fn compute<C: WorkingDayCalendar + ?Sized>(
        window: &DateWindow,
        calendar: &C,
        reference: NaiveDate,
    ) -> Result<Self> {
        let elapsed = window.elapsed(calendar, reference)?;
        let total = window.total(calendar)?;
        ensure_post!(
            elapsed <= total,
            "elapsed {elapsed} exceeds total {total} in {window}"
        );
        Ok(Self { elapsed, total })
    }

    /// Working days still ahead in the window.
    pub fn remaining(&self) -> WorkingDays {
        self.total.saturating_sub(self.elapsed)
    }

    /// Fraction of the window's working days already elapsed, or `None` for
    /// a window without working days.
    pub fn pace(&self) -> Option<f64> {
        if self.total == WorkingDays::ZERO {
            None
        } else {
            Some(self.elapsed.value() / self.total.value())
        }
    }
}

impl std::fmt::Display for WindowStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.elapsed, self.total)
    }
}

/// Working-day stats for the fiscal year, quarter and month around a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarStats {
    /// Enclosing fiscal year.
    pub fy: WindowStats,
    /// Enclosing quarter.
    pub quarter: WindowStats,
    /// Enclosing calendar month.
    pub month: WindowStats,
}

/// Stats around `reference` for any calendar and fiscal convention.
pub fn calendar_stats<C: WorkingDayCalendar + ?Sized>(
    reference: NaiveDate,
    calendar: &C,
    convention: &FiscalConvention,
) -> Result<CalendarStats> {
    let windows = convention.resolve(reference)?;
    let stats = CalendarStats {
        fy: WindowStats::compute(&windows.fiscal_year, calendar, reference)?,
        quarter: WindowStats::compute(&windows.quarter, calendar, reference)?,
        month: WindowStats::compute(&windows.month, calendar, reference)?,
    };
    debug!(
        calendar = calendar.name(),
        %reference,
        fy = %stats.fy,
        quarter = %stats.quarter,
        month = %stats.month,
        "computed calendar stats"
    );
    Ok(stats)
}

/// Stats around `reference` under the default Saturday rule and the April
/// fiscal year with calendar quarters.
pub fn get_calendar_stats(reference: NaiveDate, holidays: &HolidaySet) -> Result<CalendarStats> {
    calendar_stats(reference, holidays, &FiscalConvention::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_type::DayType;
    use crate::holiday::Holiday;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn august_month_elapsed() {
        let hols = HolidaySet::from_records(vec![Holiday::new(
            date(2025, 8, 15),
            DayType::PublicHoliday,
            "Independence Day",
        )]);
        let stats = get_calendar_stats(date(2025, 8, 18), &hols).unwrap();
        assert_eq!(stats.month.elapsed, WorkingDays::from_days(13));
        // 31 days - 5 Sundays - 2 rest Saturdays - 1 holiday
        assert_eq!(stats.month.total, WorkingDays::from_days(23));
        assert_eq!(stats.month.remaining(), WorkingDays::from_days(10));
        assert_eq!(stats.month.to_string(), "13 / 23");
    }

    #[test]
    fn pace_ratio() {
        let s = WindowStats {
            elapsed: WorkingDays::from_half_days(27),
            total: WorkingDays::from_days(18),
        };
        assert_relative_eq!(s.pace().unwrap(), 0.75);
        let empty = WindowStats {
            elapsed: WorkingDays::ZERO,
            total: WorkingDays::ZERO,
        };
        assert!(empty.pace().is_none());
    }

    #[test]
    fn first_day_of_fiscal_year() {
        // 2025-04-01 is a Tuesday.
        let stats = get_calendar_stats(date(2025, 4, 1), &HolidaySet::new()).unwrap();
        assert_eq!(stats.fy.elapsed, WorkingDays::from_days(1));
        assert_eq!(stats.quarter.elapsed, WorkingDays::from_days(1));
        assert_eq!(stats.month.elapsed, WorkingDays::from_days(1));
    }

    #[test]
    fn serializes_to_dashboard_shape() {
        let stats = get_calendar_stats(date(2025, 8, 18), &HolidaySet::new()).unwrap();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["month"]["elapsed"], 14);
        assert!(json["fy"]["total"].is_number());
        assert!(json["quarter"]["elapsed"].is_number());
    }
}
