//! Closed date ranges and the interval aggregator.
//!
//! Aggregation is range-agnostic: the same summation serves month, quarter
//! and fiscal-year windows.

use chrono::NaiveDate;
use serde::Serialize;
use wc_core::errors::{Error, Result};
use wc_core::format_iso_date;

use crate::calendar::{classify, WorkingDayCalendar};
use crate::holiday::HolidaySet;
use crate::weight::WorkingDays;

/// Every date of the closed range `[start, end]`, ascending.
///
/// Fails with [`Error::InvalidRange`] if `start > end`.
pub fn days_inclusive(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<impl Iterator<Item = NaiveDate>> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(start.iter_days().take_while(move |d| *d <= end))
}

/// Sum of working-day weights over `[start, end]` under the default
/// Saturday rule.
///
/// `sum_weights(d, d, h)` equals the weight of `d`.
pub fn sum_weights(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> Result<WorkingDays> {
    Ok(days_inclusive(start, end)?
        .map(|d| classify(d, holidays).weight())
        .sum())
}

/// A closed window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Return `true` if `date` lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days in the window.
    pub fn days(&self) -> u32 {
        // start <= end, so the difference is non-negative.
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Iterate over every date in the window.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Working days across the whole window.
    pub fn total<C: WorkingDayCalendar + ?Sized>(&self, calendar: &C) -> Result<WorkingDays> {
        calendar.sum_weights(self.start, self.end)
    }

    /// Working days from the window start up to and including `date`.
    ///
    /// `date` must not precede the window start.
    pub fn elapsed<C: WorkingDayCalendar + ?Sized>(
        &self,
        calendar: &C,
        date: NaiveDate,
    ) -> Result<WorkingDays> {
        calendar.sum_weights(self.start, date)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} .. {}", format_iso_date(self.start), format_iso_date(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_type::DayType;
    use crate::holiday::Holiday;
    use crate::calendar::weight;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        let days: Vec<_> = days_inclusive(date(2025, 8, 30), date(2025, 9, 2))
            .unwrap()
            .collect();
        assert_eq!(
            days,
            vec![
                date(2025, 8, 30),
                date(2025, 8, 31),
                date(2025, 9, 1),
                date(2025, 9, 2)
            ]
        );
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = sum_weights(date(2025, 8, 18), date(2025, 8, 1), &HolidaySet::new()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRange {
                start: date(2025, 8, 18),
                end: date(2025, 8, 1)
            }
        );
        assert!(DateWindow::new(date(2025, 2, 1), date(2025, 1, 31)).is_err());
    }

    #[test]
    fn single_day_equals_weight() {
        let hols = HolidaySet::from_records(vec![Holiday::new(
            date(2025, 8, 14),
            DayType::HalfDay,
            "Half",
        )]);
        for d in [date(2025, 8, 14), date(2025, 8, 17), date(2025, 8, 9), date(2025, 8, 12)] {
            assert_eq!(
                sum_weights(d, d, &hols).unwrap(),
                WorkingDays::from(weight(d, &hols))
            );
        }
    }

    #[test]
    fn full_week_with_half_day() {
        // Mon 2025-08-11 .. Sun 2025-08-17; Sat 16th is the 3rd Saturday.
        let hols = HolidaySet::from_records(vec![Holiday::new(
            date(2025, 8, 14),
            DayType::HalfDay,
            "Half",
        )]);
        let total = sum_weights(date(2025, 8, 11), date(2025, 8, 17), &hols).unwrap();
        assert_eq!(total, WorkingDays::from_half_days(11));
        assert_eq!(total.value(), 5.5);
    }

    #[test]
    fn window_accessors() {
        let w = DateWindow::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        assert_eq!(w.days(), 29);
        assert!(w.contains(date(2024, 2, 29)));
        assert!(!w.contains(date(2024, 3, 1)));
        assert_eq!(w.iter().count(), 29);
        assert_eq!(w.to_string(), "2024-02-01 .. 2024-02-29");
    }
}
