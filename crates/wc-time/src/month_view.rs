//! Per-day breakdown of one calendar month for the dashboard grid.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use wc_core::errors::{Error, Result};

use crate::calendar::{DayClass, WorkingDayCalendar};
use crate::fiscal::span_months;
use crate::weight::{DayWeight, WorkingDays};

/// One day of a [`MonthView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// The date.
    pub date: NaiveDate,
    /// Why the date has its weight.
    #[serde(skip)]
    pub class: DayClass,
    /// Working-day weight.
    pub weight: DayWeight,
    /// Badge text for the cell.
    pub label: String,
    /// Registry name of the holiday on this date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

/// Every day of a month with its classification and the month's total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    /// Calendar year.
    pub year: i32,
    /// Month (1–12).
    pub month: u32,
    /// One cell per day, in date order.
    pub days: Vec<DayCell>,
    /// Working days in the month.
    pub total: WorkingDays,
}

impl MonthView {
    /// Empty cells before the 1st in a Sunday-first week grid.
    pub fn leading_blanks(&self) -> u32 {
        self.days
            .first()
            .map_or(0, |cell| cell.date.weekday().num_days_from_sunday())
    }

    /// Cells whose weight is zero.
    pub fn rest_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|c| c.weight == DayWeight::Off)
    }
}

/// Build the month view for `year`-`month`.
///
/// Weights and holiday names both come from `calendar`.
pub fn month_view<C: WorkingDayCalendar + ?Sized>(
    year: i32,
    month: u32,
    calendar: &C,
) -> Result<MonthView> {
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(Error::InvalidDate(format!("no such month {year}-{month:02}")));
    }
    let window = span_months(year, month, 1)?;

    let days: Vec<DayCell> = window
        .iter()
        .map(|date| {
            let class = calendar.classify(date);
            DayCell {
                date,
                class,
                weight: class.weight(),
                label: class.label(),
                holiday_name: calendar.holiday(date).map(|h| h.name.clone()),
            }
        })
        .collect();
    let total = days.iter().map(|c| c.weight).sum();

    Ok(MonthView {
        year,
        month,
        days,
        total,
    })
}
