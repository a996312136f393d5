//! `WorkingDayCalendar` trait and the bank calendar built on a holiday set.
//!
//! A calendar decides, for each date, how much it counts toward a working-day
//! total.  Rules are applied in a fixed order:
//!
//! 1. Sunday is always a rest day, whatever the registry says.
//! 2. A registry record for the date decides next (override, half day or
//!    closure).
//! 3. Saturdays without a record follow the calendar's [`SaturdayRule`].
//! 4. Any other day is a full working day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use wc_core::errors::Result;

use crate::day_type::DayType;
use crate::holiday::{Holiday, HolidaySet};
use crate::interval::days_inclusive;
use crate::weight::{DayWeight, WorkingDays};

/// Why a date received its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayClass {
    /// Sunday: never a working day.
    Sunday,
    /// Closed for a registry holiday of the given type.
    Holiday(DayType),
    /// Registry half day.
    HalfDay,
    /// Registry override marking the date as a full working day.
    WorkingOverride,
    /// Saturday off under the Saturday rule; `ordinal` is its position in
    /// the month (1–5).
    RestSaturday {
        /// 1 for the first Saturday of the month, 2 for the second, …
        ordinal: u32,
    },
    /// Saturday worked under the Saturday rule.
    WorkingSaturday,
    /// Monday to Friday with no registry record.
    Weekday,
}

impl DayClass {
    /// Weight implied by this classification.
    pub fn weight(&self) -> DayWeight {
        match self {
            DayClass::Sunday | DayClass::Holiday(_) | DayClass::RestSaturday { .. } => {
                DayWeight::Off
            }
            DayClass::HalfDay => DayWeight::Half,
            DayClass::WorkingOverride | DayClass::WorkingSaturday | DayClass::Weekday => {
                DayWeight::Full
            }
        }
    }

    /// Short badge text for a calendar cell.
    pub fn label(&self) -> String {
        match self {
            DayClass::Sunday => "Sunday".into(),
            DayClass::Holiday(t) => t.to_string(),
            DayClass::HalfDay => "0.5 WD".into(),
            DayClass::WorkingOverride => "Working Day".into(),
            DayClass::RestSaturday { ordinal } => format!("{} Sat", ordinal_text(*ordinal)),
            DayClass::WorkingSaturday => "Working Saturday".into(),
            DayClass::Weekday => "Working Day".into(),
        }
    }
}

fn ordinal_text(n: u32) -> String {
    match n {
        1 => "1st".into(),
        2 => "2nd".into(),
        3 => "3rd".into(),
        n => format!("{n}th"),
    }
}

/// Default treatment of Saturdays that carry no registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturdayRule {
    /// The 2nd and 4th Saturdays of the month (days 8–14 and 22–28) are off.
    #[default]
    SecondAndFourthOff,
    /// Every Saturday is worked.
    AllWorking,
    /// Every Saturday is off.
    AllOff,
}

impl SaturdayRule {
    /// Classify a Saturday with no registry record.
    pub fn classify(&self, date: NaiveDate) -> DayClass {
        let ordinal = saturday_ordinal(date);
        match self {
            SaturdayRule::SecondAndFourthOff if matches!(ordinal, 2 | 4) => {
                DayClass::RestSaturday { ordinal }
            }
            SaturdayRule::SecondAndFourthOff | SaturdayRule::AllWorking => {
                DayClass::WorkingSaturday
            }
            SaturdayRule::AllOff => DayClass::RestSaturday { ordinal },
        }
    }
}

/// Position of a weekday within its month: days 1–7 → 1, 8–14 → 2, …
pub fn saturday_ordinal(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Classify `date` against `holidays` under `rule`.
pub fn classify_with(date: NaiveDate, holidays: &HolidaySet, rule: SaturdayRule) -> DayClass {
    if date.weekday() == Weekday::Sun {
        return DayClass::Sunday;
    }
    if let Some(record) = holidays.get(date) {
        return match record.day_type {
            DayType::WorkingDay => DayClass::WorkingOverride,
            DayType::HalfDay => DayClass::HalfDay,
            closure => DayClass::Holiday(closure),
        };
    }
    if date.weekday() == Weekday::Sat {
        return rule.classify(date);
    }
    DayClass::Weekday
}

/// Classify `date` under the default Saturday rule.
pub fn classify(date: NaiveDate, holidays: &HolidaySet) -> DayClass {
    classify_with(date, holidays, SaturdayRule::default())
}

/// Working-day weight of `date` under the default Saturday rule.
pub fn weight(date: NaiveDate, holidays: &HolidaySet) -> DayWeight {
    classify(date, holidays).weight()
}

/// `true` when `date` has weight ½ or 1.
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    weight(date, holidays).is_working()
}

/// A working-day calendar.
pub trait WorkingDayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Classify `date`.
    fn classify(&self, date: NaiveDate) -> DayClass;

    /// Registry record that [`classify`](Self::classify) consulted for
    /// `date`, if any.
    fn holiday(&self, date: NaiveDate) -> Option<&Holiday>;

    /// Working-day weight of `date`.
    fn weight(&self, date: NaiveDate) -> DayWeight {
        self.classify(date).weight()
    }

    /// Return `true` if `date` counts as working (weight ½ or 1).
    fn is_working_day(&self, date: NaiveDate) -> bool {
        self.weight(date).is_working()
    }

    /// Sum of weights over the closed range `[start, end]`.
    ///
    /// Fails with `InvalidRange` if `start > end`.
    fn sum_weights(&self, start: NaiveDate, end: NaiveDate) -> Result<WorkingDays> {
        Ok(days_inclusive(start, end)?.map(|d| self.weight(d)).sum())
    }
}

/// Calendar driven by a holiday registry snapshot and a Saturday rule.
#[derive(Debug, Clone, Default)]
pub struct BankCalendar {
    name: String,
    holidays: HolidaySet,
    saturday_rule: SaturdayRule,
}

impl BankCalendar {
    /// Create a calendar over `holidays` with the default Saturday rule.
    pub fn new(holidays: HolidaySet) -> Self {
        Self {
            name: "Bank".into(),
            holidays,
            saturday_rule: SaturdayRule::default(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the Saturday rule.
    pub fn with_saturday_rule(mut self, rule: SaturdayRule) -> Self {
        self.saturday_rule = rule;
        self
    }

    /// The holiday snapshot.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// The Saturday rule in force.
    pub fn saturday_rule(&self) -> SaturdayRule {
        self.saturday_rule
    }
}

impl WorkingDayCalendar for BankCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn classify(&self, date: NaiveDate) -> DayClass {
        classify_with(date, &self.holidays, self.saturday_rule)
    }

    fn holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(date)
    }
}

/// A bare holiday snapshot is a calendar under the default Saturday rule.
impl WorkingDayCalendar for HolidaySet {
    fn name(&self) -> &str {
        "Default"
    }

    fn classify(&self, date: NaiveDate) -> DayClass {
        classify(date, self)
    }

    fn holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.get(date)
    }
}
