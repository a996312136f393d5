//! `DayType` — the category attached to a holiday-registry record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wc_core::errors::{Error, Result};
use wc_core::fail;

/// Category of a holiday-registry record.
///
/// Serialised with the registry's wire names (`"PUBLIC_HOLIDAY"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    /// Explicit override: the date counts as a full working day.
    WorkingDay,
    /// National public holiday.
    PublicHoliday,
    /// Holiday declared by the central bank.
    RbiHoliday,
    /// State-level holiday.
    StateHoliday,
    /// Holiday specific to this bank.
    BankSpecificHoliday,
    /// Working half day: counts as working, contributes 0.5.
    HalfDay,
}

impl DayType {
    /// All variants, in registry order.
    pub const ALL: [DayType; 6] = [
        DayType::WorkingDay,
        DayType::PublicHoliday,
        DayType::RbiHoliday,
        DayType::StateHoliday,
        DayType::BankSpecificHoliday,
        DayType::HalfDay,
    ];

    /// Return `true` for the four variants that close the office for the day.
    pub fn is_closure(&self) -> bool {
        matches!(
            self,
            DayType::PublicHoliday
                | DayType::RbiHoliday
                | DayType::StateHoliday
                | DayType::BankSpecificHoliday
        )
    }

    /// Wire name as used by the holiday registry.
    pub fn code(&self) -> &'static str {
        match self {
            DayType::WorkingDay => "WORKING_DAY",
            DayType::PublicHoliday => "PUBLIC_HOLIDAY",
            DayType::RbiHoliday => "RBI_HOLIDAY",
            DayType::StateHoliday => "STATE_HOLIDAY",
            DayType::BankSpecificHoliday => "BANK_SPECIFIC_HOLIDAY",
            DayType::HalfDay => "HALF_DAY",
        }
    }
}

impl FromStr for DayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match DayType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
        {
            Some(day_type) => Ok(day_type),
            None => fail!("unknown day type '{s}'"),
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().replace('_', " "))
    }
}
