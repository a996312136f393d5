//! Calendar configuration supplied by the embedding application.
//!
//! The holiday snapshot and calendar conventions arrive as one explicit
//! value; nothing is read from process-wide state.
//!
//! ```json
//! {
//!   "year": 2025,
//!   "holidays": [
//!     { "date": "2025-08-15", "type": "PUBLIC_HOLIDAY", "name": "Independence Day" }
//!   ],
//!   "fiscal_year_start_month": 4,
//!   "quarter_basis": "calendar",
//!   "saturday_rule": "second_and_fourth_off",
//!   "duplicate_policy": "first_wins"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use wc_core::errors::{Error, Result};

use crate::calendar::{BankCalendar, SaturdayRule};
use crate::fiscal::{FiscalConvention, QuarterBasis};
use crate::holiday::{DuplicatePolicy, Holiday, HolidaySet};

fn default_start_month() -> u32 {
    4
}

/// Holiday snapshot plus calendar conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Year the snapshot was prepared for; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Registry records.
    pub holidays: Vec<Holiday>,
    /// First month of the fiscal year.
    #[serde(default = "default_start_month")]
    pub fiscal_year_start_month: u32,
    /// Quarter alignment.
    #[serde(default)]
    pub quarter_basis: QuarterBasis,
    /// Treatment of Saturdays without a record.
    #[serde(default)]
    pub saturday_rule: SaturdayRule,
    /// Handling of two records on one date.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: None,
            holidays: Vec::new(),
            fiscal_year_start_month: default_start_month(),
            quarter_basis: QuarterBasis::default(),
            saturday_rule: SaturdayRule::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl CalendarConfig {
    /// Decode a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        debug!(
            holidays = config.holidays.len(),
            year = ?config.year,
            "decoded calendar config"
        );
        Ok(config)
    }

    /// Read and decode a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loading calendar config");
        Self::from_json_str(&raw)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Index the holiday records under the configured duplicate policy.
    pub fn holiday_set(&self) -> Result<HolidaySet> {
        HolidaySet::from_records_with(self.holidays.iter().cloned(), self.duplicate_policy)
    }

    /// Calendar over the configured holidays and Saturday rule.
    pub fn calendar(&self) -> Result<BankCalendar> {
        Ok(BankCalendar::new(self.holiday_set()?).with_saturday_rule(self.saturday_rule))
    }

    /// Fiscal convention from the configured start month and quarter basis.
    pub fn convention(&self) -> Result<FiscalConvention> {
        FiscalConvention::new(self.fiscal_year_start_month, self.quarter_basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_type::DayType;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = CalendarConfig::from_json_str(r#"{"holidays": []}"#).unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.convention().unwrap(), FiscalConvention::default());
    }

    #[test]
    fn decode_full_config() {
        let json = r#"{
            "year": 2025,
            "holidays": [
                {"date": "2025-08-15", "type": "PUBLIC_HOLIDAY", "name": "Independence Day"},
                {"date": "2025-08-16", "type": "STATE_HOLIDAY", "name": "Local Festival"}
            ],
            "fiscal_year_start_month": 7,
            "quarter_basis": "fiscal",
            "saturday_rule": "all_working",
            "duplicate_policy": "reject"
        }"#;
        let config = CalendarConfig::from_json_str(json).unwrap();
        assert_eq!(config.year, Some(2025));
        assert_eq!(config.holidays[1].day_type, DayType::StateHoliday);
        assert_eq!(config.saturday_rule, SaturdayRule::AllWorking);
        assert_eq!(config.convention().unwrap().start_month(), 7);
        assert_eq!(config.calendar().unwrap().holidays().len(), 2);
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            CalendarConfig::from_json_str("{"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            CalendarConfig::from_json_str(r#"{"holidays": [{"date": "x", "type": "HALF_DAY"}]}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_config_error() {
        assert!(matches!(
            CalendarConfig::from_path("/nonexistent/workcal.json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn bad_start_month_rejected_on_use() {
        let config = CalendarConfig {
            fiscal_year_start_month: 0,
            ..CalendarConfig::default()
        };
        assert!(matches!(config.convention(), Err(Error::Precondition(_))));
    }
}
