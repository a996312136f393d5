//! Holiday-registry records and the keyed [`HolidaySet`] the classifier reads.
//!
//! Records are owned by an external registry; the engine only ever reads
//! them.  A [`HolidaySet`] indexes them by calendar date so each
//! classification is a single hash lookup.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use tracing::warn;
use wc_core::errors::{Error, Result};
use wc_core::{format_iso_date, parse_iso_date};

use crate::day_type::DayType;

/// One record from the holiday registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Registry identifier, if the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar date of the record.
    #[serde(serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Category of the record.
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso_date(*date))
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw).map_err(serde::de::Error::custom)
}

impl Holiday {
    /// Create a record with no id or description.
    pub fn new(date: NaiveDate, day_type: DayType, name: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            day_type,
            name: name.into(),
            description: None,
        }
    }

    /// Attach a registry identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What to do when two records share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first record in input order and discard the rest.
    #[default]
    FirstWins,
    /// Fail with [`Error::DuplicateHoliday`].
    Reject,
}

/// Holiday records keyed by calendar date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidaySet {
    by_date: HashMap<NaiveDate, Holiday>,
    duplicates_discarded: usize,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set keeping the first record seen for each date.
    ///
    /// Later records for an already-present date are discarded and logged.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut set = Self::new();
        for record in records {
            if let Some(kept) = set.by_date.get(&record.date) {
                warn!(
                    date = %record.date,
                    kept = %kept.name,
                    discarded = %record.name,
                    "duplicate holiday record discarded"
                );
                set.duplicates_discarded += 1;
                continue;
            }
            set.by_date.insert(record.date, record);
        }
        set
    }

    /// Build a set, failing on the first date that carries two records.
    pub fn try_from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut set = Self::new();
        for record in records {
            let date = record.date;
            if set.by_date.insert(date, record).is_some() {
                return Err(Error::DuplicateHoliday { date });
            }
        }
        Ok(set)
    }

    /// Build a set under the given duplicate policy.
    pub fn from_records_with<I>(records: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = Holiday>,
    {
        match policy {
            DuplicatePolicy::FirstWins => Ok(Self::from_records(records)),
            DuplicatePolicy::Reject => Self::try_from_records(records),
        }
    }

    /// Insert a record, returning the one it replaced for the same date.
    pub fn insert(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.by_date.insert(holiday.date, holiday)
    }

    /// Remove and return the record for `date`.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.by_date.remove(&date)
    }

    /// Record for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.by_date.get(&date)
    }

    /// Return `true` if a record exists for `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Number of distinct dates with a record.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Return `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Number of records dropped by [`HolidaySet::from_records`].
    pub fn duplicates_discarded(&self) -> usize {
        self.duplicates_discarded
    }

    /// All records in ascending date order.
    pub fn sorted(&self) -> Vec<&Holiday> {
        let mut records: Vec<&Holiday> = self.by_date.values().collect();
        records.sort_by_key(|h| h.date);
        records
    }

    /// Records dated within `[start, end]`, ascending.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday> {
        self.sorted()
            .into_iter()
            .filter(|h| h.date >= start && h.date <= end)
            .collect()
    }

    /// Records dated strictly after `today` minus `lookback_months`, ascending.
    ///
    /// The dashboard lists "upcoming" holidays with a one-month lookback so
    /// that recent ones stay visible.
    pub fn upcoming(&self, today: NaiveDate, lookback_months: u32) -> Vec<&Holiday> {
        let cutoff = today
            .checked_sub_months(Months::new(lookback_months))
            .unwrap_or(NaiveDate::MIN);
        self.sorted()
            .into_iter()
            .filter(|h| h.date > cutoff)
            .collect()
    }
}

impl FromIterator<Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Holiday> {
        vec![
            Holiday::new(date(2025, 8, 15), DayType::PublicHoliday, "Independence Day"),
            Holiday::new(date(2025, 8, 16), DayType::StateHoliday, "Local Festival"),
            Holiday::new(date(2025, 10, 2), DayType::PublicHoliday, "Gandhi Jayanti"),
        ]
    }

    #[test]
    fn lookup_by_date() {
        let set = HolidaySet::from_records(sample());
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(date(2025, 8, 16)).unwrap().name, "Local Festival");
        assert!(set.get(date(2025, 8, 17)).is_none());
        assert!(set.contains(date(2025, 10, 2)));
    }

    #[test]
    fn first_record_wins_on_duplicates() {
        let mut records = sample();
        records.push(Holiday::new(date(2025, 8, 15), DayType::WorkingDay, "Override"));
        let set = HolidaySet::from_records(records);
        assert_eq!(set.len(), 3);
        assert_eq!(set.duplicates_discarded(), 1);
        assert_eq!(
            set.get(date(2025, 8, 15)).unwrap().day_type,
            DayType::PublicHoliday
        );
    }

    #[test]
    fn strict_build_rejects_duplicates() {
        let mut records = sample();
        records.push(Holiday::new(date(2025, 10, 2), DayType::HalfDay, "Again"));
        assert_eq!(
            HolidaySet::try_from_records(records.clone()),
            Err(Error::DuplicateHoliday {
                date: date(2025, 10, 2)
            })
        );
        assert!(HolidaySet::from_records_with(records, DuplicatePolicy::Reject).is_err());
        assert!(HolidaySet::try_from_records(sample()).is_ok());
    }

    #[test]
    fn insert_and_remove() {
        let mut set = HolidaySet::new();
        assert!(set.is_empty());
        let christmas = Holiday::new(date(2025, 12, 25), DayType::PublicHoliday, "Christmas");
        assert!(set.insert(christmas.clone()).is_none());
        let replaced = set.insert(Holiday::new(date(2025, 12, 25), DayType::HalfDay, "Eve"));
        assert_eq!(replaced, Some(christmas));
        assert_eq!(set.remove(date(2025, 12, 25)).unwrap().name, "Eve");
        assert!(set.is_empty());
    }

    #[test]
    fn sorted_and_ranges() {
        let mut records = sample();
        records.reverse();
        let set: HolidaySet = records.into_iter().collect();
        let dates: Vec<_> = set.sorted().iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 8, 15), date(2025, 8, 16), date(2025, 10, 2)]
        );
        assert_eq!(set.in_range(date(2025, 8, 1), date(2025, 8, 31)).len(), 2);
    }

    #[test]
    fn upcoming_uses_lookback() {
        let set = HolidaySet::from_records(sample());
        // 2025-09-10 minus one month = 2025-08-10: both August records are after it.
        assert_eq!(set.upcoming(date(2025, 9, 10), 1).len(), 3);
        // 2025-09-20 minus one month = 2025-08-20.
        let upcoming = set.upcoming(date(2025, 9, 20), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Gandhi Jayanti");
    }

    #[test]
    fn deserialize_registry_record() {
        let json = r#"{
            "id": "7",
            "date": "2025-08-15T00:00:00.000Z",
            "type": "PUBLIC_HOLIDAY",
            "name": "Independence Day"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, date(2025, 8, 15));
        assert_eq!(holiday.day_type, DayType::PublicHoliday);
        assert_eq!(holiday.id.as_deref(), Some("7"));
        assert!(holiday.description.is_none());
    }

    #[test]
    fn deserialize_rejects_bad_date() {
        let json = r#"{"date": "2025-02-30", "type": "HALF_DAY", "name": "x"}"#;
        let err = serde_json::from_str::<Holiday>(json).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn serialize_uses_plain_date() {
        let h = Holiday::new(date(2026, 1, 26), DayType::PublicHoliday, "Republic Day");
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["date"], "2026-01-26");
        assert_eq!(json["type"], "PUBLIC_HOLIDAY");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn serialized_record_reads_back() {
        let h = Holiday::new(date(2025, 8, 15), DayType::HalfDay, "Half day").with_id("h-1");
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains(r#""date":"2025-08-15""#));
        assert_eq!(serde_json::from_str::<Holiday>(&json).unwrap(), h);
    }
}
