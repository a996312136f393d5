//! Working-day weights and exact half-day totals.
//!
//! A single date contributes 0, ½ or 1 working day.  Totals are kept as an
//! integer count of half days so that sums over a year stay exact.

use serde::{Serialize, Serializer};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Credit a single calendar date contributes toward a working-day total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayWeight {
    /// Not a working day (weight 0).
    Off,
    /// Half working day (weight 0.5).
    Half,
    /// Full working day (weight 1).
    Full,
}

impl DayWeight {
    /// Numeric weight: 0, 0.5 or 1.
    pub fn value(&self) -> f64 {
        f64::from(self.half_days()) / 2.0
    }

    /// Weight expressed in half days: 0, 1 or 2.
    pub fn half_days(&self) -> u32 {
        match self {
            DayWeight::Off => 0,
            DayWeight::Half => 1,
            DayWeight::Full => 2,
        }
    }

    /// A half day still counts as a working day.
    pub fn is_working(&self) -> bool {
        !matches!(self, DayWeight::Off)
    }
}

impl Serialize for DayWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl std::fmt::Display for DayWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", WorkingDays::from(*self))
    }
}

/// A non-negative number of working days with half-day granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingDays(u32);

impl WorkingDays {
    /// Zero working days.
    pub const ZERO: WorkingDays = WorkingDays(0);

    /// Build from a count of half days.
    pub const fn from_half_days(half_days: u32) -> Self {
        WorkingDays(half_days)
    }

    /// Build from a count of whole days.
    pub const fn from_days(days: u32) -> Self {
        WorkingDays(days * 2)
    }

    /// Count in half days.
    pub fn half_days(&self) -> u32 {
        self.0
    }

    /// Count as a number of days (multiples of 0.5).
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Difference clamped at zero.
    pub fn saturating_sub(self, rhs: WorkingDays) -> WorkingDays {
        WorkingDays(self.0.saturating_sub(rhs.0))
    }
}

impl From<DayWeight> for WorkingDays {
    fn from(weight: DayWeight) -> Self {
        WorkingDays(weight.half_days())
    }
}

impl Add for WorkingDays {
    type Output = WorkingDays;

    fn add(self, rhs: WorkingDays) -> WorkingDays {
        WorkingDays(self.0 + rhs.0)
    }
}

impl Add<DayWeight> for WorkingDays {
    type Output = WorkingDays;

    fn add(self, rhs: DayWeight) -> WorkingDays {
        WorkingDays(self.0 + rhs.half_days())
    }
}

impl AddAssign<DayWeight> for WorkingDays {
    fn add_assign(&mut self, rhs: DayWeight) {
        self.0 += rhs.half_days();
    }
}

impl Sum<DayWeight> for WorkingDays {
    fn sum<I: Iterator<Item = DayWeight>>(iter: I) -> Self {
        iter.fold(WorkingDays::ZERO, |acc, w| acc + w)
    }
}

impl Sum for WorkingDays {
    fn sum<I: Iterator<Item = WorkingDays>>(iter: I) -> Self {
        iter.fold(WorkingDays::ZERO, |acc, w| acc + w)
    }
}

impl Serialize for WorkingDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 2 == 0 {
            serializer.serialize_u32(self.0 / 2)
        } else {
            serializer.serialize_f64(self.value())
        }
    }
}

impl std::fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_values() {
        assert_eq!(DayWeight::Off.value(), 0.0);
        assert_eq!(DayWeight::Half.value(), 0.5);
        assert_eq!(DayWeight::Full.value(), 1.0);
        assert!(DayWeight::Half.is_working());
        assert!(!DayWeight::Off.is_working());
    }

    #[test]
    fn sum_is_exact() {
        let total: WorkingDays = [DayWeight::Full, DayWeight::Half, DayWeight::Off, DayWeight::Half]
            .into_iter()
            .sum();
        assert_eq!(total, WorkingDays::from_days(2));
        assert_eq!(total.value(), 2.0);
    }

    #[test]
    fn display_half_granularity() {
        assert_eq!(WorkingDays::from_half_days(27).to_string(), "13.5");
        assert_eq!(WorkingDays::from_days(13).to_string(), "13");
        assert_eq!(WorkingDays::ZERO.to_string(), "0");
        assert_eq!(DayWeight::Half.to_string(), "0.5");
    }

    #[test]
    fn serialize_as_number() {
        assert_eq!(serde_json::to_string(&WorkingDays::from_days(22)).unwrap(), "22");
        assert_eq!(
            serde_json::to_string(&WorkingDays::from_half_days(5)).unwrap(),
            "2.5"
        );
    }

    #[test]
    fn saturating_sub_clamps() {
        let a = WorkingDays::from_days(3);
        let b = WorkingDays::from_half_days(7);
        assert_eq!(b.saturating_sub(a), WorkingDays::from_half_days(1));
        assert_eq!(a.saturating_sub(b), WorkingDays::ZERO);
    }
}
