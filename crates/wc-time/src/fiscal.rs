//! Fiscal-year, quarter and month windows around a reference date.
//!
//! The fiscal year runs from the first of `start_month` (April by default)
//! to the day before the same date one year later.  A January–March date
//! under the April convention therefore belongs to the fiscal year that
//! started in the previous calendar year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use wc_core::ensure;
use wc_core::errors::Result;

use crate::interval::DateWindow;

/// How quarter windows are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarterBasis {
    /// Calendar quarters: Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec.
    #[default]
    Calendar,
    /// Quarters counted from the fiscal-year start month.
    Fiscal,
}

/// Fiscal-year start month and quarter alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalConvention {
    start_month: u32,
    quarter_basis: QuarterBasis,
}

impl Default for FiscalConvention {
    fn default() -> Self {
        Self {
            start_month: 4,
            quarter_basis: QuarterBasis::Calendar,
        }
    }
}

/// The three windows enclosing a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FiscalWindows {
    /// Enclosing fiscal year.
    pub fiscal_year: DateWindow,
    /// Enclosing quarter, aligned per the convention's [`QuarterBasis`].
    pub quarter: DateWindow,
    /// Enclosing calendar month.
    pub month: DateWindow,
}

impl FiscalConvention {
    /// Create a convention.  `start_month` must lie in 1–12.
    pub fn new(start_month: u32, quarter_basis: QuarterBasis) -> Result<Self> {
        ensure!(
            (1..=12).contains(&start_month),
            "fiscal year start month {start_month} out of range [1, 12]"
        );
        Ok(Self {
            start_month,
            quarter_basis,
        })
    }

    /// First month of the fiscal year (1–12).
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Quarter alignment.
    pub fn quarter_basis(&self) -> QuarterBasis {
        self.quarter_basis
    }

    /// Calendar year in which the fiscal year containing `reference` starts.
    pub fn fiscal_start_year(&self, reference: NaiveDate) -> i32 {
        if reference.month() >= self.start_month {
            reference.year()
        } else {
            reference.year() - 1
        }
    }

    /// Fiscal year containing `reference`.
    pub fn fiscal_year(&self, reference: NaiveDate) -> Result<DateWindow> {
        span_months(self.fiscal_start_year(reference), self.start_month, 12)
    }

    /// Quarter containing `reference`.
    pub fn quarter(&self, reference: NaiveDate) -> Result<DateWindow> {
        let back = match self.quarter_basis {
            QuarterBasis::Calendar => (reference.month() - 1) % 3,
            QuarterBasis::Fiscal => self.months_into_fiscal_year(reference) % 3,
        };
        let (year, month) = if reference.month() > back {
            (reference.year(), reference.month() - back)
        } else {
            (reference.year() - 1, reference.month() + 12 - back)
        };
        span_months(year, month, 3)
    }

    /// Calendar month containing `reference`.
    pub fn month(&self, reference: NaiveDate) -> Result<DateWindow> {
        span_months(reference.year(), reference.month(), 1)
    }

    /// All three windows around `reference`.
    pub fn resolve(&self, reference: NaiveDate) -> Result<FiscalWindows> {
        Ok(FiscalWindows {
            fiscal_year: self.fiscal_year(reference)?,
            quarter: self.quarter(reference)?,
            month: self.month(reference)?,
        })
    }

    /// Quarter number 1–4 in the configured basis.
    pub fn quarter_number(&self, reference: NaiveDate) -> u32 {
        match self.quarter_basis {
            QuarterBasis::Calendar => (reference.month() - 1) / 3 + 1,
            QuarterBasis::Fiscal => self.months_into_fiscal_year(reference) / 3 + 1,
        }
    }

    /// Dashboard label such as `"FY 2025-26"`.
    pub fn fiscal_year_label(&self, reference: NaiveDate) -> String {
        let start = self.fiscal_start_year(reference);
        if self.start_month == 1 {
            format!("FY {start}")
        } else {
            format!("FY {start}-{:02}", (start + 1).rem_euclid(100))
        }
    }

    fn months_into_fiscal_year(&self, reference: NaiveDate) -> u32 {
        (reference.month() + 12 - self.start_month) % 12
    }
}

/// Windows around `reference` under the default convention (April fiscal
/// year, calendar quarters).
pub fn resolve_windows(reference: NaiveDate) -> Result<FiscalWindows> {
    FiscalConvention::default().resolve(reference)
}

/// Window of `months` whole months starting on the first of `month` in
/// `year`.  Bounds outside chrono's range are cut off at `NaiveDate::MIN` and
/// `NaiveDate::MAX`.
pub(crate) fn span_months(year: i32, month: u32, months: u32) -> Result<DateWindow> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    let next = month - 1 + months;
    let end = NaiveDate::from_ymd_opt(year + (next / 12) as i32, next % 12 + 1, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    DateWindow::new(start, end)
}
