use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use thiserror::Error;

const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("period must look like YYYY-MM, got {0:?}")]
pub struct PeriodError(pub String);

/// The reporting month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or_else(|| PeriodError(format!("{year}-{month}")))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// `Ene-qty-2024` for January 2024.
    pub fn monthly_qty_column(&self) -> String {
        let label = MONTH_LABELS[(self.month - 1) as usize];
        format!("{label}-qty-{}", self.year)
    }

    /// Half-open `[start, end)`: the twelve months before the period plus the period itself.
    pub fn trailing_window(&self) -> (NaiveDate, NaiveDate) {
        let first = self.first_day();
        let start = first.checked_sub_months(Months::new(12)).unwrap_or(first);
        let end = first.checked_add_months(Months::new(1)).unwrap_or(first);
        (start, end)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
