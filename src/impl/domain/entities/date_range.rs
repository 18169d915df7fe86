use chrono::NaiveDate;

use crate::{
    domain::logic::utils::parse_calendar_date,
    errors::ExportError,
};

/// Closed calendar-date interval `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ExportError> {
        if from > to {
            return Err(ExportError::ReversedDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Parses both bounds the same way entry dates are parsed. Any malformed
    /// or missing bound rejects the whole range.
    pub fn parse(from: &str, to: &str) -> Result<Self, ExportError> {
        let from = Self::parse_bound("from", from)?;
        let to = Self::parse_bound("to", to)?;
        Self::new(from, to)
    }

    fn parse_bound(bound: &'static str, raw: &str) -> Result<NaiveDate, ExportError> {
        if raw.trim().is_empty() {
            return Err(ExportError::MissingDateRange { bound });
        }
        parse_calendar_date(raw).ok_or_else(|| ExportError::InvalidDateRange {
            bound,
            value: raw.to_string(),
        })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
