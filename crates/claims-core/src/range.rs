//! Inclusive calendar-date ranges used to filter the claim list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An inclusive `[start, end]` range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end:   NaiveDate,
}

impl DateRange {
  pub fn new(start: NaiveDate, end: NaiveDate) -> Self { Self { start, end } }

  /// A range covering exactly one day.
  pub fn single_day(date: NaiveDate) -> Self { Self::new(date, date) }

  /// Resolve optional bounds into a range.
  ///
  /// A single bound becomes a single-day range. No bounds at all means no
  /// filter.
  pub fn resolve(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
  ) -> Option<Self> {
    match (start, end) {
      (Some(start), Some(end)) => Some(Self::new(start, end)),
      (Some(day), None) | (None, Some(day)) => Some(Self::single_day(day)),
      (None, None) => None,
    }
  }
}

/// Parse an optional `YYYY-MM-DD` form value. Blank input counts as absent.
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .map(Some)
      .map_err(|_| Error::InvalidDate(s.to_owned())),
  }
}
