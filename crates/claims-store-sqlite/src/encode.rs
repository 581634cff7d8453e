//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings so that ordering by
//! the column text is chronological. Dates are stored as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound as _, Utc};
use claims_core::claim::{Claim, ClaimStatus};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

/// The current time, truncated to the precision the store keeps.
pub fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── ClaimStatus ─────────────────────────────────────────────────────────────

pub fn encode_status(status: ClaimStatus) -> &'static str { status.as_str() }

pub fn decode_status(s: &str) -> Result<ClaimStatus> { Ok(s.parse()?) }

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// Column order used by every `SELECT` in the store.
pub const CLAIM_COLUMNS: &str =
  "id, date, subject, text, status, comment, created_at, updated_at";

/// A `claims` row as read from SQLite, before decoding.
pub struct RawClaim {
  pub id:         i64,
  pub date:       String,
  pub subject:    String,
  pub text:       String,
  pub status:     String,
  pub comment:    Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawClaim {
  /// Map a row selected with [`CLAIM_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawClaim {
      id:         row.get(0)?,
      date:       row.get(1)?,
      subject:    row.get(2)?,
      text:       row.get(3)?,
      status:     row.get(4)?,
      comment:    row.get(5)?,
      created_at: row.get(6)?,
      updated_at: row.get(7)?,
    })
  }

  pub fn into_claim(self) -> Result<Claim> {
    Ok(Claim {
      id:         self.id,
      date:       decode_date(&self.date)?,
      subject:    self.subject,
      text:       self.text,
      status:     decode_status(&self.status)?,
      comment:    self.comment,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encoded_timestamps_sort_chronologically() {
    let earlier = DateTime::parse_from_rfc3339("2024-01-05T09:00:00.123456Z")
      .unwrap()
      .with_timezone(&Utc);
    let later = DateTime::parse_from_rfc3339("2024-01-05T09:00:00.5Z")
      .unwrap()
      .with_timezone(&Utc);
    assert!(earlier < later);
    assert!(encode_dt(earlier) < encode_dt(later));
    assert_eq!(encode_dt(earlier), "2024-01-05T09:00:00.123456Z");
    assert_eq!(encode_dt(later), "2024-01-05T09:00:00.500000Z");
  }

  #[test]
  fn timestamps_survive_the_column() {
    let t = now();
    assert_eq!(decode_dt(&encode_dt(t)).unwrap(), t);
  }

  #[test]
  fn unknown_status_fails_to_decode() {
    assert!(matches!(decode_status("Archived"), Err(Error::Core(_))));
  }
}
