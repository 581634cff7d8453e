//! Claim — the single entity tracked by the service.
//!
//! A claim is created with status [`ClaimStatus::New`] and moves through the
//! remaining statuses by explicit updates. The store does not guard
//! transitions; any recognised status may follow any other.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle label of a claim.
///
/// The conventional flow is `New → In Progress → {Completed, Cancelled}`,
/// with a bulk `In Progress → Cancelled` shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
  #[serde(rename = "New")]
  New,
  #[serde(rename = "In Progress")]
  InProgress,
  #[serde(rename = "Completed")]
  Completed,
  #[serde(rename = "Cancelled")]
  Cancelled,
}

impl ClaimStatus {
  /// Every status, in lifecycle order.
  pub const ALL: [ClaimStatus; 4] = [
    ClaimStatus::New,
    ClaimStatus::InProgress,
    ClaimStatus::Completed,
    ClaimStatus::Cancelled,
  ];

  /// The label stored in the database and shown to users.
  pub fn as_str(self) -> &'static str {
    match self {
      ClaimStatus::New        => "New",
      ClaimStatus::InProgress => "In Progress",
      ClaimStatus::Completed  => "Completed",
      ClaimStatus::Cancelled  => "Cancelled",
    }
  }

  /// Terminal statuses send the user on to the resolution comment form.
  pub fn requires_comment(self) -> bool {
    matches!(self, ClaimStatus::Completed | ClaimStatus::Cancelled)
  }
}

impl fmt::Display for ClaimStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ClaimStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ClaimStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| Error::UnknownStatus(s.to_owned()))
  }
}

// ─── Claim ───────────────────────────────────────────────────────────────────

/// A persisted claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
  pub id:         i64,
  /// Calendar date the claim was filed on.
  pub date:       NaiveDate,
  pub subject:    String,
  pub text:       String,
  pub status:     ClaimStatus,
  /// Resolution comment. Cleared to an empty string on every status change.
  pub comment:    Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input for [`ClaimStore::create_claim`](crate::store::ClaimStore::create_claim).
///
/// Status, comment and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
  pub date:    NaiveDate,
  pub subject: String,
  pub text:    String,
}

impl NewClaim {
  pub fn new(
    date: NaiveDate,
    subject: impl Into<String>,
    text: impl Into<String>,
  ) -> Self {
    Self { date, subject: subject.into(), text: text.into() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_labels_parse_back() {
    for status in ClaimStatus::ALL {
      assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
    }
  }

  #[test]
  fn unknown_status_is_rejected() {
    let err = "in progress".parse::<ClaimStatus>().unwrap_err();
    assert!(matches!(err, Error::UnknownStatus(ref s) if s == "in progress"));
  }

  #[test]
  fn only_terminal_statuses_require_comment() {
    assert!(!ClaimStatus::New.requires_comment());
    assert!(!ClaimStatus::InProgress.requires_comment());
    assert!(ClaimStatus::Completed.requires_comment());
    assert!(ClaimStatus::Cancelled.requires_comment());
  }
}
