//! The `ClaimStore` trait.
//!
//! Implemented by storage backends (e.g. `claims-store-sqlite`). The web layer
//! depends on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::{
  claim::{Claim, ClaimStatus, NewClaim},
  range::DateRange,
};

/// Abstraction over a claims storage backend.
///
/// Every method issues a single read or a single write. Writes addressed by
/// id report whether a row was affected instead of failing on a miss; callers
/// decide whether a miss matters.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait ClaimStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new claim with status [`ClaimStatus::New`] and no comment.
  fn create_claim(
    &self,
    input: NewClaim,
  ) -> impl Future<Output = Result<Claim, Self::Error>> + Send + '_;

  /// Look up a claim by id. Returns `None` if not found.
  fn get_claim(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Claim>, Self::Error>> + Send + '_;

  /// List claims, newest first, optionally restricted to an inclusive range
  /// of claim dates.
  fn list_claims(
    &self,
    range: Option<DateRange>,
  ) -> impl Future<Output = Result<Vec<Claim>, Self::Error>> + Send + '_;

  /// Set the status of a claim and clear its comment to an empty string.
  /// Returns `false` if no claim has this id.
  fn update_status(
    &self,
    id: i64,
    status: ClaimStatus,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Overwrite the comment of a claim, leaving its status untouched.
  /// Returns `false` if no claim has this id.
  fn update_comment(
    &self,
    id: i64,
    comment: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Remove a claim. Returns `false` if no claim has this id.
  fn delete_claim(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Move every claim in [`ClaimStatus::InProgress`] to
  /// [`ClaimStatus::Cancelled`]. Returns the number of claims changed.
  fn cancel_in_progress(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
