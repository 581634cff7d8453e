//! Error types for `claims-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown claim status: {0:?}")]
  UnknownStatus(String),

  #[error("invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
