//! Error types and axum `IntoResponse` implementation.
//!
//! Every error renders the HTML error page with its status code, so each
//! request path ends in exactly one well-formed response.

use axum::{
  extract::rejection::{FormRejection, PathRejection},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum Error {
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("not found: {0}")]
  NotFound(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error. Generic over the store so handlers can use it
  /// with `map_err` directly.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<claims_core::Error> for Error {
  fn from(e: claims_core::Error) -> Self { Error::BadRequest(e.to_string()) }
}

impl From<FormRejection> for Error {
  fn from(rejection: FormRejection) -> Self {
    Error::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for Error {
  fn from(rejection: PathRejection) -> Self {
    Error::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      Error::BadRequest(msg) | Error::NotFound(msg) => {
        tracing::warn!(%status, "{}", self);
        msg.clone()
      }
      Error::Store(e) => {
        tracing::error!(%status, error = %e, "request failed");
        "The claims database could not complete the request.".to_string()
      }
    };
    (status, Html(views::error_page(status, &message))).into_response()
  }
}
