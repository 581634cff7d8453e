//! `GET /` and `POST /date` — the claim list, optionally filtered by date.

use axum::{
  Form,
  extract::{State, rejection::FormRejection},
  response::{Html, IntoResponse, Redirect, Response},
};
use claims_core::{
  range::{DateRange, parse_optional_date},
  store::ClaimStore,
};
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// `GET /` — every claim, newest first.
pub async fn index<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let claims = state.store.list_claims(None).await.map_err(Error::store)?;
  Ok(Html(views::index(&claims, None)))
}

/// Body of `POST /date`. Both bounds are optional `YYYY-MM-DD` values; blank
/// inputs count as absent.
#[derive(Debug, Deserialize)]
pub struct DateFilterForm {
  pub start: Option<String>,
  pub end:   Option<String>,
}

/// `POST /date` — claims whose date lies in the submitted range.
///
/// A single bound filters on that one day. Without any bound the client is
/// sent back to the unfiltered list.
pub async fn filter_by_date<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<DateFilterForm>, FormRejection>,
) -> Result<Response, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Form(form) = form?;
  let start = parse_optional_date(form.start.as_deref())?;
  let end   = parse_optional_date(form.end.as_deref())?;

  let Some(range) = DateRange::resolve(start, end) else {
    return Ok(Redirect::to("/").into_response());
  };

  let claims = state
    .store
    .list_claims(Some(range))
    .await
    .map_err(Error::store)?;
  tracing::debug!(start = %range.start, end = %range.end, count = claims.len(), "filtered claims");

  Ok(Html(views::index(&claims, Some(&range))).into_response())
}
