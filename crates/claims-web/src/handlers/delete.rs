//! `POST /delete/{id}`.
//!
//! Deleting an id that does not exist is not an error; the client is sent
//! back to the list either way.

use axum::{
  extract::{Path, State, rejection::PathRejection},
  response::Redirect,
};
use claims_core::store::ClaimStore;

use crate::{AppState, error::Error};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Path(id) = path?;

  let removed = state.store.delete_claim(id).await.map_err(Error::store)?;
  if removed {
    tracing::info!(id, "claim deleted");
  } else {
    tracing::debug!(id, "delete of missing claim ignored");
  }

  Ok(Redirect::to("/"))
}
