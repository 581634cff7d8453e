//! `POST /cancel` — cancel every claim that is in progress.

use axum::{extract::State, response::Redirect};
use claims_core::store::ClaimStore;

use crate::{AppState, error::Error};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Redirect, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let cancelled = state
    .store
    .cancel_in_progress()
    .await
    .map_err(Error::store)?;
  tracing::info!(cancelled, "cancelled in-progress claims");

  Ok(Redirect::to("/"))
}
