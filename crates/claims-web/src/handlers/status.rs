//! `GET /edit/{id}` and `POST /edit` — changing a claim's status.

use axum::{
  Form,
  extract::{
    Path, State,
    rejection::{FormRejection, PathRejection},
  },
  response::{Html, Redirect},
};
use claims_core::{claim::ClaimStatus, store::ClaimStore};
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// `GET /edit/{id}` — status selector for one claim.
pub async fn form<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Path(id) = path?;
  let claim = state
    .store
    .get_claim(id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::NotFound(format!("claim {id} not found")))?;
  Ok(Html(views::edit(&claim)))
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
  pub id:     i64,
  pub status: String,
}

/// `POST /edit` — write the new status and clear the comment.
///
/// Completed and cancelled claims continue to the comment form; every other
/// status returns to the list.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<StatusForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Form(form) = form?;
  let status: ClaimStatus = form.status.parse()?;

  let updated = state
    .store
    .update_status(form.id, status)
    .await
    .map_err(Error::store)?;
  if !updated {
    return Err(Error::NotFound(format!("claim {} not found", form.id)));
  }
  tracing::info!(id = form.id, %status, "claim status changed");

  if status.requires_comment() {
    Ok(Redirect::to(&format!("/comment/{}", form.id)))
  } else {
    Ok(Redirect::to("/"))
  }
}
