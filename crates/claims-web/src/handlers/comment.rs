//! `GET /comment/{id}` and `POST /comment` — the resolution comment.

use axum::{
  Form,
  extract::{
    Path, State,
    rejection::{FormRejection, PathRejection},
  },
  response::{Html, Redirect},
};
use claims_core::store::ClaimStore;
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// `GET /comment/{id}`
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
  Ok(Html(views::comment(&claim)))
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
  pub id:      i64,
  pub comment: String,
}

/// `POST /comment` — overwrite the comment; status is left as it is.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<CommentForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Form(form) = form?;

  let updated = state
    .store
    .update_comment(form.id, form.comment)
    .await
    .map_err(Error::store)?;
  if !updated {
    return Err(Error::NotFound(format!("claim {} not found", form.id)));
  }
  tracing::info!(id = form.id, "claim comment updated");

  Ok(Redirect::to("/"))
}
