//! `GET /create` and `POST /create`.

use axum::{
  Form,
  extract::{State, rejection::FormRejection},
  response::{Html, Redirect},
};
use chrono::Utc;
use claims_core::{claim::NewClaim, store::ClaimStore};
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// `GET /create` — the empty claim form.
pub async fn form() -> Html<String> { Html(views::create_form()) }

#[derive(Debug, Deserialize)]
pub struct CreateForm {
  pub subject: String,
  pub text:    String,
}

/// `POST /create` — file a new claim dated today (UTC).
///
/// A missing or undecodable body is a 400.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<CreateForm>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  let Form(form) = form?;
  let input = NewClaim::new(Utc::now().date_naive(), form.subject, form.text);

  let claim = state
    .store
    .create_claim(input)
    .await
    .map_err(Error::store)?;
  tracing::info!(id = claim.id, subject = %claim.subject, "claim created");

  Ok(Redirect::to("/"))
}
