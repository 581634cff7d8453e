//! HTTP layer for the claims tracker.
//!
//! Exposes an axum [`Router`] serving server-rendered HTML pages, backed by
//! any [`ClaimStore`].

pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use claims_core::store::ClaimStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{cancel, comment, create, delete, list, status};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from defaults, `config.toml`,
/// `PORT` and `CLAIMS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_DATABASE_PATH: &'static str = "claims.db";

  /// Load configuration from the optional TOML file at `path`, overridden by
  /// the process environment (see [`ServerConfig::load_from`]).
  pub fn load(path: impl Into<PathBuf>) -> Result<Self, config::ConfigError> {
    Self::load_from(path, std::env::vars().collect())
  }

  /// Load configuration from the optional TOML file at `path` and the
  /// environment variables in `env`.
  ///
  /// Precedence, lowest first: built-in defaults, the file, a plain `PORT`
  /// variable, then `CLAIMS_*` variables.
  pub fn load_from(
    path: impl Into<PathBuf>,
    env:  config::Map<String, String>,
  ) -> Result<Self, config::ConfigError> {
    let port_only: config::Map<String, String> = env
      .iter()
      .filter(|(key, _)| key.as_str() == "PORT")
      .map(|(key, value)| (key.clone(), value.clone()))
      .collect();

    config::Config::builder()
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .set_default("database_path", Self::DEFAULT_DATABASE_PATH)?
      .add_source(config::File::from(path.into()).required(false))
      .add_source(
        config::Environment::default()
          .try_parsing(true)
          .source(Some(port_only)),
      )
      .add_source(
        config::Environment::with_prefix("CLAIMS")
          .try_parsing(true)
          .source(Some(env)),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ClaimStore> {
  pub store: Arc<S>,
}

impl<S: ClaimStore> AppState<S> {
  pub fn new(store: S) -> Self { Self { store: Arc::new(store) } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the claims service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ClaimStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",              get(list::index::<S>))
    .route("/date",          post(list::filter_by_date::<S>))
    .route("/create",        get(create::form).post(create::submit::<S>))
    .route("/edit",          post(status::update::<S>))
    .route("/edit/{id}",     get(status::form::<S>))
    .route("/comment",       post(comment::update::<S>))
    .route("/comment/{id}",  get(comment::form::<S>))
    .route("/delete/{id}",   post(delete::handler::<S>))
    .route("/cancel",        post(cancel::handler::<S>))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn not_found() -> Response {
  Error::NotFound("no such page".to_string()).into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
