//! Claims tracker server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `CLAIMS_*`
//! environment variables, opens the SQLite store, and serves the web UI over
//! HTTP until interrupted.
//!
//! ```
//! CLAIMS_PORT=8080 cargo run -p claims-web --bin server
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use claims_store_sqlite::SqliteStore;
use claims_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Claims tracker web server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = expand_tilde(&server_cfg.database_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "store opened");

  let app = claims_web::router(AppState::new(store.clone()));
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  store.close().await.context("failed to close store")?;
  tracing::info!("shut down");

  Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
  tracing::info!("shutdown signal received");
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
