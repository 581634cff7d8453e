//! [`SqliteStore`] — the SQLite implementation of [`ClaimStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use claims_core::{
  claim::{Claim, ClaimStatus, NewClaim},
  range::DateRange,
  store::ClaimStore,
};

use crate::{
  encode::{
    CLAIM_COLUMNS, RawClaim, encode_date, encode_dt, encode_status, now,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A claims store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Other clones of this store fail on
  /// their next call.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  /// Run raw SQL against the connection, bypassing the typed API.
  #[cfg(test)]
  pub(crate) async fn execute_raw(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ClaimStore impl ─────────────────────────────────────────────────────────

impl ClaimStore for SqliteStore {
  type Error = crate::Error;

  async fn create_claim(&self, input: NewClaim) -> Result<Claim> {
    let created_at = now();

    let date_str   = encode_date(input.date);
    let subject    = input.subject.clone();
    let text       = input.text.clone();
    let status_str = encode_status(ClaimStatus::New);
    let at_str     = encode_dt(created_at);

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO claims (date, subject, text, status, comment, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, NULL, ?5, ?5)",
          rusqlite::params![date_str, subject, text, status_str, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Claim {
      id,
      date: input.date,
      subject: input.subject,
      text: input.text,
      status: ClaimStatus::New,
      comment: None,
      created_at,
      updated_at: created_at,
    })
  }

  async fn get_claim(&self, id: i64) -> Result<Option<Claim>> {
    let raw: Option<RawClaim> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = ?1"),
            rusqlite::params![id],
            RawClaim::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawClaim::into_claim).transpose()
  }

  async fn list_claims(&self, range: Option<DateRange>) -> Result<Vec<Claim>> {
    let bounds = range.map(|r| (encode_date(r.start), encode_date(r.end)));

    let raws: Vec<RawClaim> = self
      .conn
      .call(move |conn| {
        let rows = if let Some((start, end)) = bounds {
          let mut stmt = conn.prepare(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY created_at DESC, id DESC"
          ))?;
          stmt
            .query_map(rusqlite::params![start, end], RawClaim::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims
             ORDER BY created_at DESC, id DESC"
          ))?;
          stmt
            .query_map([], RawClaim::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    // Rows that fail to decode (e.g. an unrecognised status) are left out.
    let claims = raws
      .into_iter()
      .filter_map(|raw| {
        let id = raw.id;
        match raw.into_claim() {
          Ok(claim) => Some(claim),
          Err(e) => {
            tracing::warn!(id, error = %e, "skipping undecodable claim row");
            None
          }
        }
      })
      .collect();

    Ok(claims)
  }

  async fn update_status(&self, id: i64, status: ClaimStatus) -> Result<bool> {
    let status_str = encode_status(status);
    let at_str     = encode_dt(now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE claims SET status = ?1, comment = '', updated_at = ?2 WHERE id = ?3",
          rusqlite::params![status_str, at_str, id],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn update_comment(&self, id: i64, comment: String) -> Result<bool> {
    let at_str = encode_dt(now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE claims SET comment = ?1, updated_at = ?2 WHERE id = ?3",
          rusqlite::params![comment, at_str, id],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn delete_claim(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM claims WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn cancel_in_progress(&self) -> Result<usize> {
    let from   = encode_status(ClaimStatus::InProgress);
    let to     = encode_status(ClaimStatus::Cancelled);
    let at_str = encode_dt(now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE claims SET status = ?1, updated_at = ?2 WHERE status = ?3",
          rusqlite::params![to, at_str, from],
        )?)
      })
      .await?;

    Ok(changed)
  }
}
