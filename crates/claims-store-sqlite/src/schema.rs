//! SQL schema for the claims SQLite store.
//!
//! Executed once at connection startup. Only additive statements belong here;
//! an existing table is never dropped or rewritten.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS claims (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,   -- YYYY-MM-DD
    subject     TEXT NOT NULL,
    text        TEXT NOT NULL,
    status      TEXT NOT NULL,   -- 'New' | 'In Progress' | 'Completed' | 'Cancelled'
    comment     TEXT,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC, microsecond precision
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS claims_date_idx    ON claims(date);
CREATE INDEX IF NOT EXISTS claims_created_idx ON claims(created_at);
CREATE INDEX IF NOT EXISTS claims_status_idx  ON claims(status);

PRAGMA user_version = 1;
";
