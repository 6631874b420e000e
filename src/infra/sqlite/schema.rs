use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS incident_reports (
            id                      TEXT PRIMARY KEY,
            user_id                 TEXT,
            full_name               TEXT NOT NULL,
            address                 TEXT NOT NULL DEFAULT '',
            contact_number          TEXT NOT NULL DEFAULT '',
            datetime                TEXT NOT NULL,
            location                TEXT NOT NULL DEFAULT '',
            type                    TEXT NOT NULL,
            description             TEXT NOT NULL,
            suspects                TEXT NOT NULL DEFAULT '',
            has_witnesses           INTEGER NOT NULL DEFAULT 0,
            witness_info            TEXT NOT NULL DEFAULT '',
            reported_to_authorities INTEGER NOT NULL DEFAULT 0,
            authorities_info        TEXT NOT NULL DEFAULT '',
            damages_or_injuries     INTEGER NOT NULL DEFAULT 0,
            damages_description     TEXT NOT NULL DEFAULT '',
            has_evidence            INTEGER NOT NULL DEFAULT 0,
            evidence_description    TEXT NOT NULL DEFAULT '',
            preferred_action        TEXT NOT NULL DEFAULT '',
            created_at              TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS feedback (
            id          TEXT PRIMARY KEY,
            name        TEXT,
            email       TEXT,
            type        TEXT NOT NULL,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS account_requests (
            id              TEXT PRIMARY KEY,
            first_name      TEXT NOT NULL DEFAULT '',
            middle_initial  TEXT NOT NULL DEFAULT '',
            last_name       TEXT NOT NULL DEFAULT '',
            contact_number  TEXT NOT NULL DEFAULT '',
            email           TEXT NOT NULL UNIQUE,
            address         TEXT NOT NULL DEFAULT '',
            password_digest TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS users (
            id              TEXT PRIMARY KEY,
            email           TEXT NOT NULL UNIQUE,
            password_digest TEXT NOT NULL,
            first_name      TEXT NOT NULL DEFAULT '',
            middle_initial  TEXT NOT NULL DEFAULT '',
            last_name       TEXT NOT NULL DEFAULT '',
            contact_number  TEXT NOT NULL DEFAULT '',
            address         TEXT NOT NULL DEFAULT '',
            role            TEXT NOT NULL DEFAULT 'user',
            created_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_incident_reports_user
            ON incident_reports(user_id);

        CREATE INDEX IF NOT EXISTS idx_incident_reports_created
            ON incident_reports(created_at);

        CREATE INDEX IF NOT EXISTS idx_feedback_created
            ON feedback(created_at);
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
