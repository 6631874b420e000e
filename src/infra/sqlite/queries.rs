use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use crate::domain::entities::account::{AccountRequest, NewAccountRequest, NewUser, Role, UserProfile};
use crate::domain::entities::credential::PasswordDigest;
use crate::domain::entities::feedback::{Feedback, NewFeedback};
use crate::domain::entities::incident::{IncidentReport, NewIncidentReport};
use crate::infra::sqlite::schema::open_connection;

const INCIDENT_COLUMNS: &str = "id, user_id, full_name, address, contact_number, datetime, \
     location, type, description, suspects, has_witnesses, witness_info, \
     reported_to_authorities, authorities_info, damages_or_injuries, damages_description, \
     has_evidence, evidence_description, preferred_action, created_at";

const FEEDBACK_COLUMNS: &str = "id, name, email, type, message, created_at";

const REQUEST_COLUMNS: &str = "id, first_name, middle_initial, last_name, contact_number, \
     email, address, password_digest, created_at";

const USER_COLUMNS: &str = "id, email, first_name, middle_initial, last_name, contact_number, \
     address, role, created_at";

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn timestamp_now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn incident_from_row(row: &Row<'_>) -> rusqlite::Result<IncidentReport> {
    Ok(IncidentReport {
        id: row.get(0)?,
        user_id: row.get(1)?,
        full_name: row.get(2)?,
        address: row.get(3)?,
        contact_number: row.get(4)?,
        datetime: row.get(5)?,
        location: row.get(6)?,
        incident_type: row.get(7)?,
        description: row.get(8)?,
        suspects: row.get(9)?,
        has_witnesses: row.get(10)?,
        witness_info: row.get(11)?,
        reported_to_authorities: row.get(12)?,
        authorities_info: row.get(13)?,
        damages_or_injuries: row.get(14)?,
        damages_description: row.get(15)?,
        has_evidence: row.get(16)?,
        evidence_description: row.get(17)?,
        preferred_action: row.get(18)?,
        created_at: row.get(19)?,
    })
}

fn feedback_from_row(row: &Row<'_>) -> rusqlite::Result<Feedback> {
    Ok(Feedback {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        feedback_type: row.get(3)?,
        message: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn request_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRequest> {
    let digest: String = row.get(7)?;
    Ok(AccountRequest {
        id: row.get(0)?,
        first_name: row.get(1)?,
        middle_initial: row.get(2)?,
        last_name: row.get(3)?,
        contact_number: row.get(4)?,
        email: row.get(5)?,
        address: row.get(6)?,
        password: PasswordDigest::from_stored(digest),
        created_at: row.get(8)?,
    })
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserProfile> {
    let role: String = row.get(7)?;
    Ok(UserProfile {
        id: row.get(0)?,
        email: row.get(1)?,
        first_name: row.get(2)?,
        middle_initial: row.get(3)?,
        last_name: row.get(4)?,
        contact_number: row.get(5)?,
        address: row.get(6)?,
        // Unknown claims fall back to the unprivileged role.
        role: role.parse().unwrap_or(Role::Resident),
        created_at: row.get(8)?,
    })
}

pub fn insert_incident(
    db_path: &Path,
    user_id: Option<&str>,
    report: &NewIncidentReport,
) -> Result<IncidentReport> {
    let conn = open_connection(db_path)?;
    let id = new_record_id();
    let created_at = timestamp_now();

    conn.execute(
        &format!(
            "INSERT INTO incident_reports({INCIDENT_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                     ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)"
        ),
        params![
            id,
            user_id,
            report.full_name.trim(),
            report.address.trim(),
            report.contact_number.trim(),
            report.datetime.trim(),
            report.location.trim(),
            report.incident_type.trim(),
            report.description.trim(),
            report.suspects.trim(),
            report.has_witnesses,
            report.witness_info.trim(),
            report.reported_to_authorities,
            report.authorities_info.trim(),
            report.damages_or_injuries,
            report.damages_description.trim(),
            report.has_evidence,
            report.evidence_description.trim(),
            report.preferred_action.trim(),
            created_at,
        ],
    )
    .context("failed to insert incident report")?;

    get_incident(db_path, &id)?.context("inserted incident report not found")
}

pub fn list_incidents(db_path: &Path, user_id: Option<&str>) -> Result<Vec<IncidentReport>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {INCIDENT_COLUMNS}
             FROM incident_reports
             WHERE (?1 IS NULL OR user_id = ?1)
             ORDER BY created_at DESC, rowid DESC"
        ))
        .context("failed to prepare incident report query")?;

    let reports = stmt
        .query_map(params![user_id], incident_from_row)
        .context("failed to query incident reports")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read incident report rows")?;
    Ok(reports)
}

pub fn get_incident(db_path: &Path, id: &str) -> Result<Option<IncidentReport>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!("SELECT {INCIDENT_COLUMNS} FROM incident_reports WHERE id = ?1"),
        [id],
        incident_from_row,
    )
    .optional()
    .context("failed to load incident report")
}

pub fn delete_incident(db_path: &Path, id: &str) -> Result<usize> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM incident_reports WHERE id = ?1", [id])
        .context("failed to delete incident report")
}

pub fn insert_feedback(db_path: &Path, feedback: &NewFeedback) -> Result<Feedback> {
    let conn = open_connection(db_path)?;
    let id = new_record_id();
    let created_at = timestamp_now();

    conn.execute(
        &format!("INSERT INTO feedback({FEEDBACK_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
        params![
            id,
            non_empty(&feedback.name),
            non_empty(&feedback.email),
            feedback.feedback_type.trim(),
            feedback.message.trim(),
            created_at,
        ],
    )
    .context("failed to insert feedback")?;

    Ok(Feedback {
        id,
        name: non_empty(&feedback.name).map(str::to_string),
        email: non_empty(&feedback.email).map(str::to_string),
        feedback_type: feedback.feedback_type.trim().to_string(),
        message: feedback.message.trim().to_string(),
        created_at,
    })
}

pub fn list_feedback(db_path: &Path) -> Result<Vec<Feedback>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {FEEDBACK_COLUMNS}
             FROM feedback
             ORDER BY created_at DESC, rowid DESC"
        ))
        .context("failed to prepare feedback query")?;

    let feedback = stmt
        .query_map([], feedback_from_row)
        .context("failed to query feedback")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read feedback rows")?;
    Ok(feedback)
}

pub fn delete_feedback(db_path: &Path, id: &str) -> Result<usize> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM feedback WHERE id = ?1", [id])
        .context("failed to delete feedback")
}

pub fn insert_account_request(
    db_path: &Path,
    request: &NewAccountRequest,
    password: &PasswordDigest,
) -> Result<AccountRequest> {
    let conn = open_connection(db_path)?;
    let id = new_record_id();
    let created_at = timestamp_now();

    conn.execute(
        &format!(
            "INSERT INTO account_requests({REQUEST_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
        ),
        params![
            id,
            request.first_name.trim(),
            request.middle_initial.trim(),
            request.last_name.trim(),
            request.contact_number.trim(),
            request.email.trim(),
            request.address.trim(),
            password.as_str(),
            created_at,
        ],
    )
    .context("failed to insert account request")?;

    get_account_request(db_path, &id)?.context("inserted account request not found")
}

pub fn list_account_requests(db_path: &Path) -> Result<Vec<AccountRequest>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {REQUEST_COLUMNS}
             FROM account_requests
             ORDER BY created_at DESC, rowid DESC"
        ))
        .context("failed to prepare account request query")?;

    let requests = stmt
        .query_map([], request_from_row)
        .context("failed to query account requests")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read account request rows")?;
    Ok(requests)
}

pub fn get_account_request(db_path: &Path, id: &str) -> Result<Option<AccountRequest>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!("SELECT {REQUEST_COLUMNS} FROM account_requests WHERE id = ?1"),
        [id],
        request_from_row,
    )
    .optional()
    .context("failed to load account request")
}

pub fn find_account_request_by_email(db_path: &Path, email: &str) -> Result<Option<AccountRequest>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!(
            "SELECT {REQUEST_COLUMNS} FROM account_requests WHERE lower(email) = lower(?1)"
        ),
        [email.trim()],
        request_from_row,
    )
    .optional()
    .context("failed to look up account request by email")
}

pub fn delete_account_request(db_path: &Path, id: &str) -> Result<usize> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM account_requests WHERE id = ?1", [id])
        .context("failed to delete account request")
}

pub fn insert_user(db_path: &Path, user: &NewUser) -> Result<UserProfile> {
    let conn = open_connection(db_path)?;
    let id = new_record_id();
    let created_at = timestamp_now();

    conn.execute(
        "INSERT INTO users(id, email, password_digest, first_name, middle_initial, last_name,
                           contact_number, address, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            id,
            user.email.trim(),
            user.password.as_str(),
            user.first_name.trim(),
            user.middle_initial.trim(),
            user.last_name.trim(),
            user.contact_number.trim(),
            user.address.trim(),
            user.role.as_str(),
            created_at,
        ],
    )
    .context("failed to insert user")?;

    get_user(db_path, &id)?.context("inserted user not found")
}

pub fn list_users(db_path: &Path) -> Result<Vec<UserProfile>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {USER_COLUMNS}
             FROM users
             ORDER BY created_at DESC, rowid DESC"
        ))
        .context("failed to prepare user query")?;

    let users = stmt
        .query_map([], user_from_row)
        .context("failed to query users")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to read user rows")?;
    Ok(users)
}

pub fn get_user(db_path: &Path, id: &str) -> Result<Option<UserProfile>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
        [id],
        user_from_row,
    )
    .optional()
    .context("failed to load user")
}

pub fn find_user_by_email(db_path: &Path, email: &str) -> Result<Option<UserProfile>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower(?1)"),
        [email.trim()],
        user_from_row,
    )
    .optional()
    .context("failed to look up user by email")
}

/// Profile and stored digest for a sign-in attempt.
pub fn load_credentials(db_path: &Path, email: &str) -> Result<Option<(UserProfile, PasswordDigest)>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!(
            "SELECT {USER_COLUMNS}, password_digest FROM users WHERE lower(email) = lower(?1)"
        ),
        [email.trim()],
        |row| {
            let profile = user_from_row(row)?;
            let digest: String = row.get(9)?;
            Ok((profile, PasswordDigest::from_stored(digest)))
        },
    )
    .optional()
    .context("failed to load credentials")
}

pub fn delete_user(db_path: &Path, id: &str) -> Result<usize> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM users WHERE id = ?1", [id])
        .context("failed to delete user")
}
