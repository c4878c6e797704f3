//! Database query helpers shared by the check commands.
//!
//! These functions accept `&Connection` so tests can run them against
//! in-memory databases.

use anyhow::Result;
use rusqlite::{self, Connection, OptionalExtension};
use serde::Serialize;

use super::queries;

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserMessageRow {
    pub user_id: String,
    pub folder: Option<String>,
    /// Stored as 0/1 in the database; printed verbatim, not as a boolean.
    pub is_focused: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub level: String,
    pub source: String,
    pub message: String,
    pub exception: Option<String>,
}

// ============================================================================
// Query Helpers
// ============================================================================

/// Query the most recent UserMessages rows, newest first.
pub fn query_recent_user_messages(
    conn: &Connection,
    limit: u32,
) -> Result<Vec<UserMessageRow>> {
    let mut stmt = conn.prepare(queries::RECENT_USER_MESSAGES)?;
    let rows = stmt.query_map([limit as i64], |row: &rusqlite::Row| {
        Ok(UserMessageRow {
            user_id: row.get(0)?,
            folder: row.get(1)?,
            is_focused: row.get(2)?,
        })
    })?;

    // A row that fails to map is an error, not a silent skip: the dump must
    // print one block per row or report the failure.
    Ok(rows.collect::<rusqlite::Result<Vec<UserMessageRow>>>()?)
}

/// Query the most recent server log entry, if any.
pub fn query_latest_log(conn: &Connection) -> Result<Option<LogRow>> {
    let mut stmt = conn.prepare(queries::LATEST_LOG)?;
    Ok(stmt
        .query_row([], |row: &rusqlite::Row| {
            Ok(LogRow {
                id: row.get(0)?,
                date: row.get(1)?,
                level: row.get(2)?,
                source: row.get(3)?,
                message: row.get(4)?,
                exception: row.get(5)?,
            })
        })
        .optional()?)
}
