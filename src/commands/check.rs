//! Check commands: dump recent user messages, show the latest log entry.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::db::{connection::open_db, helpers};

/// Separator printed after each message block.
const BLOCK_SEPARATOR: &str = "----------";

/// Render one user message row as the labeled three-line block.
///
/// Values are printed verbatim: the focused flag stays the stored integer
/// and a NULL folder prints as an empty value.
pub fn render_message_block(row: &helpers::UserMessageRow) -> String {
    format!(
        "User: {}\nFolder: {}\nFocused: {}\n{}",
        row.user_id,
        row.folder.as_deref().unwrap_or(""),
        row.is_focused,
        BLOCK_SEPARATOR,
    )
}

/// Render a log entry in the `[Date] Level - Source: Message` shape,
/// with the exception text on following lines when present.
pub fn render_log_entry(log: &helpers::LogRow) -> String {
    let mut out = format!(
        "[{}] {} - {}: {}",
        log.date, log.level, log.source, log.message
    );
    if let Some(exception) = log.exception.as_deref() {
        if !exception.is_empty() {
            out.push_str("\nException:\n");
            out.push_str(exception);
        }
    }
    out
}

/// Dump the most recent UserMessages rows.
pub fn messages(db: Option<&Path>, limit: u32, json: bool) -> Result<()> {
    let conn = open_db(db)?;
    let rows = helpers::query_recent_user_messages(&conn, limit)?;
    debug!(count = rows.len(), "queried recent user messages");

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", render_message_block(row));
        }
    }

    Ok(())
}

/// Show the most recent server log entry.
pub fn latest_log(db: Option<&Path>, json: bool) -> Result<()> {
    let conn = open_db(db)?;
    let log = helpers::query_latest_log(&conn)?;
    debug!(found = log.is_some(), "queried latest log entry");

    if json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    } else {
        match &log {
            Some(log) => println!("{}", render_log_entry(log)),
            None => println!("No log entries found."),
        }
    }

    Ok(())
}
