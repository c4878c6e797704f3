//! SQL queries for exchangemail.db.

/// Query to get the most recent per-user message rows.
///
/// MessageId is the insert-order key, so descending order is recency order.
pub const RECENT_USER_MESSAGES: &str = r#"
SELECT
    UserId,
    Folder,
    IsFocused
FROM UserMessages
ORDER BY MessageId DESC
LIMIT ?1
"#;

/// Query to get the single most recent server log entry.
pub const LATEST_LOG: &str = r#"
SELECT
    Id,
    Date,
    Level,
    Source,
    Message,
    Exception
FROM Logs
ORDER BY Id DESC
LIMIT 1
"#;
