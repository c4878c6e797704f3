//! SQLite connection management for exchangemail.db.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default exchangemail.db path (the server's fixed data directory).
pub fn default_db_path() -> PathBuf {
    PathBuf::from("C:/ExchangeMailData/exchangemail.db")
}

/// Open a read-only connection to the mail database.
///
/// The tool never writes, so the connection is opened with the read-only
/// flag. A missing database file is an error rather than an empty create.
pub fn open_db(path: Option<&Path>) -> Result<Connection> {
    let db_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_db_path);

    Connection::open_with_flags(
        &db_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open mail database at {:?}", db_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(path.ends_with("exchangemail.db"));
    }

    #[test]
    fn test_open_db_missing_file_is_error() {
        // Read-only open must not create the file.
        let missing = Path::new("/nonexistent/exchangemail.db");
        assert!(open_db(Some(missing)).is_err());
        assert!(!missing.exists());
    }
}
