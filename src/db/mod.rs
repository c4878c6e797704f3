//! Database module for SQLite access to exchangemail.db.

pub mod connection;
pub mod helpers;
pub mod queries;
