//! exmail-dbcheck library
//!
//! Exposes the database and command modules for tests.

pub mod commands;
pub mod db;
