//! SQLite storage for saved plans and the study session log.
//!
//! Each owner has at most one saved plan. Plans and the answers they were
//! derived from are stored as JSON text. The student name and subject list
//! are copied into their own columns so listings never parse plan JSON.
//! Timestamps are written as fixed-width RFC 3339 UTC strings, which makes
//! text order match time order.

use std::path::Path;

use jiff::{fmt::temporal::DateTimePrinter, Timestamp};
use rusqlite::{types::Type, Connection, Row};

use crate::error::{CompassError, DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;
pub mod session_queries;

const TIMESTAMP_PRINTER: DateTimePrinter = DateTimePrinter::new().precision(Some(9));

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Formats a timestamp the way every timestamp column stores it.
fn format_timestamp(timestamp: &Timestamp) -> String {
    TIMESTAMP_PRINTER.timestamp_to_string(timestamp)
}

fn parse_timestamp(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn normalize_owner(owner: &str) -> Result<&str> {
    let owner = owner.trim();
    if owner.is_empty() {
        return Err(CompassError::invalid_input("owner").with_reason("must not be blank"));
    }
    Ok(owner)
}
