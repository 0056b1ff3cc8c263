//! Database schema initialization and migrations.

use jiff::Timestamp;
use rusqlite::params;

use super::format_timestamp;
use crate::error::{DatabaseResultExt, Result};

const BACKFILL_SUMMARY_SQL: &str = "UPDATE saved_plans SET \
     student_name = COALESCE(json_extract(plan_data, '$.profile.name'), ''), \
     subjects_data = COALESCE(( \
         SELECT json_group_array(json_extract(value, '$.subject')) \
         FROM json_each(plan_data, '$.focus_areas') \
     ), '[]') \
     WHERE json_valid(plan_data)";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before answers were stored lack the column
        if !self.has_column("answers_data")? {
            self.connection
                .execute(
                    "ALTER TABLE saved_plans ADD COLUMN answers_data TEXT NOT NULL DEFAULT '[]'",
                    [],
                )
                .db_context("Failed to add answers_data column to saved_plans table")?;
        }

        if !self.has_column("student_name")? {
            self.add_summary_columns()?;
        }

        Ok(())
    }

    fn has_column(&self, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('saved_plans') WHERE name = ?1",
                params![column],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect saved_plans columns")
    }

    /// Adds the listing columns, fills them from the plan JSON and rewrites
    /// timestamps to the fixed-width format.
    fn add_summary_columns(&self) -> Result<()> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin migration")?;

        tx.execute_batch(
            "ALTER TABLE saved_plans ADD COLUMN student_name TEXT NOT NULL DEFAULT '';
             ALTER TABLE saved_plans ADD COLUMN subjects_data TEXT NOT NULL DEFAULT '[]';",
        )
        .db_context("Failed to add summary columns to saved_plans table")?;

        tx.execute(BACKFILL_SUMMARY_SQL, [])
            .db_context("Failed to backfill saved plan summaries")?;

        let rows: Vec<(i64, String, String)> = {
            let mut stmt = tx
                .prepare("SELECT id, created_at, updated_at FROM saved_plans")
                .db_context("Failed to prepare timestamp scan")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
                .db_context("Failed to scan saved plan timestamps")?
                .collect::<rusqlite::Result<_>>()
                .db_context("Failed to read saved plan timestamps")?;
            rows
        };

        for (id, created_at, updated_at) in rows {
            // Unparseable values are left for the row readers to report.
            let (Ok(created), Ok(updated)) =
                (created_at.parse::<Timestamp>(), updated_at.parse::<Timestamp>())
            else {
                continue;
            };
            tx.execute(
                "UPDATE saved_plans SET created_at = ?2, updated_at = ?3 WHERE id = ?1",
                params![id, format_timestamp(&created), format_timestamp(&updated)],
            )
            .db_context("Failed to rewrite saved plan timestamps")?;
        }

        tx.commit().db_context("Failed to commit migration")
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::NamedTempFile;

    use crate::db::Database;

    #[test]
    fn test_adds_answers_column_to_old_table() {
        let file = NamedTempFile::new().expect("temp file");
        {
            let conn = Connection::open(file.path()).expect("open");
            conn.execute_batch(
                "CREATE TABLE saved_plans (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    owner TEXT NOT NULL UNIQUE,
                    plan_data TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .expect("create legacy table");
        }

        let db = Database::new(file.path()).expect("migrate");
        let count: i64 = db
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('saved_plans') WHERE name = 'answers_data'",
                [],
                |row| row.get(0),
            )
            .expect("inspect");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_backfills_summary_columns_and_timestamps() {
        let file = NamedTempFile::new().expect("temp file");
        {
            let conn = Connection::open(file.path()).expect("open");
            conn.execute_batch(
                r#"CREATE TABLE saved_plans (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    owner TEXT NOT NULL UNIQUE,
                    plan_data TEXT NOT NULL,
                    answers_data TEXT NOT NULL DEFAULT '[]',
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                INSERT INTO saved_plans (owner, plan_data, created_at, updated_at) VALUES
                    ('ana', '{"profile": {"name": "Ana"}, "focus_areas": [{"subject": "Biology"}, {"subject": "History"}]}',
                     '2026-03-01T10:00:00Z', '2026-03-02T10:00:00.5Z'),
                    ('broken', 'not json', '2026-03-01T10:00:00Z', '2026-03-01T10:00:00Z');"#,
            )
            .expect("create legacy table");
        }

        let db = Database::new(file.path()).expect("migrate");
        let summaries = db.list_plans().expect("list");

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].owner, "ana");
        assert_eq!(summaries[0].student_name, "Ana");
        assert_eq!(summaries[0].subjects, ["Biology", "History"]);
        assert_eq!(summaries[1].owner, "broken");
        assert_eq!(summaries[1].student_name, "");
        assert!(summaries[1].subjects.is_empty());

        let updated_at: String = db
            .connection
            .query_row(
                "SELECT updated_at FROM saved_plans WHERE owner = 'ana'",
                [],
                |row| row.get(0),
            )
            .expect("read timestamp");
        assert_eq!(updated_at, "2026-03-02T10:00:00.500000000Z");
    }

    #[test]
    fn test_initialization_is_idempotent() {
        let file = NamedTempFile::new().expect("temp file");
        Database::new(file.path()).expect("first open");
        Database::new(file.path()).expect("second open");
    }
}
