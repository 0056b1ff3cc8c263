//! Study session log queries.

use jiff::{SignedDuration, Timestamp};
use rusqlite::{params, types::Type, Row};

use super::{format_timestamp, normalize_owner, parse_timestamp};
use crate::{
    error::{CompassError, DatabaseResultExt, Result},
    models::{BreakPace, NewStudySession, StudySession, WeeklyStats},
};

/// Length of the window covered by [`super::Database::weekly_stats`].
pub const STATS_WINDOW: SignedDuration = SignedDuration::from_hours(7 * 24);

const INSERT_SESSION_SQL: &str = "INSERT INTO study_sessions \
     (owner, pace, planned_focus_blocks, completed_focus_blocks, focus_minutes, started_at, ended_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_SESSION_SQL: &str = "SELECT id, owner, pace, planned_focus_blocks, completed_focus_blocks, \
     focus_minutes, started_at, ended_at FROM study_sessions WHERE id = ?1";
const SELECT_SESSIONS_SINCE_SQL: &str = "SELECT id, owner, pace, planned_focus_blocks, completed_focus_blocks, \
     focus_minutes, started_at, ended_at FROM study_sessions \
     WHERE owner = ?1 AND started_at >= ?2 \
     ORDER BY started_at DESC, id DESC";

impl super::Database {
    /// Logs a finished or interrupted timer run.
    pub fn record_session(&mut self, session: &NewStudySession) -> Result<StudySession> {
        let owner = normalize_owner(&session.owner)?;
        if session.completed_focus_blocks > session.planned_focus_blocks {
            return Err(CompassError::invalid_input("completed_focus_blocks").with_reason(format!(
                "{} exceeds the {} planned",
                session.completed_focus_blocks, session.planned_focus_blocks
            )));
        }
        if session.ended_at < session.started_at {
            return Err(CompassError::invalid_input("ended_at").with_reason("is before started_at"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_SESSION_SQL,
            params![
                owner,
                session.pace.as_str(),
                session.planned_focus_blocks,
                session.completed_focus_blocks,
                session.focus_minutes,
                format_timestamp(&session.started_at),
                format_timestamp(&session.ended_at),
            ],
        )
        .db_context("Failed to record study session")?;

        let id = tx.last_insert_rowid();
        let recorded = tx
            .query_row(SELECT_SESSION_SQL, params![id], session_from_row)
            .db_context("Failed to read back study session")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(recorded)
    }

    /// Sessions an owner started at or after `since`, newest first.
    pub fn sessions_since(&self, owner: &str, since: Timestamp) -> Result<Vec<StudySession>> {
        let owner = normalize_owner(owner)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_SESSIONS_SINCE_SQL)
            .db_context("Failed to prepare query")?;

        let sessions = stmt
            .query_map(params![owner, format_timestamp(&since)], session_from_row)
            .db_context("Failed to query study sessions")?
            .collect::<rusqlite::Result<_>>()
            .db_context("Failed to read study session rows")?;

        Ok(sessions)
    }

    /// Sessions from the seven days before `now`.
    pub fn weekly_stats(&self, owner: &str, now: Timestamp) -> Result<WeeklyStats> {
        let since = now.checked_sub(STATS_WINDOW).unwrap_or(Timestamp::MIN);
        let sessions = self.sessions_since(owner, since)?;

        Ok(WeeklyStats {
            owner: owner.trim().to_string(),
            since,
            sessions,
        })
    }
}

fn session_from_row(row: &Row<'_>) -> rusqlite::Result<StudySession> {
    let pace: String = row.get(2)?;

    Ok(StudySession {
        id: row.get::<_, i64>(0)? as u64,
        owner: row.get(1)?,
        pace: pace
            .parse::<BreakPace>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?,
        planned_focus_blocks: row.get(3)?,
        completed_focus_blocks: row.get(4)?,
        focus_minutes: row.get(5)?,
        started_at: parse_timestamp(row, 6)?,
        ended_at: parse_timestamp(row, 7)?,
    })
}
