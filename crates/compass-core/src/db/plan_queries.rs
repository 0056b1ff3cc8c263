//! Saved plan queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::{format_timestamp, normalize_owner, parse_timestamp};
use crate::{
    conversation::AnswerRecord,
    error::{DatabaseResultExt, Result},
    models::{Plan, SavedPlan, SavedPlanSummary},
};

const UPSERT_PLAN_SQL: &str = "INSERT INTO saved_plans \
     (owner, plan_data, answers_data, student_name, subjects_data, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
     ON CONFLICT(owner) DO UPDATE SET \
     plan_data = excluded.plan_data, \
     answers_data = excluded.answers_data, \
     student_name = excluded.student_name, \
     subjects_data = excluded.subjects_data, \
     updated_at = excluded.updated_at";
const SELECT_PLAN_SQL: &str = "SELECT id, owner, plan_data, answers_data, created_at, updated_at FROM saved_plans WHERE owner = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, owner, student_name, subjects_data, updated_at \
     FROM saved_plans ORDER BY updated_at DESC, id DESC";
const DELETE_PLAN_SQL: &str = "DELETE FROM saved_plans WHERE owner = ?1";

impl super::Database {
    /// Saves a plan for an owner, replacing any plan they already have.
    ///
    /// The original `created_at` is kept when a plan is replaced.
    pub fn save_plan(
        &mut self,
        owner: &str,
        plan: &Plan,
        answers: &AnswerRecord,
    ) -> Result<SavedPlan> {
        let owner = normalize_owner(owner)?;
        let plan_data = serde_json::to_string(plan)?;
        let answers_data = serde_json::to_string(answers)?;
        let subjects_data = serde_json::to_string(&plan.subjects().collect::<Vec<_>>())?;
        let now = format_timestamp(&Timestamp::now());

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_PLAN_SQL,
            params![
                owner,
                plan_data,
                answers_data,
                plan.profile.name,
                subjects_data,
                now
            ],
        )
        .db_context("Failed to save plan")?;

        let saved = tx
            .query_row(SELECT_PLAN_SQL, params![owner], saved_plan_from_row)
            .db_context("Failed to read back saved plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(saved)
    }

    /// Retrieves the plan saved for an owner.
    pub fn get_plan(&self, owner: &str) -> Result<Option<SavedPlan>> {
        let owner = normalize_owner(owner)?;

        self.connection
            .query_row(SELECT_PLAN_SQL, params![owner], saved_plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists saved plans, most recently updated first.
    ///
    /// Reads only the summary columns, so a plan whose JSON no longer
    /// parses still shows up here.
    pub fn list_plans(&self) -> Result<Vec<SavedPlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], summary_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<_>>()
            .db_context("Failed to read plan rows")?;

        Ok(summaries)
    }

    /// Deletes the plan saved for an owner. Returns whether one existed.
    pub fn delete_plan(&mut self, owner: &str) -> Result<bool> {
        let owner = normalize_owner(owner)?;

        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![owner])
            .db_context("Failed to delete plan")?;

        Ok(deleted > 0)
    }
}

fn saved_plan_from_row(row: &Row<'_>) -> rusqlite::Result<SavedPlan> {
    let plan_data: String = row.get(2)?;
    let answers_data: String = row.get(3)?;

    Ok(SavedPlan {
        id: row.get::<_, i64>(0)? as u64,
        owner: row.get(1)?,
        plan: serde_json::from_str(&plan_data)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
        answers: serde_json::from_str(&answers_data)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        created_at: parse_timestamp(row, 4)?,
        updated_at: parse_timestamp(row, 5)?,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SavedPlanSummary> {
    let subjects_data: String = row.get(3)?;

    Ok(SavedPlanSummary {
        id: row.get::<_, i64>(0)? as u64,
        owner: row.get(1)?,
        student_name: row.get(2)?,
        subjects: serde_json::from_str(&subjects_data)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        updated_at: parse_timestamp(row, 4)?,
    })
}
