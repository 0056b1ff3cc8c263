//! Async facade over the saved plan and study session database.
//!
//! [`PlanStore`] hands each operation to tokio's blocking pool with its own
//! SQLite connection, so async hosts (the CLI and the MCP server) never block
//! their executor on disk I/O.
//!
//! ```rust,no_run
//! use compass_core::{conversation::AnswerRecord, deriver::derive, PlanStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlanStoreBuilder::new()
//!     .with_database_path(Some("compass.db"))
//!     .build()
//!     .await?;
//!
//! let answers: AnswerRecord = [("subjects", "Math")].into_iter().collect();
//! let plan = derive(&answers);
//! store.save_plan("sam@example.com", &plan, &answers).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use tokio::task;

use crate::{
    conversation::AnswerRecord,
    db::Database,
    error::{CompassError, Result},
    models::{NewStudySession, Plan, SavedPlan, SavedPlanSummary, StudySession, WeeklyStats},
};

pub mod builder;

pub use builder::PlanStoreBuilder;

/// Persistent storage for derived plans.
#[derive(Debug, Clone)]
pub struct PlanStore {
    db_path: PathBuf,
}

impl PlanStore {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Saves a plan for an owner, replacing any earlier one.
    pub async fn save_plan(
        &self,
        owner: &str,
        plan: &Plan,
        answers: &AnswerRecord,
    ) -> Result<SavedPlan> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();
        let plan = plan.clone();
        let answers = answers.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_plan(&owner, &plan, &answers)
        })
        .await
        .map_err(CompassError::join)?
    }

    /// Retrieves the plan saved for an owner, if any.
    pub async fn get_plan(&self, owner: &str) -> Result<Option<SavedPlan>> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(&owner)
        })
        .await
        .map_err(CompassError::join)?
    }

    /// Retrieves the plan saved for an owner.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::PlanNotFound` when the owner has no plan.
    pub async fn require_plan(&self, owner: &str) -> Result<SavedPlan> {
        self.get_plan(owner)
            .await?
            .ok_or_else(|| CompassError::PlanNotFound {
                owner: owner.trim().to_string(),
            })
    }

    /// Lists saved plans, most recently updated first.
    pub async fn list_plans(&self) -> Result<Vec<SavedPlanSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(CompassError::join)?
    }

    /// Deletes an owner's plan.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::PlanNotFound` when the owner has no plan.
    pub async fn delete_plan(&self, owner: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();

        let deleted = task::spawn_blocking({
            let owner = owner.clone();
            move || {
                let mut db = Database::new(&db_path)?;
                db.delete_plan(&owner)
            }
        })
        .await
        .map_err(CompassError::join)??;

        if deleted {
            Ok(())
        } else {
            Err(CompassError::PlanNotFound {
                owner: owner.trim().to_string(),
            })
        }
    }

    /// Logs a timer run.
    pub async fn record_session(&self, session: NewStudySession) -> Result<StudySession> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_session(&session)
        })
        .await
        .map_err(CompassError::join)?
    }

    /// Sessions an owner logged over the last seven days.
    pub async fn weekly_stats(&self, owner: &str) -> Result<WeeklyStats> {
        let db_path = self.db_path.clone();
        let owner = owner.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.weekly_stats(&owner, Timestamp::now())
        })
        .await
        .map_err(CompassError::join)?
    }
}
