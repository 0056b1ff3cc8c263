//! Persisted plan models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;
use crate::conversation::AnswerRecord;

/// A plan stored for an owner, together with the answers it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlan {
    /// Row identifier
    pub id: u64,

    /// Identifier the plan is stored under (one plan per owner)
    pub owner: String,

    pub plan: Plan,

    #[serde(default)]
    pub answers: AnswerRecord,

    /// Timestamp of the first save (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the latest save (UTC)
    pub updated_at: Timestamp,
}

/// Compact view of a saved plan for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlanSummary {
    pub id: u64,
    pub owner: String,
    pub student_name: String,
    pub subjects: Vec<String>,
    pub updated_at: Timestamp,
}
