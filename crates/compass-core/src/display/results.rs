//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::SavedPlan;

/// Outcome of saving a plan.
pub struct SaveResult {
    pub saved: SavedPlan,
}

impl SaveResult {
    pub fn new(saved: SavedPlan) -> Self {
        Self { saved }
    }
}

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved plan for {}", self.saved.owner)?;
        writeln!(f)?;
        write!(f, "{}", self.saved.plan)
    }
}

/// Outcome of deleting a saved plan.
pub struct DeleteResult {
    pub owner: String,
}

impl DeleteResult {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted saved plan for {}", self.owner)
    }
}
