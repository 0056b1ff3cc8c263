//! Study session log models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::BreakPace;

/// A timed study session about to be logged.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudySession {
    pub owner: String,
    pub pace: BreakPace,
    pub planned_focus_blocks: u32,
    pub completed_focus_blocks: u32,
    /// Minutes spent in completed focus blocks
    pub focus_minutes: u32,
    pub started_at: Timestamp,
    pub ended_at: Timestamp,
}

/// A logged study session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudySession {
    pub id: u64,
    pub owner: String,
    pub pace: BreakPace,
    pub planned_focus_blocks: u32,
    pub completed_focus_blocks: u32,
    pub focus_minutes: u32,
    pub started_at: Timestamp,
    pub ended_at: Timestamp,
}

impl StudySession {
    /// Whether every planned focus block was completed.
    pub fn finished(&self) -> bool {
        self.completed_focus_blocks >= self.planned_focus_blocks
    }
}

/// Sessions an owner logged over the last week, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyStats {
    pub owner: String,
    /// Start of the window (UTC)
    pub since: Timestamp,
    pub sessions: Vec<StudySession>,
}

impl WeeklyStats {
    pub fn total_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn finished_sessions(&self) -> usize {
        self.sessions.iter().filter(|s| s.finished()).count()
    }

    pub fn total_focus_blocks(&self) -> u32 {
        self.sessions.iter().map(|s| s.completed_focus_blocks).sum()
    }

    pub fn total_focus_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.focus_minutes).sum()
    }
}
