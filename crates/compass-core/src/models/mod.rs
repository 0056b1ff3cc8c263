//! Data models for derived plans and saved plans.
//!
//! [`Plan`] is the read-only artifact produced by the deriver at the end of a
//! conversation. It carries no timestamps, so deriving twice from the same
//! answers yields equal plans. [`SavedPlan`] wraps a plan with the storage
//! metadata added when a host persists it. [`StudySession`] records one run
//! of the session timer.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] and format as markdown.

pub mod plan;
pub mod saved;
pub mod session;
pub mod style;

#[cfg(test)]
mod tests;

pub use plan::{FocusArea, Plan, Profile, Technique, TimelineWeek};
pub use saved::{SavedPlan, SavedPlanSummary};
pub use session::{NewStudySession, StudySession, WeeklyStats};
pub use style::{BreakPace, LearningStyle};
