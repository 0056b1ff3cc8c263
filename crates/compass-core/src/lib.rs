//! Core library for the Compass study-recovery planning assistant.
//!
//! Compass interviews a student with a short scripted conversation and turns
//! the answers into a four-week recovery plan: how to split daily study time
//! across subjects, which study technique suits them, and how often to take
//! breaks.
//!
//! # Layout
//!
//! - [`conversation`]: question sequence, answer storage and the controller
//!   state machine hosts drive with `submit` / `reset`
//! - [`deriver`]: pure, rule-based `answers → Plan` derivation
//! - [`models`]: plan, saved-plan and study-session data types
//! - [`display`]: markdown formatting for all of the above
//! - [`timer`]: Pomodoro-style session timer configured from a plan
//! - [`db`] / [`store`]: SQLite persistence of saved plans and the study
//!   session log
//!
//! The conversation and deriver are synchronous and do no I/O. Hosts render
//! and persist the [`Plan`] they are handed.
//!
//! # Quick Start
//!
//! ```rust
//! use compass_core::{ControllerEvent, ConversationController};
//!
//! let mut controller = ConversationController::default();
//! let answers = ["Sam, 10th", "Math, Physics", "June 1", "4", "8", "Visual"];
//!
//! let mut last = ControllerEvent::Ignored;
//! for answer in answers {
//!     last = controller.submit(answer);
//! }
//!
//! let ControllerEvent::Plan { plan } = last else { unreachable!() };
//! assert_eq!(plan.focus_areas.len(), 2);
//! println!("{plan}");
//! ```

pub mod conversation;
pub mod db;
pub mod deriver;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod timer;

// Re-export commonly used types
pub use conversation::{
    AnswerRecord, ControllerEvent, ConversationController, ConversationPhase, Question,
};
pub use db::Database;
pub use deriver::derive;
pub use display::{DeleteResult, OperationStatus, SaveResult, SavedPlans, SessionSchedule};
pub use error::{CompassError, Result};
pub use models::{
    BreakPace, LearningStyle, NewStudySession, Plan, SavedPlan, SavedPlanSummary, StudySession,
    WeeklyStats,
};
pub use store::{PlanStore, PlanStoreBuilder};
pub use timer::{Phase, SessionTimer, TimerSettings, MAX_FOCUS_BLOCKS};
