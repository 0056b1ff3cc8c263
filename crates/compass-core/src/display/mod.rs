//! Markdown formatting for plans, saved plans, session schedules and the
//! study session log.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get newtype wrappers so each context
//! can format the same data differently:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Plan, Event)   │───▶│ (SavedPlans,    │───▶│ (termimad / MCP │
//! │                 │    │  SaveResult)    │    │  text content)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use compass_core::{conversation::AnswerRecord, deriver::derive};
//!
//! let plan = derive(&AnswerRecord::new());
//! let markdown = plan.to_string();
//! assert!(markdown.starts_with("# Study Recovery Plan for Student"));
//! assert!(markdown.contains("## Timeline"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{SavedPlans, SessionSchedule};
pub use datetime::LocalDateTime;
pub use results::{DeleteResult, SaveResult};
pub use status::OperationStatus;
