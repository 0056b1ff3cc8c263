//! Scripted conversation that collects a student's answers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Sequencer    │    │  Answer Store   │    │     Deriver     │
//! │ (which question)│    │ (what was said) │    │ (answers → plan)│
//! └────────▲────────┘    └────────▲────────┘    └────────▲────────┘
//!          └──────────────────────┼──────────────────────┘
//!                       ┌─────────┴─────────┐
//!                       │    Controller     │◀── submit / reset
//!                       └───────────────────┘
//! ```
//!
//! - [`question`]: question type and the built-in sequence
//! - [`sequencer`]: cursor over the sequence
//! - [`answers`]: insertion-ordered answer storage
//! - [`controller`]: the two-phase state machine hosts talk to
//!
//! The controller owns every piece of conversation state. There are no
//! globals, so a host can run several conversations side by side.

pub mod answers;
pub mod controller;
pub mod question;
pub mod sequencer;

pub use answers::{Answer, AnswerRecord, AnswerStore};
pub use controller::{ControllerEvent, ConversationController, ConversationPhase, ConversationState};
pub use question::{default_questions, keys, Question};
pub use sequencer::QuestionSequencer;
