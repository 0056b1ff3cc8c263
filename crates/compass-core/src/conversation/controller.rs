//! Conversation state machine driving the question sequence.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{AnswerRecord, AnswerStore, Question, QuestionSequencer};
use crate::{deriver, error::Result, models::Plan};

/// Phase of a conversation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConversationPhase {
    /// Questions remain to be answered
    Collecting,
    /// Every question is answered and a plan has been derived
    Complete,
}

/// What the host should do after a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControllerEvent {
    /// Ask the next question
    Prompt { text: String },
    /// The conversation finished; present the plan
    Plan { plan: Box<Plan> },
    /// The submission was blank or arrived after completion
    Ignored,
}

/// Snapshot of a conversation's progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationState {
    /// Number of questions answered
    pub cursor: usize,
    pub answers: AnswerRecord,
}

/// Orchestrates the sequencer, answer store and deriver for one
/// conversation.
///
/// The controller performs no I/O. Rendering and persistence belong to the
/// host, which acts on the returned [`ControllerEvent`].
///
/// ```rust
/// use compass_core::conversation::{ControllerEvent, ConversationController};
///
/// let mut controller = ConversationController::default();
/// assert!(controller.current_prompt().is_some());
///
/// assert_eq!(controller.submit("   "), ControllerEvent::Ignored);
/// assert!(matches!(controller.submit("Sam, 10th"), ControllerEvent::Prompt { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConversationController {
    sequencer: QuestionSequencer,
    answers: AnswerStore,
    plan: Option<Plan>,
}

impl ConversationController {
    /// Creates a controller over a custom question list.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::InvalidInput` when the list is empty or keys
    /// are blank or repeated.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        Ok(Self {
            sequencer: QuestionSequencer::new(questions)?,
            answers: AnswerStore::new(),
            plan: None,
        })
    }

    /// Records an answer to the current question.
    ///
    /// Blank input, and any input once the conversation is complete, is
    /// ignored without changing state.
    pub fn submit(&mut self, raw: &str) -> ControllerEvent {
        if self.phase() == ConversationPhase::Complete {
            debug!("Ignoring submission: conversation already complete");
            return ControllerEvent::Ignored;
        }
        if raw.trim().is_empty() {
            debug!("Ignoring blank submission");
            return ControllerEvent::Ignored;
        }

        let key = self.sequencer.current().key.clone();
        debug!("Recording answer for '{key}'");
        self.answers.set(key, raw);
        self.sequencer.advance();

        match self.sequencer.try_current() {
            Some(next) => ControllerEvent::Prompt {
                text: next.prompt.clone(),
            },
            None => {
                let plan = deriver::derive(&self.answers.all());
                debug!(
                    "Conversation complete after {} answers; derived plan for {}",
                    self.answers.len(),
                    plan.profile.name
                );
                self.plan = Some(plan.clone());
                ControllerEvent::Plan {
                    plan: Box::new(plan),
                }
            }
        }
    }

    /// Discards all progress and returns to the first question.
    pub fn reset(&mut self) {
        debug!("Resetting conversation");
        self.sequencer.reset();
        self.answers = AnswerStore::new();
        self.plan = None;
    }

    pub fn phase(&self) -> ConversationPhase {
        if self.sequencer.is_complete() {
            ConversationPhase::Complete
        } else {
            ConversationPhase::Collecting
        }
    }

    /// Prompt of the question awaiting an answer, or `None` once complete.
    pub fn current_prompt(&self) -> Option<&str> {
        self.sequencer
            .try_current()
            .map(|question| question.prompt.as_str())
    }

    /// The derived plan, once the conversation is complete.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Answered and total question counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.sequencer.cursor(), self.sequencer.len())
    }

    pub fn state(&self) -> ConversationState {
        ConversationState {
            cursor: self.sequencer.cursor(),
            answers: self.answers.all(),
        }
    }
}
