//! Cursor over the ordered question sequence.

use std::collections::HashSet;

use super::question::{default_questions, Question};
use crate::error::{CompassError, Result};

/// Walks a fixed, ordered list of questions one answer at a time.
///
/// The sequencer only owns the cursor. Answers are kept elsewhere, so
/// [`QuestionSequencer::reset`] touches nothing but the cursor.
#[derive(Debug, Clone)]
pub struct QuestionSequencer {
    questions: Vec<Question>,
    cursor: usize,
}

impl QuestionSequencer {
    /// Creates a sequencer over a custom question list.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::InvalidInput` if the list is empty, a key is
    /// blank, or two questions share a key.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(CompassError::invalid_input("questions")
                .with_reason("at least one question is required"));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.key.trim().is_empty() {
                return Err(CompassError::invalid_input("questions")
                    .with_reason("question keys must not be blank"));
            }
            if !seen.insert(question.key.as_str()) {
                return Err(CompassError::invalid_input("questions")
                    .with_reason(format!("duplicate question key '{}'", question.key)));
            }
        }

        Ok(Self {
            questions,
            cursor: 0,
        })
    }

    /// The question awaiting an answer.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is complete. Callers check
    /// [`is_complete`](Self::is_complete) first.
    pub fn current(&self) -> &Question {
        match self.questions.get(self.cursor) {
            Some(question) => question,
            None => panic!(
                "question sequencer exhausted: cursor {} of {}",
                self.cursor,
                self.questions.len()
            ),
        }
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn try_current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Moves past the current question.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is already complete.
    pub fn advance(&mut self) {
        assert!(
            !self.is_complete(),
            "question sequencer exhausted: cannot advance past question {}",
            self.questions.len()
        );
        self.cursor += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.questions.len()
    }

    /// Rewinds to the first question.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of questions answered so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionSequencer {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            cursor: 0,
        }
    }
}
