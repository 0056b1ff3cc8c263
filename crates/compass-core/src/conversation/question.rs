//! Question definitions and the built-in question sequence.

use serde::{Deserialize, Serialize};

/// Answer keys used by the built-in question sequence and read by the
/// deriver.
pub mod keys {
    pub const NAME_GRADE: &str = "name_grade";
    pub const SUBJECTS: &str = "subjects";
    pub const DEADLINES: &str = "deadlines";
    pub const STUDY_HOURS: &str = "studyHours";
    pub const STRESS_LEVEL: &str = "stressLevel";
    pub const LEARNING_STYLE: &str = "learningStyle";
}

/// A single scripted question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Unique key the answer is stored under
    pub key: String,

    /// Text shown to the student
    pub prompt: String,
}

impl Question {
    /// Creates a question from a key and prompt.
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}

/// Returns the built-in question sequence in the order it is asked.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            keys::NAME_GRADE,
            "Hi! Let's build your recovery plan. What's your name and grade? (e.g. \"Sam, 10th\")",
        ),
        Question::new(
            keys::SUBJECTS,
            "Which subjects do you need to catch up on? Separate them with commas.",
        ),
        Question::new(
            keys::DEADLINES,
            "Do you have any exams or deadlines coming up? When are they?",
        ),
        Question::new(
            keys::STUDY_HOURS,
            "How many hours a day can you realistically study?",
        ),
        Question::new(
            keys::STRESS_LEVEL,
            "On a scale of 1 to 10, how stressed do you feel about school right now?",
        ),
        Question::new(
            keys::LEARNING_STYLE,
            "How do you learn best: visual, auditory, kinesthetic, or a mix?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_questions_have_unique_keys() {
        let questions = default_questions();
        let keys: HashSet<_> = questions.iter().map(|q| q.key.as_str()).collect();
        assert_eq!(keys.len(), questions.len());
    }

    #[test]
    fn test_default_questions_order() {
        let order: Vec<_> = default_questions().into_iter().map(|q| q.key).collect();
        assert_eq!(
            order,
            [
                keys::NAME_GRADE,
                keys::SUBJECTS,
                keys::DEADLINES,
                keys::STUDY_HOURS,
                keys::STRESS_LEVEL,
                keys::LEARNING_STYLE,
            ]
        );
    }
}
