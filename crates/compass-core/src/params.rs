//! Parameter structures shared by the CLI and MCP interfaces.
//!
//! These types carry no framework attributes beyond serde. JSON schema
//! derives are added behind the `schema` feature, so only hosts that need
//! them (the MCP server) pay for schemars. The CLI converts its clap argument
//! structs into these with `From` impls.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    conversation::{Answer, AnswerRecord},
    error::{CompassError, Result},
    models::BreakPace,
    timer::MAX_FOCUS_BLOCKS,
};

/// Parameters for operations on an owner's saved plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Owner {
    /// Identifier the plan is stored under, such as an email address
    pub owner: String,
}

/// Parameters for answering the current question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitAnswer {
    /// Free-text answer to the question currently being asked
    pub text: String,
}

/// Parameters for deriving a plan directly from answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DerivePlan {
    /// Answers keyed by question: name_grade, subjects, deadlines,
    /// studyHours, stressLevel, learningStyle. Missing keys use defaults.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl DerivePlan {
    pub fn to_record(&self) -> AnswerRecord {
        AnswerRecord::from(self.answers.clone())
    }
}

/// Parameters for previewing a study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PreviewSession {
    /// Break pace: "standard" (default) or "frequent"
    #[serde(default)]
    pub pace: BreakPace,
    /// Number of focus blocks in the session, 1 to 24 (default 4)
    #[serde(default = "default_focus_blocks")]
    pub focus_blocks: u32,
}

impl PreviewSession {
    /// Rejects block counts outside `1..=MAX_FOCUS_BLOCKS`.
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_FOCUS_BLOCKS).contains(&self.focus_blocks) {
            Ok(())
        } else {
            Err(CompassError::invalid_input("focus_blocks").with_reason(format!(
                "must be between 1 and {MAX_FOCUS_BLOCKS}, got {}",
                self.focus_blocks
            )))
        }
    }
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self {
            pace: BreakPace::default(),
            focus_blocks: default_focus_blocks(),
        }
    }
}

fn default_focus_blocks() -> u32 {
    4
}
