//! MCP tool handlers implementation

use compass_core::{
    deriver,
    display::{DeleteResult, OperationStatus, SaveResult, SavedPlans, SessionSchedule},
    params as core,
    timer::{self, TimerSettings},
    ControllerEvent, PlanStore,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{
    errors::{session_error, to_mcp_error},
    session::{SessionHandle, SessionSnapshot},
};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types only derive JsonSchema behind a feature flag and know
// nothing about rmcp. This transparent wrapper gives the tool router the
// Deserialize + JsonSchema pair it needs without touching them.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Owner = McpParams<core::Owner>;
pub type SubmitAnswer = McpParams<core::SubmitAnswer>;
pub type DerivePlan = McpParams<core::DerivePlan>;
pub type PreviewSession = McpParams<core::PreviewSession>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: PlanStore,
    session: SessionHandle,
}

impl McpHandlers {
    pub fn new(store: PlanStore, session: SessionHandle) -> Self {
        Self { store, session }
    }

    pub async fn current_question(&self) -> McpResult {
        debug!("current_question");

        let snapshot = self.session.snapshot().await.map_err(session_error)?;
        text_result(describe_progress(&snapshot))
    }

    pub async fn submit_answer(&self, Parameters(params): Parameters<SubmitAnswer>) -> McpResult {
        debug!("submit_answer: {:?}", params);

        let event = self
            .session
            .submit(params.as_ref().text.as_str())
            .await
            .map_err(session_error)?;

        match event {
            ControllerEvent::Ignored => {
                let snapshot = self.session.snapshot().await.map_err(session_error)?;
                let status = match snapshot.prompt {
                    Some(prompt) => OperationStatus::failure(format!(
                        "Answer was blank and has been ignored. Still waiting on: {prompt}"
                    )),
                    None => OperationStatus::failure(
                        "The conversation is already complete. Use 'reset_conversation' to start over.",
                    ),
                };
                text_result(status.to_string())
            }
            event => text_result(event.to_string()),
        }
    }

    pub async fn reset_conversation(&self) -> McpResult {
        debug!("reset_conversation");

        let snapshot = self.session.reset().await.map_err(session_error)?;
        let prompt = snapshot.prompt.unwrap_or_default();
        let status = OperationStatus::success("Conversation reset.");
        text_result(format!("{status}\n{prompt}\n"))
    }

    pub async fn derive_plan(&self, Parameters(params): Parameters<DerivePlan>) -> McpResult {
        debug!("derive_plan: {:?}", params);

        let plan = deriver::derive(&params.as_ref().to_record());
        text_result(plan.to_string())
    }

    pub async fn save_plan(&self, Parameters(params): Parameters<Owner>) -> McpResult {
        debug!("save_plan: {:?}", params);

        let snapshot = self.session.snapshot().await.map_err(session_error)?;
        let Some((plan, answers)) = snapshot.completed() else {
            return Err(ErrorData::invalid_params(
                format!(
                    "Conversation is not complete ({} of {} questions answered)",
                    snapshot.answered, snapshot.total
                ),
                None,
            ));
        };

        let saved = self
            .store
            .save_plan(&params.as_ref().owner, plan, answers)
            .await
            .map_err(|e| to_mcp_error("Failed to save plan", &e))?;

        text_result(SaveResult::new(saved).to_string())
    }

    pub async fn show_saved_plan(&self, Parameters(params): Parameters<Owner>) -> McpResult {
        debug!("show_saved_plan: {:?}", params);

        let saved = self
            .store
            .require_plan(&params.as_ref().owner)
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        text_result(saved.to_string())
    }

    pub async fn list_saved_plans(&self) -> McpResult {
        debug!("list_saved_plans");

        let summaries = self
            .store
            .list_plans()
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let plans = SavedPlans(summaries);
        if plans.is_empty() {
            return text_result(plans.to_string());
        }
        text_result(format!("# Saved Plans ({})\n\n{plans}", plans.len()))
    }

    pub async fn delete_saved_plan(&self, Parameters(params): Parameters<Owner>) -> McpResult {
        debug!("delete_saved_plan: {:?}", params);

        let owner = params.as_ref().owner.trim();
        self.store
            .delete_plan(owner)
            .await
            .map_err(|e| to_mcp_error("Failed to delete plan", &e))?;

        text_result(DeleteResult::new(owner).to_string())
    }

    pub async fn preview_session(
        &self,
        Parameters(params): Parameters<PreviewSession>,
    ) -> McpResult {
        debug!("preview_session: {:?}", params);

        let params = params.as_ref();
        params
            .validate()
            .map_err(|e| to_mcp_error("Invalid session preview", &e))?;

        let settings = TimerSettings::from(params.pace);
        let phases = timer::schedule(&settings, params.focus_blocks);

        text_result(format!(
            "# {} Pace Session\n\n{}",
            capitalize(params.pace.as_str()),
            SessionSchedule(phases)
        ))
    }

    pub async fn study_stats(&self, Parameters(params): Parameters<Owner>) -> McpResult {
        debug!("study_stats: {:?}", params);

        let stats = self
            .store
            .weekly_stats(&params.as_ref().owner)
            .await
            .map_err(|e| to_mcp_error("Failed to load study sessions", &e))?;

        text_result(stats.to_string())
    }
}

fn describe_progress(snapshot: &SessionSnapshot) -> String {
    match &snapshot.prompt {
        Some(prompt) => format!(
            "Question {} of {}: {prompt}\n",
            snapshot.answered + 1,
            snapshot.total
        ),
        None => "All questions are answered. Use 'save_plan' to keep the plan or \
                 'reset_conversation' to start over.\n"
            .to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use compass_core::{conversation::Answer, ConversationController, PlanStoreBuilder};
    use tempfile::TempDir;

    use super::*;

    const ANSWERS: [&str; 6] = ["Sam, 10th", "Math, Physics", "June 1", "4", "8", "Visual"];

    async fn create_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = PlanStoreBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .expect("Failed to create store");
        let session = SessionHandle::spawn(ConversationController::default());
        (temp_dir, McpHandlers::new(store, session))
    }

    fn owner(owner: &str) -> Parameters<Owner> {
        Parameters(McpParams(core::Owner {
            owner: owner.to_string(),
        }))
    }

    fn text_of(result: CallToolResult) -> String {
        result
            .content
            .into_iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    async fn answer_all(handlers: &McpHandlers) -> String {
        let mut last = String::new();
        for answer in ANSWERS {
            let params = Parameters(McpParams(core::SubmitAnswer {
                text: answer.to_string(),
            }));
            last = text_of(handlers.submit_answer(params).await.unwrap());
        }
        last
    }

    #[tokio::test]
    async fn test_current_question_reports_progress() {
        let (_temp_dir, handlers) = create_handlers().await;

        let text = text_of(handlers.current_question().await.unwrap());
        assert!(text.starts_with("Question 1 of 6:"));
        assert!(text.contains("name and grade"));
    }

    #[tokio::test]
    async fn test_conversation_ends_with_plan() {
        let (_temp_dir, handlers) = create_handlers().await;

        let text = answer_all(&handlers).await;
        assert!(text.contains("# Study Recovery Plan for Sam"));
        assert!(text.contains("Foundations in Math"));
    }

    #[tokio::test]
    async fn test_blank_answer_is_reported() {
        let (_temp_dir, handlers) = create_handlers().await;

        let params = Parameters(McpParams(core::SubmitAnswer {
            text: "  ".to_string(),
        }));
        let text = text_of(handlers.submit_answer(params).await.unwrap());
        assert!(text.starts_with("Error: Answer was blank"));
    }

    #[tokio::test]
    async fn test_save_requires_complete_conversation() {
        let (_temp_dir, handlers) = create_handlers().await;

        let err = handlers.save_plan(owner("sam")).await.unwrap_err();
        assert!(err.message.contains("0 of 6"));
    }

    #[tokio::test]
    async fn test_save_show_list_delete() {
        let (_temp_dir, handlers) = create_handlers().await;
        answer_all(&handlers).await;

        let saved = text_of(handlers.save_plan(owner("sam")).await.unwrap());
        assert!(saved.starts_with("Saved plan for sam"));

        let shown = text_of(handlers.show_saved_plan(owner("sam")).await.unwrap());
        assert!(shown.contains("Catching up on Physics"));

        let listed = text_of(handlers.list_saved_plans().await.unwrap());
        assert!(listed.starts_with("# Saved Plans (1)"));
        assert!(listed.contains("**sam**"));

        let deleted = text_of(handlers.delete_saved_plan(owner("sam")).await.unwrap());
        assert_eq!(deleted, "Deleted saved plan for sam\n");

        assert!(handlers.show_saved_plan(owner("sam")).await.is_err());

        let listed = text_of(handlers.list_saved_plans().await.unwrap());
        assert_eq!(listed, "No saved plans found.\n");
    }

    #[tokio::test]
    async fn test_derive_plan_from_answers() {
        let (_temp_dir, handlers) = create_handlers().await;

        let params = core::DerivePlan {
            answers: vec![
                Answer {
                    key: "subjects".to_string(),
                    value: "Chemistry".to_string(),
                },
                Answer {
                    key: "learningStyle".to_string(),
                    value: "I like podcasts and audio".to_string(),
                },
            ],
        };
        let text = text_of(handlers.derive_plan(Parameters(McpParams(params))).await.unwrap());

        assert!(text.contains("# Study Recovery Plan for Student"));
        assert!(text.contains("- **Chemistry**: 2.0 h/day."));
        assert!(text.contains("- Learning style: I like podcasts and audio"));
    }

    #[tokio::test]
    async fn test_preview_session() {
        let (_temp_dir, handlers) = create_handlers().await;

        let params = Parameters(McpParams(core::PreviewSession {
            pace: compass_core::BreakPace::Frequent,
            focus_blocks: 2,
        }));
        let text = text_of(handlers.preview_session(params).await.unwrap());

        assert!(text.starts_with("# Frequent Pace Session"));
        assert!(text.contains("1. Focus (20 min)"));
        assert!(text.contains("Total: 45 min"));
    }

    #[tokio::test]
    async fn test_preview_session_rejects_block_counts_out_of_range() {
        let (_temp_dir, handlers) = create_handlers().await;

        for focus_blocks in [0, timer::MAX_FOCUS_BLOCKS + 1, u32::MAX] {
            let params = Parameters(McpParams(core::PreviewSession {
                pace: compass_core::BreakPace::Standard,
                focus_blocks,
            }));
            let err = handlers.preview_session(params).await.unwrap_err();

            assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
            assert!(err.message.contains("focus_blocks"));
        }
    }

    #[tokio::test]
    async fn test_study_stats() {
        let (_temp_dir, handlers) = create_handlers().await;

        let text = text_of(handlers.study_stats(owner("sam")).await.unwrap());
        assert_eq!(text, "No study sessions for sam in the last 7 days.\n");

        let now = jiff::Timestamp::now();
        handlers
            .store
            .record_session(compass_core::NewStudySession {
                owner: "sam".to_string(),
                pace: compass_core::BreakPace::Standard,
                planned_focus_blocks: 4,
                completed_focus_blocks: 2,
                focus_minutes: 50,
                started_at: now,
                ended_at: now,
            })
            .await
            .expect("Failed to record session");

        let text = text_of(handlers.study_stats(owner("sam")).await.unwrap());
        assert!(text.contains("- Sessions: 1 (0 finished)"));
        assert!(text.contains("- Focus time: 50 min"));

        assert!(handlers.study_stats(owner(" ")).await.is_err());
    }
}
