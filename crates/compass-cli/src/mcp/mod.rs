//! MCP server implementation for Compass
//!
//! Exposes the planning conversation to AI assistants over stdio. One
//! conversation runs per server process, confined to the session task in
//! [`session`]; saved plans go through the shared [`PlanStore`].

use anyhow::Result;
use compass_core::{ConversationController, PlanStore};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod session;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{DerivePlan, McpResult, Owner, PreviewSession, SubmitAnswer};
use session::SessionHandle;

/// MCP server for Compass
#[derive(Clone)]
pub struct CompassMcpServer {
    store: PlanStore,
    session: SessionHandle,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CompassMcpServer {
    /// Create a new Compass MCP server with a fresh conversation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(store: PlanStore) -> Self {
        Self {
            store,
            session: SessionHandle::spawn(ConversationController::default()),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone(), self.session.clone())
    }

    #[tool(
        name = "current_question",
        description = "Show the question the student should answer next, with progress (e.g. 'Question 2 of 6'). Once every question is answered, says so instead."
    )]
    async fn current_question(&self) -> McpResult {
        self.handlers().current_question().await
    }

    #[tool(
        name = "submit_answer",
        description = "Answer the current question with the student's own words. Returns the next question, or the full study-recovery plan in markdown after the last answer. Blank answers are ignored and do not advance the conversation."
    )]
    async fn submit_answer(&self, params: Parameters<SubmitAnswer>) -> McpResult {
        self.handlers().submit_answer(params).await
    }

    #[tool(
        name = "reset_conversation",
        description = "Discard all answers and the derived plan and start again from the first question. Saved plans are not affected."
    )]
    async fn reset_conversation(&self) -> McpResult {
        self.handlers().reset_conversation().await
    }

    #[tool(
        name = "derive_plan",
        description = "Build a plan directly from a list of answers without running the conversation. Keys: name_grade, subjects, deadlines, studyHours, stressLevel, learningStyle. Missing or unparseable answers fall back to defaults (2 hours a day, stress 5, General Studies, mixed learning style)."
    )]
    async fn derive_plan(&self, params: Parameters<DerivePlan>) -> McpResult {
        self.handlers().derive_plan(params).await
    }

    #[tool(
        name = "save_plan",
        description = "Save the plan from the completed conversation under an owner identifier such as an email address. Replaces any plan that owner already had. Fails if the conversation is not complete yet."
    )]
    async fn save_plan(&self, params: Parameters<Owner>) -> McpResult {
        self.handlers().save_plan(params).await
    }

    #[tool(
        name = "show_saved_plan",
        description = "Display the plan saved for an owner, including when it was last updated."
    )]
    async fn show_saved_plan(&self, params: Parameters<Owner>) -> McpResult {
        self.handlers().show_saved_plan(params).await
    }

    #[tool(
        name = "list_saved_plans",
        description = "List every saved plan with its owner, student name, subjects and last update, most recent first."
    )]
    async fn list_saved_plans(&self) -> McpResult {
        self.handlers().list_saved_plans().await
    }

    #[tool(
        name = "delete_saved_plan",
        description = "Permanently delete the plan saved for an owner. This operation cannot be undone."
    )]
    async fn delete_saved_plan(&self, params: Parameters<Owner>) -> McpResult {
        self.handlers().delete_saved_plan(params).await
    }

    #[tool(
        name = "preview_session",
        description = "Preview a Pomodoro-style study session: pace 'standard' (25 min focus, 5 min breaks, 15 min long break every 4 blocks) or 'frequent' (20 min focus, 5 min breaks, 20 min long break every 2 blocks). Use the pace from the student's plan."
    )]
    async fn preview_session(&self, params: Parameters<PreviewSession>) -> McpResult {
        self.handlers().preview_session(params).await
    }

    #[tool(
        name = "study_stats",
        description = "Summarize the study sessions an owner ran with the Compass timer over the last 7 days: session count, focus blocks and focus minutes."
    )]
    async fn study_stats(&self, params: Parameters<Owner>) -> McpResult {
        self.handlers().study_stats(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CompassMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "compass".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Compass helps a student who has fallen behind build a four-week study-recovery plan.

## Conversation
Compass asks six questions in a fixed order: name and grade, subjects, deadlines, daily study hours, stress level (1-10) and learning style.
1. Call `current_question` and ask the student that question
2. Pass their reply, in their own words, to `submit_answer`
3. Repeat until `submit_answer` returns the plan
4. Offer to keep it with `save_plan` (needs an owner such as an email address)

Use `reset_conversation` to start over. Only one conversation runs at a time.

## Other Tools
- `derive_plan`: build a plan from answers you already have
- `show_saved_plan`, `list_saved_plans`, `delete_saved_plan`: manage saved plans
- `preview_session`: show a study session schedule for the plan's break pace (1 to 24 focus blocks)
- `study_stats`: review the timed sessions an owner logged this week"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CompassMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Compass MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
