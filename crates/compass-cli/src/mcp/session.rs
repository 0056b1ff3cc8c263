//! Conversation session actor.
//!
//! MCP tool calls arrive on arbitrary runtime tasks, while a
//! [`ConversationController`] is single-owner. The controller lives inside one
//! spawned task and every tool call talks to it through [`SessionHandle`],
//! which sends a [`SessionRequest`] and awaits the oneshot reply.

use anyhow::{anyhow, Result};
use compass_core::{
    conversation::ConversationState, AnswerRecord, ControllerEvent, ConversationController,
    ConversationPhase, Plan,
};
use log::debug;
use tokio::sync::{mpsc, oneshot};

const CHANNEL_CAPACITY: usize = 32;

/// Point-in-time view of the conversation.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: ConversationPhase,
    /// Prompt awaiting an answer, `None` once complete
    pub prompt: Option<String>,
    pub answered: usize,
    pub total: usize,
    pub state: ConversationState,
    pub plan: Option<Plan>,
}

impl SessionSnapshot {
    fn capture(controller: &ConversationController) -> Self {
        let (answered, total) = controller.progress();
        Self {
            phase: controller.phase(),
            prompt: controller.current_prompt().map(String::from),
            answered,
            total,
            state: controller.state(),
            plan: controller.plan().cloned(),
        }
    }

    /// The derived plan and the answers it came from, once complete.
    pub fn completed(&self) -> Option<(&Plan, &AnswerRecord)> {
        self.plan.as_ref().map(|plan| (plan, &self.state.answers))
    }
}

/// Requests handled by the session task.
#[derive(Debug)]
pub enum SessionRequest {
    Submit {
        text: String,
        reply: oneshot::Sender<ControllerEvent>,
    },
    Reset {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Cloneable handle to the session task.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionRequest>,
}

impl SessionHandle {
    /// Spawns the session task on the current runtime.
    pub fn spawn(controller: ConversationController) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(session_loop(controller, rx));
        Self { tx }
    }

    pub async fn submit(&self, text: impl Into<String>) -> Result<ControllerEvent> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionRequest::Submit {
            text: text.into(),
            reply,
        })
        .await?;
        rx.await.map_err(|_| closed())
    }

    /// Starts the conversation over and returns the fresh state.
    pub async fn reset(&self) -> Result<SessionSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionRequest::Reset { reply }).await?;
        rx.await.map_err(|_| closed())
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionRequest::Snapshot { reply }).await?;
        rx.await.map_err(|_| closed())
    }

    async fn send(&self, request: SessionRequest) -> Result<()> {
        self.tx.send(request).await.map_err(|_| closed())
    }
}

fn closed() -> anyhow::Error {
    anyhow!("Conversation session has shut down")
}

async fn session_loop(
    mut controller: ConversationController,
    mut rx: mpsc::Receiver<SessionRequest>,
) {
    debug!("Conversation session started");

    while let Some(request) = rx.recv().await {
        match request {
            SessionRequest::Submit { text, reply } => {
                let event = controller.submit(&text);
                let _ = reply.send(event);
            }
            SessionRequest::Reset { reply } => {
                controller.reset();
                let _ = reply.send(SessionSnapshot::capture(&controller));
            }
            SessionRequest::Snapshot { reply } => {
                let _ = reply.send(SessionSnapshot::capture(&controller));
            }
        }
    }

    debug!("Conversation session stopped");
}
