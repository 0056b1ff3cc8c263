//! Command handlers for the Compass CLI.
//!
//! [`Cli`] owns the plan store and the renderer and runs one command to
//! completion. Output is built from the core's `Display` impls and handed to
//! the renderer as markdown.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use compass_core::{
    params::{Owner, PreviewSession},
    timer::{self, Phase, PhaseChange, SessionTimer, TimerSettings},
    BreakPace, ControllerEvent, ConversationController, ConversationPhase, DeleteResult,
    NewStudySession, OperationStatus, PlanStore, SavedPlans, SessionSchedule,
};
use jiff::Timestamp;
use log::{debug, info, warn};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    time::{interval, MissedTickBehavior},
};

use crate::{
    args::{ChatArgs, DeletePlanArgs, PlanCommands, StatsArgs, TimerArgs},
    renderer::TerminalRenderer,
};

const TICK: Duration = Duration::from_secs(1);

pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Runs the conversation over stdin, one answer per line.
    pub async fn chat(&self, args: ChatArgs) -> Result<()> {
        let mut controller = ConversationController::default();
        let mut lines = BufReader::new(io::stdin()).lines();

        if let Some(prompt) = controller.current_prompt() {
            self.renderer.render(&format!("{prompt}\n"))?;
        }

        while let Some(line) = lines.next_line().await.context("Failed to read answer")? {
            match controller.submit(&line) {
                ControllerEvent::Ignored => {
                    debug!("Blank line ignored");
                }
                ControllerEvent::Prompt { text } => {
                    self.renderer.render(&format!("\n{text}\n"))?;
                }
                ControllerEvent::Plan { plan } => {
                    self.renderer.render(&format!("\n{plan}"))?;

                    if let Some(owner) = &args.owner {
                        let answers = controller.answers().all();
                        match self.store.save_plan(owner, &plan, &answers).await {
                            Ok(saved) => {
                                info!("Saved plan for {}", saved.owner);
                                let status = OperationStatus::success(format!(
                                    "Plan saved for {}",
                                    saved.owner
                                ));
                                self.renderer.render(&format!("\n{status}"))?;
                            }
                            Err(e) => warn!("Failed to save plan for {owner}: {e}"),
                        }
                    }
                    break;
                }
            }
        }

        if controller.phase() == ConversationPhase::Collecting {
            let (answered, total) = controller.progress();
            let status = OperationStatus::failure(format!(
                "Conversation ended after {answered} of {total} questions; no plan was made."
            ));
            self.renderer.render(&format!("\n{status}"))?;
        }

        Ok(())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(args).await,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .store
            .list_plans()
            .await
            .context("Failed to list plans")?;

        self.renderer.render(&SavedPlans(summaries).to_string())
    }

    async fn show_plan(&self, params: &Owner) -> Result<()> {
        let saved = self
            .store
            .require_plan(&params.owner)
            .await
            .context("Failed to get plan")?;

        self.renderer.render(&saved.to_string())
    }

    async fn delete_plan(&self, args: DeletePlanArgs) -> Result<()> {
        let owner = args.owner.trim();
        if !args.confirm {
            bail!("Refusing to delete the plan for '{owner}' without --confirm");
        }

        self.store
            .delete_plan(owner)
            .await
            .context("Failed to delete plan")?;

        self.renderer.render(&DeleteResult::new(owner).to_string())
    }

    pub async fn timer(&self, args: TimerArgs) -> Result<()> {
        let mut preview = PreviewSession::from(&args);
        if let (None, Some(owner)) = (args.pace, &args.owner) {
            let saved = self
                .store
                .require_plan(owner)
                .await
                .context("Failed to load plan for timer")?;
            preview.pace = saved.plan.technique.pace;
        }
        preview.validate().context("Invalid session length")?;

        let settings = resolve_settings(preview.pace, &args)?;
        debug!("Timer settings: {settings:?}");

        if args.dry_run {
            let phases = timer::schedule(&settings, preview.focus_blocks);
            return self.renderer.render(&SessionSchedule(phases).to_string());
        }

        let started_at = Timestamp::now();
        let completed = self.run_timer(settings, preview.focus_blocks).await?;

        if let Some(owner) = &args.owner {
            let session = study_session(
                owner,
                &preview,
                &settings,
                completed,
                started_at,
                Timestamp::now(),
            );
            match self.store.record_session(session).await {
                Ok(logged) => info!("Logged study session {} for {}", logged.id, logged.owner),
                Err(e) => warn!("Failed to log study session for {owner}: {e}"),
            }
        }

        Ok(())
    }

    pub async fn stats(&self, args: StatsArgs) -> Result<()> {
        let stats = self
            .store
            .weekly_stats(&args.owner)
            .await
            .context("Failed to load study sessions")?;

        self.renderer.render(&stats.to_string())
    }

    /// Runs the timer until the last focus block ends or Ctrl-C, returning
    /// the number of focus blocks completed.
    async fn run_timer(&self, settings: TimerSettings, focus_blocks: u32) -> Result<u32> {
        let mut session = SessionTimer::new(settings);
        let mut ticker = interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        self.renderer.render(&format!(
            "Starting {focus_blocks} focus blocks. Press Ctrl-C to stop.\n\n{}",
            announce(Phase::Focus, &settings)
        ))?;
        session.start();

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    for change in session.tick(TICK) {
                        if is_last_block(&change, focus_blocks) {
                            let status = OperationStatus::success(format!(
                                "Session complete: {focus_blocks} focus blocks done."
                            ));
                            self.renderer.render(&format!("\n{status}"))?;
                            return Ok(focus_blocks);
                        }
                        self.renderer.render(&announce(change.to, &settings))?;
                    }
                }
                _ = &mut ctrl_c => {
                    session.pause();
                    let completed = session.completed_focus_blocks().min(focus_blocks);
                    let status = OperationStatus::failure(format!(
                        "Stopped after {completed} of {focus_blocks} focus blocks."
                    ));
                    self.renderer.render(&format!("\n{status}"))?;
                    return Ok(completed);
                }
            }
        }
    }
}

/// Starts from the pace's timings and applies explicit overrides.
fn resolve_settings(pace: BreakPace, args: &TimerArgs) -> Result<TimerSettings> {
    let base = TimerSettings::from(pace);
    TimerSettings::new(
        args.focus.unwrap_or(base.focus_minutes),
        args.short_break.unwrap_or(base.short_break_minutes),
        args.long_break.unwrap_or(base.long_break_minutes),
        args.interval.unwrap_or(base.long_break_interval),
    )
    .context("Invalid timer settings")
}

fn study_session(
    owner: &str,
    preview: &PreviewSession,
    settings: &TimerSettings,
    completed_focus_blocks: u32,
    started_at: Timestamp,
    ended_at: Timestamp,
) -> NewStudySession {
    NewStudySession {
        owner: owner.to_string(),
        pace: preview.pace,
        planned_focus_blocks: preview.focus_blocks,
        completed_focus_blocks,
        focus_minutes: completed_focus_blocks.saturating_mul(settings.focus_minutes),
        started_at,
        ended_at,
    }
}

fn is_last_block(change: &PhaseChange, focus_blocks: u32) -> bool {
    change.from == Phase::Focus && change.completed_focus_blocks >= focus_blocks
}

fn announce(phase: Phase, settings: &TimerSettings) -> String {
    let minutes = settings.duration(phase).as_secs() / 60;
    format!("- **{phase}** for {minutes} min\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_args() -> TimerArgs {
        TimerArgs {
            focus: None,
            short_break: None,
            long_break: None,
            interval: None,
            pace: None,
            blocks: 4,
            owner: None,
            dry_run: true,
        }
    }

    #[test]
    fn test_resolve_settings_uses_pace() {
        let settings = resolve_settings(BreakPace::Frequent, &timer_args()).unwrap();
        assert_eq!(settings, TimerSettings::from(BreakPace::Frequent));
    }

    #[test]
    fn test_resolve_settings_applies_overrides() {
        let args = TimerArgs {
            focus: Some(50),
            interval: Some(3),
            ..timer_args()
        };
        let settings = resolve_settings(BreakPace::Standard, &args).unwrap();

        assert_eq!(settings.focus_minutes, 50);
        assert_eq!(settings.short_break_minutes, 5);
        assert_eq!(settings.long_break_interval, 3);
    }

    #[test]
    fn test_last_block_detection() {
        let change = PhaseChange {
            from: Phase::Focus,
            to: Phase::LongBreak,
            completed_focus_blocks: 4,
        };
        assert!(is_last_block(&change, 4));
        assert!(!is_last_block(&change, 5));

        let back_to_focus = PhaseChange {
            from: Phase::ShortBreak,
            to: Phase::Focus,
            completed_focus_blocks: 4,
        };
        assert!(!is_last_block(&back_to_focus, 4));
    }

    #[test]
    fn test_announce() {
        let settings = TimerSettings::default();
        assert_eq!(announce(Phase::ShortBreak, &settings), "- **Short break** for 5 min\n");
    }

    #[test]
    fn test_study_session_for_stopped_run() {
        let preview = PreviewSession {
            pace: BreakPace::Frequent,
            focus_blocks: 4,
        };
        let settings = TimerSettings::from(BreakPace::Frequent);
        let started_at = Timestamp::now();

        let session = study_session("sam", &preview, &settings, 1, started_at, started_at);

        assert_eq!(session.owner, "sam");
        assert_eq!(session.pace, BreakPace::Frequent);
        assert_eq!(session.planned_focus_blocks, 4);
        assert_eq!(session.completed_focus_blocks, 1);
        assert_eq!(session.focus_minutes, 20);
    }
}
