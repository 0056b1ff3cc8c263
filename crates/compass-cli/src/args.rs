//! Command-line interface definitions using clap
//!
//! Argument structs here carry the clap attributes. Where a command maps onto
//! a core parameter type, a `From` impl does the conversion so the core stays
//! free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Core Logic
//! ```

use std::{path::PathBuf, str::FromStr};

use clap::{Args as ClapArgs, Parser, Subcommand};
use compass_core::{
    params::{Owner, PreviewSession},
    BreakPace, MAX_FOCUS_BLOCKS,
};

/// Compass study-recovery planning assistant
///
/// Compass asks a student six short questions (name and grade, subjects,
/// deadlines, daily study time, stress level and learning style) and turns the
/// answers into a four-week recovery plan with a study technique and break
/// schedule. Plans can be saved per owner, timed with a built-in Pomodoro
/// timer, and served to AI assistants over MCP.
#[derive(Parser)]
#[command(version, about, name = "compass")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/compass/compass.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Compass CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Answer the planning questions and get a recovery plan
    #[command(alias = "c")]
    Chat(ChatArgs),
    /// Manage saved plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Run or preview a Pomodoro-style study session
    #[command(alias = "t")]
    Timer(TimerArgs),
    /// Show an owner's study sessions from the last 7 days
    Stats(StatsArgs),
    /// Start the MCP server
    Serve,
}

/// Run the planning conversation on stdin/stdout
#[derive(ClapArgs)]
pub struct ChatArgs {
    /// Save the finished plan under this owner (e.g. an email address)
    #[arg(long)]
    pub owner: Option<String>,
}

/// Show the plan saved for an owner
#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    /// Owner the plan was saved under
    pub owner: String,
}

impl From<ShowPlanArgs> for Owner {
    fn from(val: ShowPlanArgs) -> Self {
        Owner { owner: val.owner }
    }
}

/// Show logged study sessions for an owner
#[derive(ClapArgs)]
pub struct StatsArgs {
    /// Owner the sessions were logged under
    pub owner: String,
}

/// Delete the plan saved for an owner
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// Owner the plan was saved under
    pub owner: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List saved plans, most recently updated first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the plan saved for an owner
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a saved plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Study session timer options
///
/// Durations default to the standard pace (25/5/15 minutes, long break every
/// 4 blocks), or to the pace of the plan saved for `--owner`. `--pace` picks
/// a pace directly, and individual options override any of them. Live runs
/// with `--owner` are logged for `compass stats`.
#[derive(ClapArgs)]
pub struct TimerArgs {
    /// Break pace: standard or frequent
    #[arg(long, value_parser = BreakPace::from_str)]
    pub pace: Option<BreakPace>,
    /// Focus block length in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub focus: Option<u32>,
    /// Short break length in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub short_break: Option<u32>,
    /// Long break length in minutes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub long_break: Option<u32>,
    /// Focus blocks between long breaks
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub interval: Option<u32>,
    /// Number of focus blocks in the session (at most 24)
    #[arg(
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FOCUS_BLOCKS))
    )]
    pub blocks: u32,
    /// Log the session for this owner and use their saved plan's pace
    #[arg(long)]
    pub owner: Option<String>,
    /// Print the schedule instead of running the timer
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&TimerArgs> for PreviewSession {
    fn from(val: &TimerArgs) -> Self {
        PreviewSession {
            pace: val.pace.unwrap_or_default(),
            focus_blocks: val.blocks,
        }
    }
}
