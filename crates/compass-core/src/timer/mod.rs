//! Pomodoro-style study session timer.
//!
//! [`SessionTimer`] is a pure state machine. It never reads the clock.
//! Hosts feed it elapsed time through [`SessionTimer::tick`] and react to the
//! returned [`PhaseChange`]s. This keeps it deterministic under test and lets
//! any runtime drive it.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use compass_core::{models::BreakPace, timer::{Phase, SessionTimer, TimerSettings}};
//!
//! let mut timer = SessionTimer::new(TimerSettings::from(BreakPace::Standard));
//! timer.start();
//!
//! let changes = timer.tick(Duration::from_secs(25 * 60));
//! assert_eq!(changes[0].to, Phase::ShortBreak);
//! ```

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CompassError, Result},
    models::BreakPace,
};


/// Phase durations in minutes and how often the long break comes around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerSettings {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Focus blocks completed before a long break replaces the short one
    pub long_break_interval: u32,
}

impl TimerSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::InvalidInput` if any value is zero.
    pub fn new(
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        long_break_interval: u32,
    ) -> Result<Self> {
        for (field, value) in [
            ("focus_minutes", focus_minutes),
            ("short_break_minutes", short_break_minutes),
            ("long_break_minutes", long_break_minutes),
            ("long_break_interval", long_break_interval),
        ] {
            if value == 0 {
                return Err(CompassError::invalid_input(field).with_reason("must be at least 1"));
            }
        }

        Ok(Self {
            focus_minutes,
            short_break_minutes,
            long_break_minutes,
            long_break_interval,
        })
    }

    /// Length of a phase. Never shorter than one minute.
    pub fn duration(&self, phase: Phase) -> Duration {
        let minutes = match phase {
            Phase::Focus => self.focus_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        Duration::from_secs(u64::from(minutes.max(1)) * 60)
    }
}

impl From<BreakPace> for TimerSettings {
    /// The timings described by each pace's break strategy text.
    fn from(pace: BreakPace) -> Self {
        match pace {
            BreakPace::Frequent => Self {
                focus_minutes: 20,
                short_break_minutes: 5,
                long_break_minutes: 20,
                long_break_interval: 2,
            },
            BreakPace::Standard => Self {
                focus_minutes: 25,
                short_break_minutes: 5,
                long_break_minutes: 15,
                long_break_interval: 4,
            },
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        BreakPace::Standard.into()
    }
}

/// A segment of a study session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
        })
    }
}

/// A transition between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Focus blocks completed once this change took effect
    pub completed_focus_blocks: u32,
}

/// One entry of a previewed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledPhase {
    pub phase: Phase,
    pub duration: Duration,
}

/// Tracks the current phase and remaining time of a study session.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    settings: TimerSettings,
    phase: Phase,
    remaining: Duration,
    completed_focus_blocks: u32,
    running: bool,
}

impl SessionTimer {
    /// Creates a paused timer at the start of a focus block.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            phase: Phase::Focus,
            remaining: settings.duration(Phase::Focus),
            completed_focus_blocks: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time left in the current phase.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn completed_focus_blocks(&self) -> u32 {
        self.completed_focus_blocks
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Advances the clock while running.
    ///
    /// Time beyond the end of a phase carries into the following phases, so
    /// one large tick can produce several changes. A paused timer ignores
    /// ticks.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<PhaseChange> {
        let mut changes = Vec::new();
        if !self.running {
            return changes;
        }

        let mut elapsed = elapsed;
        while elapsed >= self.remaining {
            elapsed -= self.remaining;
            changes.push(self.finish_phase());
        }
        self.remaining -= elapsed;

        changes
    }

    /// Ends the current phase early.
    pub fn skip(&mut self) -> PhaseChange {
        self.finish_phase()
    }

    /// Returns to a paused, fresh focus block.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    fn finish_phase(&mut self) -> PhaseChange {
        let from = self.phase;
        let to = match from {
            Phase::Focus => {
                self.completed_focus_blocks += 1;
                if self.completed_focus_blocks % self.settings.long_break_interval.max(1) == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };

        self.phase = to;
        self.remaining = self.settings.duration(to);

        PhaseChange {
            from,
            to,
            completed_focus_blocks: self.completed_focus_blocks,
        }
    }
}

/// Most focus blocks a single session may plan.
pub const MAX_FOCUS_BLOCKS: u32 = 24;

/// Lists the phases of a session with the given number of focus blocks.
///
/// Each focus block is followed by its break, except the last one: the
/// session ends when the final block does. Requests above
/// [`MAX_FOCUS_BLOCKS`] are clamped to it.
pub fn schedule(settings: &TimerSettings, focus_blocks: u32) -> Vec<ScheduledPhase> {
    let focus_blocks = focus_blocks.min(MAX_FOCUS_BLOCKS);
    let mut timer = SessionTimer::new(*settings);
    let mut phases = Vec::with_capacity(focus_blocks as usize * 2);

    for block in 0..focus_blocks {
        phases.push(ScheduledPhase {
            phase: Phase::Focus,
            duration: settings.duration(Phase::Focus),
        });
        let change = timer.skip();
        if block + 1 < focus_blocks {
            phases.push(ScheduledPhase {
                phase: change.to,
                duration: settings.duration(change.to),
            });
        }
        timer.skip();
    }

    phases
}
