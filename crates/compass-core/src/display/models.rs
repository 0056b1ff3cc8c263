//! Display implementations for domain models.
//!
//! Everything formats as markdown so the same text works in the terminal
//! renderer and in MCP tool responses.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    conversation::{ControllerEvent, ConversationPhase},
    models::{
        BreakPace, FocusArea, LearningStyle, Plan, SavedPlan, StudySession, TimelineWeek,
        WeeklyStats,
    },
};

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BreakPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ConversationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConversationPhase::Collecting => "collecting",
            ConversationPhase::Complete => "complete",
        })
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.profile;
        writeln!(f, "# Study Recovery Plan for {}", profile.name)?;
        writeln!(f)?;

        if let Some(grade) = &profile.grade {
            writeln!(f, "- Grade: {grade}")?;
        }
        writeln!(f, "- Learning style: {}", profile.learning_style)?;
        writeln!(f, "- Stress level: {}/10", profile.stress_level)?;
        writeln!(f, "- Daily study time: {} h", profile.daily_hours)?;
        writeln!(f, "- Deadlines: {}", profile.deadlines)?;

        writeln!(f, "\n## Focus Areas")?;
        writeln!(f)?;
        for area in &self.focus_areas {
            write!(f, "{area}")?;
        }

        let technique = &self.technique;
        writeln!(f, "\n## Study Technique")?;
        writeln!(f)?;
        writeln!(f, "- Method: {}", technique.primary_method)?;
        writeln!(f, "- Resources: {}", technique.resources)?;
        writeln!(f, "- Breaks: {}", technique.break_strategy)?;

        writeln!(f, "\n## Timeline")?;
        for week in &self.timeline {
            writeln!(f)?;
            write!(f, "{week}")?;
        }

        Ok(())
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}**: {:.1} h/day. {}",
            self.subject, self.allocated_hours, self.rationale
        )
    }
}

impl fmt::Display for TimelineWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}: {}", self.week_label, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for activity in &self.activities {
            writeln!(f, "- {activity}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "_Saved for {} on {}_",
            self.owner,
            LocalDateTime(&self.updated_at)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

impl fmt::Display for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} focus blocks, {} pace ({} min)",
            LocalDateTime(&self.started_at),
            self.completed_focus_blocks,
            self.planned_focus_blocks,
            self.pace,
            self.focus_minutes
        )
    }
}

impl fmt::Display for WeeklyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sessions.is_empty() {
            return writeln!(f, "No study sessions for {} in the last 7 days.", self.owner);
        }

        writeln!(f, "# Study Sessions for {} (last 7 days)", self.owner)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Sessions: {} ({} finished)",
            self.total_sessions(),
            self.finished_sessions()
        )?;
        writeln!(f, "- Focus blocks: {}", self.total_focus_blocks())?;
        writeln!(f, "- Focus time: {} min", self.total_focus_minutes())?;
        writeln!(f)?;
        writeln!(f, "## Sessions")?;
        writeln!(f)?;
        for session in &self.sessions {
            writeln!(f, "- {session}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ControllerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerEvent::Prompt { text } => writeln!(f, "{text}"),
            ControllerEvent::Plan { plan } => write!(f, "{plan}"),
            ControllerEvent::Ignored => Ok(()),
        }
    }
}
